//! Record list card widget.
//!
//! A tabular card with a header, optional custom actions, and pass-through
//! row events. It peers with the tree widget but neither depends on the
//! other. Rows are loosely shaped host records, carried as JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::CardEvent;

/// One column definition for the card's table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    pub label: String,
    pub field_name: String,
    /// Cell content type, e.g. `text`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A host-defined header action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardAction {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

/// State for the record list card.
#[derive(Debug, Clone)]
pub struct RecordListCard {
    icon_name: String,
    header_label: String,
    custom_actions: Vec<CardAction>,
    records: Vec<Value>,
    columns: Vec<Column>,
    sorted_by: String,
    show_row_numbers: bool,
    disable_column_resize: bool,
    show_default_actions: bool,
    table_visible: bool,
    relayout_pending: bool,
    events: Vec<CardEvent>,
}

impl Default for RecordListCard {
    fn default() -> Self {
        Self {
            icon_name: "standard:account".to_owned(),
            header_label: String::new(),
            custom_actions: Vec::new(),
            records: Vec::new(),
            columns: Vec::new(),
            sorted_by: String::new(),
            show_row_numbers: false,
            disable_column_resize: false,
            show_default_actions: false,
            table_visible: true,
            relayout_pending: false,
            events: Vec::new(),
        }
    }
}

impl RecordListCard {
    /// Create a card with the given header label.
    #[must_use]
    pub fn new(header_label: impl Into<String>) -> Self {
        Self {
            header_label: header_label.into(),
            ..Self::default()
        }
    }

    pub fn set_icon_name(&mut self, icon_name: impl Into<String>) {
        self.icon_name = icon_name.into();
    }

    #[must_use]
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn set_header_label(&mut self, label: impl Into<String>) {
        self.header_label = label.into();
    }

    #[must_use]
    pub fn header_label(&self) -> &str {
        &self.header_label
    }

    pub fn set_custom_actions(&mut self, actions: Vec<CardAction>) {
        self.custom_actions = actions;
    }

    #[must_use]
    pub fn custom_actions(&self) -> &[CardAction] {
        &self.custom_actions
    }

    pub fn set_records(&mut self, records: Vec<Value>) {
        self.records = records;
    }

    #[must_use]
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn set_sorted_by(&mut self, field: impl Into<String>) {
        self.sorted_by = field.into();
    }

    pub fn set_show_row_numbers(&mut self, show: bool) {
        self.show_row_numbers = show;
    }

    pub fn set_disable_column_resize(&mut self, disable: bool) {
        self.disable_column_resize = disable;
    }

    #[must_use]
    pub fn disable_column_resize(&self) -> bool {
        self.disable_column_resize
    }

    pub fn set_show_default_actions(&mut self, show: bool) {
        self.show_default_actions = show;
    }

    #[must_use]
    pub fn show_default_actions(&self) -> bool {
        self.show_default_actions
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the empty state replaces the table.
    #[must_use]
    pub fn show_no_data(&self) -> bool {
        self.records.is_empty()
    }

    /// Message shown in the empty state, e.g. `"No open cases"`.
    #[must_use]
    pub fn empty_state_message(&self) -> String {
        format!("No {}", self.header_label.to_lowercase())
    }

    /// Sort annotation under the header, empty when unsorted.
    #[must_use]
    pub fn sorted_text(&self) -> String {
        if self.sorted_by.is_empty() {
            String::new()
        } else {
            format!("Sorted by {}", self.sorted_by)
        }
    }

    #[must_use]
    pub fn computed_icon_class(&self) -> &'static str {
        if self.show_row_numbers {
            "slds-icon_container"
        } else {
            "custom-icon-custom19 slds-icon_container"
        }
    }

    #[must_use]
    pub fn header_row_class(&self) -> &'static str {
        "slds-page-header__row slds-page-header__row--meta"
    }

    #[must_use]
    pub fn is_table_visible(&self) -> bool {
        self.table_visible
    }

    /// Force a full table relayout: hides the table now and arms the restore
    /// for the host's next [`tick`](Self::tick). Explicit two-phase command
    /// instead of a timer-driven flag flip, so the tree/selection core never
    /// sees rendering timing.
    pub fn reset_columns(&mut self) {
        self.table_visible = false;
        self.relayout_pending = true;
    }

    /// Next-frame callback from the host; completes a pending relayout.
    pub fn tick(&mut self) {
        if self.relayout_pending {
            self.relayout_pending = false;
            self.table_visible = true;
        }
    }

    /// A header action was activated.
    pub fn action_clicked(&mut self, action_name: impl Into<String>) {
        self.events.push(CardEvent::ActionClicked {
            action_name: action_name.into(),
        });
    }

    /// A row-level action was activated.
    pub fn row_action(&mut self, action_name: impl Into<String>, row: Value) {
        self.events.push(CardEvent::RowAction {
            action_name: action_name.into(),
            row,
        });
    }

    /// The refresh affordance was activated.
    pub fn refresh_requested(&mut self) {
        self.events.push(CardEvent::RefreshRequested);
    }

    /// Drain all events queued since the last call.
    pub fn take_events(&mut self) -> Vec<CardEvent> {
        std::mem::take(&mut self.events)
    }
}
