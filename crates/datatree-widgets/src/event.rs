//! Outbound events raised to the hosting container.
//!
//! Controller methods push events onto an internal queue; hosts drain them
//! after each interaction with `take_events()`. Nothing here carries
//! references into the owned tree, so payloads stay valid however long the
//! host holds them.

use datatree_model::TreeNode;
use serde_json::Value;

/// Selection snapshot, emitted on every checkbox change.
///
/// The same shape is accepted by
/// [`crate::tree::DataTree::merge_child_selection`] when a host composes
/// several controllers and forwards a nested one's report upward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionUpdate {
    /// All currently checked ids, in first-insertion order.
    pub selected_values: Vec<String>,
    /// The id that was unchecked, when the change was a removal.
    pub removed_item: Option<String>,
}

/// Node payload surfaced when a label is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickedNode {
    pub id: String,
    pub node_name: String,
    pub children: Vec<TreeNode>,
    pub is_selected: bool,
}

/// Events raised by [`crate::tree::DataTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A lazy node is expanding and needs its children fetched. Emitted
    /// before the expand takes effect; the expand proceeds regardless.
    NodeExpandRequested { node_id: String },
    SelectionChanged(SelectionUpdate),
    NodeClicked { node: ClickedNode },
}

/// Events raised by [`crate::card::RecordListCard`] — a flat pass-through of
/// user intent, no state machine behind them.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    ActionClicked { action_name: String },
    RowAction { action_name: String, row: Value },
    RefreshRequested,
}
