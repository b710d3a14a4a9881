//! Tree state controller.
//!
//! One [`DataTree`] owns the entire normalized forest. Expand state is an
//! explicit per-node field, selection lives in a single [`Selection`], and
//! rendering is the pure projection returned by [`DataTree::visible_rows`] —
//! there is no per-level widget instance and no render-layer state to query
//! back.

use datatree_model::{NodeData, TreeNode, derive_metadata, margin};

use crate::event::{ClickedNode, SelectionUpdate, TreeEvent};
use crate::selection::Selection;

/// Expand-button glyph, projected straight from the node's expand state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    /// Children container visible.
    Down,
    /// Children container hidden.
    Right,
}

impl Chevron {
    /// Icon token for the glyph.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Down => "utility:chevrondown",
            Self::Right => "utility:chevronright",
        }
    }
}

/// One visible row of the flattened render projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub node_id: String,
    pub label: String,
    /// Nesting depth, 0 for forest roots.
    pub depth: usize,
    /// Indentation class for this row's level.
    pub container_class: String,
    pub button_class: String,
    pub chevron: Chevron,
    pub show_checkbox: bool,
    pub checked: bool,
    pub is_url: bool,
}

/// Controller owning the normalized tree, its expand/collapse state, and the
/// selection set.
#[derive(Debug, Clone, Default)]
pub struct DataTree {
    items: Vec<TreeNode>,
    margin_class: String,
    expand: bool,
    hide_checkbox: bool,
    selection: Selection,
    events: Vec<TreeEvent>,
}

impl DataTree {
    /// Create an empty controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the tree. The input is deep-cloned; later mutation of the
    /// caller's data is never observable here. An empty input is a silent
    /// no-op and any previously assigned tree stays in place.
    pub fn set_tree(&mut self, data: &[NodeData]) {
        if data.is_empty() {
            return;
        }
        self.items = data.iter().map(TreeNode::from_data).collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tree.assign", roots = self.items.len());
        self.apply_classes_if_ready();
    }

    /// The owned forest.
    #[must_use]
    pub fn items(&self) -> &[TreeNode] {
        &self.items
    }

    /// Set the indentation class for this tree's level. An empty value
    /// suppresses metadata derivation until a non-empty one arrives.
    pub fn set_margin_class(&mut self, value: &str) {
        self.margin_class = value.to_owned();
        self.apply_classes_if_ready();
    }

    #[must_use]
    pub fn margin_class(&self) -> &str {
        &self.margin_class
    }

    /// The margin class one nesting level deeper than this tree's own.
    #[must_use]
    pub fn next_margin_class(&self) -> &'static str {
        margin::next_margin_class(&self.margin_class)
    }

    /// Set the whole-tree expand flag and force every node to match.
    pub fn set_expand(&mut self, value: bool) {
        self.expand = value;
        if value {
            self.expand_all();
        } else {
            self.collapse_all();
        }
    }

    #[must_use]
    pub fn expand(&self) -> bool {
        self.expand
    }

    pub fn set_hide_checkbox(&mut self, hide: bool) {
        self.hide_checkbox = hide;
    }

    #[must_use]
    pub fn show_checkbox(&self) -> bool {
        !self.hide_checkbox
    }

    /// Post-render hook: re-assert expand-all while the flag is set, so
    /// re-renders triggered by data changes keep the tree open. Safe to call
    /// on every pass.
    pub fn rendered(&mut self) {
        if self.expand && !self.items.is_empty() {
            self.expand_all();
        }
    }

    /// Expand every node in the forest, at every depth.
    pub fn expand_all(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tree.expand_all");
        set_expanded_all(&mut self.items, true);
    }

    /// Collapse every node in the forest, at every depth.
    pub fn collapse_all(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tree.collapse_all");
        set_expanded_all(&mut self.items, false);
    }

    /// Toggle a node's expand state.
    ///
    /// `Some(state)` sets it directly; `None` flips the current state. An
    /// unknown id is a silent no-op. A collapsed lazy node emits
    /// [`TreeEvent::NodeExpandRequested`] before the flip so the host can
    /// start fetching children; the expand happens optimistically either way.
    pub fn toggle(&mut self, node_id: &str, force_expand: Option<bool>) {
        let Some(node) = find_mut(&mut self.items, node_id) else {
            return;
        };
        let target = force_expand.unwrap_or(!node.is_expanded());
        if target && !node.is_expanded() && node.lazy_load() {
            self.events.push(TreeEvent::NodeExpandRequested {
                node_id: node_id.to_owned(),
            });
        }
        node.set_expanded(target);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tree.toggle",
            node_id,
            action = if target { "expand" } else { "collapse" }
        );
    }

    /// Find a node by id, depth-first pre-order across the whole forest.
    /// First match wins when the unique-id precondition is broken.
    #[must_use]
    pub fn find(&self, node_id: &str) -> Option<&TreeNode> {
        find_in(&self.items, node_id)
    }

    /// Attach lazily fetched children under a node, normalizing and
    /// annotating them like the rest of the tree. Unknown ids and empty
    /// payloads are no-ops.
    pub fn merge_children(&mut self, node_id: &str, data: &[NodeData]) {
        if data.is_empty() {
            return;
        }
        let margin_class = self.margin_class.clone();
        let Some(node) = find_mut(&mut self.items, node_id) else {
            return;
        };
        let mut children: Vec<TreeNode> = data.iter().map(TreeNode::from_data).collect();
        if !margin_class.is_empty() {
            derive_metadata(&mut children, &margin_class);
        }
        node.attach_children(children);
    }

    /// Resolve a label activation into a [`TreeEvent::NodeClicked`] payload.
    /// Unknown ids emit nothing.
    pub fn node_clicked(&mut self, node_id: &str) {
        let Some(node) = find_in(&self.items, node_id) else {
            return;
        };
        self.events.push(TreeEvent::NodeClicked {
            node: ClickedNode {
                id: node.id().to_owned(),
                node_name: node.node_name().to_owned(),
                children: node.children().to_vec(),
                is_selected: node.is_selected(),
            },
        });
    }

    /// Apply a local checkbox change and emit the resulting selection
    /// snapshot.
    pub fn checkbox_toggled(&mut self, node_id: &str, checked: bool) {
        if checked {
            self.selection.insert(node_id);
        } else {
            self.selection.remove(node_id);
        }
        self.events.push(TreeEvent::SelectionChanged(SelectionUpdate {
            selected_values: self.selection.snapshot(),
            removed_item: (!checked).then(|| node_id.to_owned()),
        }));
    }

    /// Fold a nested controller's selection report into this one: union the
    /// reported values, then drop the removed item if any. Applying the same
    /// payload twice changes nothing the second time.
    pub fn merge_child_selection(&mut self, update: &SelectionUpdate) {
        self.selection.merge(&update.selected_values);
        if let Some(removed) = &update.removed_item {
            self.selection.remove(removed);
        }
    }

    /// Currently checked ids, in first-insertion order.
    #[must_use]
    pub fn selected_values(&self) -> Vec<String> {
        self.selection.snapshot()
    }

    /// Drain all events queued since the last call.
    pub fn take_events(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flatten the forest into visible rows: one row per node whose
    /// ancestors are all expanded, with the indentation class resolved
    /// through the margin progression by depth.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for node in &self.items {
            self.push_rows(node, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, node: &TreeNode, depth: usize, out: &mut Vec<TreeRow>) {
        let container_class = if self.margin_class.is_empty() {
            node.container_class().to_owned()
        } else {
            margin::margin_class_for_depth(&self.margin_class, depth).to_owned()
        };
        out.push(TreeRow {
            node_id: node.id().to_owned(),
            label: node.node_name().to_owned(),
            depth,
            container_class,
            button_class: node.button_class().to_owned(),
            chevron: if node.is_expanded() {
                Chevron::Down
            } else {
                Chevron::Right
            },
            show_checkbox: !self.hide_checkbox,
            checked: self.selection.contains(node.id()),
            is_url: node.is_url(),
        });
        if node.is_expanded() {
            for child in node.children() {
                self.push_rows(child, depth + 1, out);
            }
        }
    }

    fn apply_classes_if_ready(&mut self) {
        if !self.margin_class.is_empty() && !self.items.is_empty() {
            derive_metadata(&mut self.items, &self.margin_class);
        }
    }
}

fn set_expanded_all(nodes: &mut [TreeNode], expanded: bool) {
    for node in nodes {
        node.set_expanded(expanded);
        set_expanded_all(node.children_mut(), expanded);
    }
}

fn find_in<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a>(nodes: &'a mut [TreeNode], id: &str) -> Option<&'a mut TreeNode> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_mut(node.children_mut(), id) {
            return Some(found);
        }
    }
    None
}
