//! The internally owned, annotated tree.
//!
//! [`TreeNode`] is a strict deep copy of the host's [`NodeData`] taken at
//! assignment time, plus the derived fields the controller projects from.
//! Expand state lives here as an explicit `expanded` field; rendering never
//! inspects anything but the model.

use crate::data::{NodeData, TypeAttributes};
use crate::margin::{BUTTON_CLASS, HIDDEN_BUTTON_PREFIX};

/// One node of the owned forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    id: String,
    node_name: String,
    children: Vec<TreeNode>,
    has_children: bool,
    is_selected: bool,
    type_attributes: Option<TypeAttributes>,
    // Derived fields, owned by the normalizer/controller.
    container_class: String,
    button_class: String,
    expanded: bool,
    lazy_load: bool,
    is_url: bool,
}

impl TreeNode {
    /// Deep-clone a host node and all descendants.
    ///
    /// Derived classes stay empty until [`derive_metadata`] runs; expand
    /// state is seeded from `show_child_nodes`, defaulting to visible.
    #[must_use]
    pub fn from_data(data: &NodeData) -> Self {
        Self {
            id: data.id.clone(),
            node_name: data.node_name.clone(),
            children: data.children.iter().map(Self::from_data).collect(),
            has_children: data.has_children,
            is_selected: data.is_selected,
            type_attributes: data.type_attributes.clone(),
            container_class: String::new(),
            button_class: String::new(),
            expanded: data.show_child_nodes.unwrap_or(true),
            lazy_load: data.lazy_load,
            is_url: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.children
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    #[must_use]
    pub fn type_attributes(&self) -> Option<&TypeAttributes> {
        self.type_attributes.as_ref()
    }

    /// Whether this node has loaded children or advertises unloaded ones.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty() || self.has_children
    }

    #[must_use]
    pub fn container_class(&self) -> &str {
        &self.container_class
    }

    #[must_use]
    pub fn button_class(&self) -> &str {
        &self.button_class
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Flip the expanded state.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    #[must_use]
    pub fn lazy_load(&self) -> bool {
        self.lazy_load
    }

    #[must_use]
    pub fn is_url(&self) -> bool {
        self.is_url
    }

    /// Attach lazily fetched children and clear the lazy-load flag so a
    /// later re-expansion does not request them again.
    pub fn attach_children(&mut self, mut nodes: Vec<TreeNode>) {
        self.children.append(&mut nodes);
        self.lazy_load = false;
    }

    /// Count all visible nodes in this subtree, including this one.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        let mut count = 1;
        if self.expanded {
            for child in &self.children {
                count += child.visible_count();
            }
        }
        count
    }
}

/// Annotate every node of the forest with its rendering metadata.
///
/// Depth-first pre-order walk: `container_class` takes the margin class,
/// `button_class` the shared style (hidden variant for nodes with nothing to
/// expand), `is_url` follows the type attributes. Expand state is left
/// untouched, so re-deriving after user interaction never loses it, and the
/// pass is idempotent for a fixed margin class.
pub fn derive_metadata(nodes: &mut [TreeNode], margin_class: &str) {
    for node in nodes {
        node.container_class = margin_class.to_owned();
        node.button_class = if node.is_expandable() {
            BUTTON_CLASS.to_owned()
        } else {
            format!("{HIDDEN_BUTTON_PREFIX}{BUTTON_CLASS}")
        };
        node.is_url = node
            .type_attributes
            .as_ref()
            .and_then(|attrs| attrs.kind.as_deref())
            == Some("url");
        derive_metadata(&mut node.children, margin_class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TypeAttributes;

    fn sample() -> NodeData {
        NodeData::new("1", "Root").child(NodeData::new("1-1", "Leaf"))
    }

    #[test]
    fn from_data_deep_clones_children() {
        let node = TreeNode::from_data(&sample());
        assert_eq!(node.id(), "1");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].node_name(), "Leaf");
    }

    #[test]
    fn expanded_defaults_to_visible() {
        let node = TreeNode::from_data(&sample());
        assert!(node.is_expanded());
    }

    #[test]
    fn expanded_preserves_explicit_false() {
        let node = TreeNode::from_data(&sample().with_show_child_nodes(false));
        assert!(!node.is_expanded());
    }

    #[test]
    fn toggle_expanded_flips_state() {
        let mut node = TreeNode::from_data(&sample());
        node.toggle_expanded();
        assert!(!node.is_expanded());
        node.toggle_expanded();
        assert!(node.is_expanded());
    }

    #[test]
    fn derive_sets_container_and_button_classes() {
        let mut forest = vec![TreeNode::from_data(&sample())];
        derive_metadata(&mut forest, "slds-m-left--large");

        let root = &forest[0];
        assert_eq!(root.container_class(), "slds-m-left--large");
        assert_eq!(root.button_class(), BUTTON_CLASS);

        let leaf = &root.children()[0];
        assert_eq!(leaf.container_class(), "slds-m-left--large");
        assert_eq!(leaf.button_class(), format!("{HIDDEN_BUTTON_PREFIX}{BUTTON_CLASS}"));
    }

    #[test]
    fn unloaded_children_hint_keeps_button_visible() {
        let data = NodeData::new("n", "Lazy").with_has_children(true);
        let mut forest = vec![TreeNode::from_data(&data)];
        derive_metadata(&mut forest, "margin-nested");
        assert_eq!(forest[0].button_class(), BUTTON_CLASS);
    }

    #[test]
    fn derive_flags_url_nodes() {
        let data = NodeData::new("u", "Link").with_type_attributes(TypeAttributes::url());
        let mut forest = vec![TreeNode::from_data(&data)];
        derive_metadata(&mut forest, "margin-nested");
        assert!(forest[0].is_url());

        let plain = NodeData::new("p", "Plain").with_type_attributes(TypeAttributes {
            icon: Some("utility:folder".to_owned()),
            ..TypeAttributes::default()
        });
        let mut forest = vec![TreeNode::from_data(&plain)];
        derive_metadata(&mut forest, "margin-nested");
        assert!(!forest[0].is_url());
    }

    #[test]
    fn derive_is_idempotent() {
        let mut forest = vec![TreeNode::from_data(&sample())];
        derive_metadata(&mut forest, "slds-m-left--large");
        let first = forest.clone();
        derive_metadata(&mut forest, "slds-m-left--large");
        assert_eq!(forest, first);
    }

    #[test]
    fn derive_preserves_expand_state() {
        let mut forest = vec![TreeNode::from_data(&sample())];
        forest[0].set_expanded(false);
        derive_metadata(&mut forest, "slds-m-left--large");
        assert!(!forest[0].is_expanded());
    }

    #[test]
    fn attach_children_clears_lazy_flag() {
        let data = NodeData::new("n", "Lazy")
            .with_has_children(true)
            .with_lazy_load(true);
        let mut node = TreeNode::from_data(&data);
        assert!(node.lazy_load());

        node.attach_children(vec![TreeNode::from_data(&NodeData::new("n-1", "Fetched"))]);
        assert!(!node.lazy_load());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn visible_count_skips_collapsed_subtrees() {
        let mut node = TreeNode::from_data(
            &NodeData::new("1", "Root")
                .child(NodeData::new("1-1", "A").child(NodeData::new("1-1-1", "A1")))
                .child(NodeData::new("1-2", "B")),
        );
        assert_eq!(node.visible_count(), 4);
        node.children_mut()[0].set_expanded(false);
        assert_eq!(node.visible_count(), 3);
    }
}
