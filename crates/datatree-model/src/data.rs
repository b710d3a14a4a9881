//! Externally supplied tree data.
//!
//! This is the shape hosts hand to the controller. It stays caller-owned:
//! the normalizer deep-clones it into [`crate::TreeNode`] and never keeps a
//! reference back. Field names serialize in camelCase so JSON payloads from
//! existing hosts deserialize directly.

use serde::{Deserialize, Serialize};

/// Rendering hints attached to a node by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeAttributes {
    /// Content type of the node; `"url"` renders the label as a link.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Icon name, e.g. `utility:folder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<String>,
}

impl TypeAttributes {
    /// Attributes marking a node as a URL.
    #[must_use]
    pub fn url() -> Self {
        Self {
            kind: Some("url".to_owned()),
            ..Self::default()
        }
    }
}

/// One node of a caller-owned input tree.
///
/// Ids must be unique across the whole forest and are not validated; lookup
/// uses first-match semantics when that precondition is broken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeData {
    pub id: String,
    /// Display label.
    pub node_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeData>,
    /// Hint that children exist but are not yet materialized.
    pub has_children: bool,
    /// Informational flag from the host; the controller's selection set is
    /// authoritative at runtime.
    pub is_selected: bool,
    /// Initial visibility of the children container. Absent means visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_child_nodes: Option<bool>,
    /// Expanding this node should trigger an external fetch of children.
    pub lazy_load: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_attributes: Option<TypeAttributes>,
}

impl NodeData {
    /// Create a leaf node with the given id and label.
    #[must_use]
    pub fn new(id: impl Into<String>, node_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_name: node_name.into(),
            ..Self::default()
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: NodeData) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<NodeData>) -> Self {
        self.children = nodes;
        self
    }

    /// Mark that children exist but are supplied later.
    #[must_use]
    pub fn with_has_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }

    /// Request an external fetch on first expansion.
    #[must_use]
    pub fn with_lazy_load(mut self, lazy_load: bool) -> Self {
        self.lazy_load = lazy_load;
        self
    }

    /// Set the initial visibility of the children container.
    #[must_use]
    pub fn with_show_child_nodes(mut self, show: bool) -> Self {
        self.show_child_nodes = Some(show);
        self
    }

    #[must_use]
    pub fn with_selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    #[must_use]
    pub fn with_type_attributes(mut self, attrs: TypeAttributes) -> Self {
        self.type_attributes = Some(attrs);
        self
    }
}
