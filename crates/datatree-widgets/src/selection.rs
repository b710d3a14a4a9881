//! Selection state for the tree controller.
//!
//! String ids keep selection stable across tree mutations. Snapshots preserve
//! first-insertion order, so repeated checks and merges are deterministic.

/// Insertion-ordered set of selected node ids.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    order: Vec<String>,
    index: ahash::HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns false if it was already selected.
    pub fn insert(&mut self, id: &str) -> bool {
        if !self.index.insert(id.to_owned()) {
            return false;
        }
        self.order.push(id.to_owned());
        true
    }

    /// Remove an id. Returns false if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.index.remove(id) {
            return false;
        }
        self.order.retain(|selected| selected != id);
        true
    }

    /// Union another set of ids into this one, keeping existing order.
    pub fn merge(&mut self, ids: &[String]) {
        for id in ids {
            self.insert(id);
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All selected ids in first-insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}
