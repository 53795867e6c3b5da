//! Dataset (DOMStringMap)
//!
//! Key/value view over an element's `data-*` attributes. Key `k` maps to the
//! attribute `data-k` verbatim; since attribute names are case-insensitive,
//! so are keys.

use crate::{DomTree, NodeId};

const DATA_PREFIX: &str = "data-";

/// `dataset` view bound to one element
pub struct Dataset<'a> {
    tree: &'a mut DomTree,
    element: NodeId,
}

impl<'a> Dataset<'a> {
    pub fn new(tree: &'a mut DomTree, element: NodeId) -> Self {
        Self { tree, element }
    }

    /// Convert key to attribute name
    pub fn to_attribute_name(key: &str) -> String {
        format!("{DATA_PREFIX}{key}")
    }

    /// Value of `data-<key>`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tree
            .get_attribute(self.element, &Self::to_attribute_name(key))
    }

    /// Set `data-<key>`
    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.tree
            .set_attribute(self.element, &Self::to_attribute_name(key), value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.tree
            .has_attribute(self.element, &Self::to_attribute_name(key))
    }

    /// Delete by key, returns whether it existed
    pub fn delete(&mut self, key: &str) -> bool {
        self.tree
            .remove_attribute(self.element, &Self::to_attribute_name(key))
            .is_some()
    }

    /// Keys of all `data-*` attributes, in attribute order
    pub fn keys(&self) -> Vec<&str> {
        self.tree
            .get_attribute_names(self.element)
            .into_iter()
            .filter_map(|name| {
                let prefix = name.get(..DATA_PREFIX.len())?;
                prefix
                    .eq_ignore_ascii_case(DATA_PREFIX)
                    .then(|| &name[DATA_PREFIX.len()..])
            })
            .collect()
    }
}

impl DomTree {
    /// `dataset` view of `element`
    pub fn dataset(&mut self, element: NodeId) -> Dataset<'_> {
        Dataset::new(self, element)
    }
}
