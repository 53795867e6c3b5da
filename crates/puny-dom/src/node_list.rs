//! NodeList
//!
//! Ordered, index-addressable sequence of node ids. Used both as a node's own
//! children list and as the result of selector and tag-name queries.

use crate::NodeId;

/// Ordered sequence of nodes (insertion order, not live)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<NodeId>,
}

impl NodeList {
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn from_vec(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Number of nodes (`NodeList.length`)
    pub fn length(&self) -> usize {
        self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`, `None` when out of range
    pub fn item(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Position of `node`, if present
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.nodes.clone()
    }

    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Insert at `index`, clamped to the end of the list
    pub fn insert(&mut self, index: usize, node: NodeId) {
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
    }

    /// Remove the node at `index`, `None` when out of range
    pub fn remove(&mut self, index: usize) -> Option<NodeId> {
        (index < self.nodes.len()).then(|| self.nodes.remove(index))
    }

    /// Replace the node at `index`, returning the previous one
    pub fn replace(&mut self, index: usize, node: NodeId) -> Option<NodeId> {
        self.nodes
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, node))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Take all nodes (clears the list)
    pub fn take(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.nodes)
    }
}

impl From<Vec<NodeId>> for NodeList {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::from_vec(nodes)
    }
}

impl FromIterator<NodeId> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

impl IntoIterator for NodeList {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
