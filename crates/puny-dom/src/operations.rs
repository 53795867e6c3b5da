//! DOM Node Operations
//!
//! Core node manipulation: appendChild, removeChild, insertBefore,
//! replaceChild, cloneNode.
//!
//! Re-inserting a node detaches it from its previous parent first, and a node
//! can never be inserted below itself.

use crate::{DomTree, EventTarget, NodeId, NodeType};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node is not a child of the given parent (`NotFoundError`)
    #[error("Node not found")]
    NotFound,

    /// Insertion would make a node its own ancestor
    #[error("Hierarchy request error")]
    HierarchyRequest,

    /// Operation deliberately left unimplemented
    #[error("Not supported: {0}")]
    NotSupported(&'static str),

    /// Id does not belong to this tree
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// Numeric node type outside the DOM numbering
    #[error("Unknown node type {0}")]
    UnknownNodeType(u16),
}

impl DomTree {
    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insertion(parent, child)?;
        self.detach(child);
        self.link_child(parent, child, None);
        Ok(child)
    }

    /// Insert `node` right before `reference`; a `None` reference appends
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        let Some(reference) = reference else {
            return self.append_child(parent, node);
        };
        if !self.node(parent)?.children.contains(reference) {
            return Err(DomError::NotFound);
        }
        if node == reference {
            return Ok(node);
        }
        self.check_insertion(parent, node)?;
        self.detach(node);
        let pos = self.node(parent)?.children.index_of(reference);
        self.link_child(parent, node, pos);
        Ok(node)
    }

    /// Remove `child` from `parent`, failing with `NotFound` if it is not a child
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let siblings = &mut self.node_mut(parent)?.children;
        let pos = siblings.index_of(child).ok_or(DomError::NotFound)?;
        siblings.remove(pos);
        self.node_mut(child)?.parent = None;
        tracing::trace!("removed {} from {}", child, parent);
        Ok(child)
    }

    /// Put `new_child` in the place of `old_child`, returning `old_child`
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        old_child: NodeId,
    ) -> DomResult<NodeId> {
        if !self.node(parent)?.children.contains(old_child) {
            return Err(DomError::NotFound);
        }
        if new_child == old_child {
            return Ok(old_child);
        }
        self.check_insertion(parent, new_child)?;
        self.detach(new_child);

        let siblings = &mut self.node_mut(parent)?.children;
        let pos = siblings.index_of(old_child).ok_or(DomError::NotFound)?;
        siblings.replace(pos, new_child);
        self.node_mut(new_child)?.parent = Some(parent);
        self.node_mut(old_child)?.parent = None;
        Ok(old_child)
    }

    /// Copy a node; `deep` also copies all descendants in order.
    ///
    /// Kind, value and attributes are copied. The copy has no parent and no
    /// event listeners.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        let clone = self.copy_node(id)?;
        if !deep {
            return Ok(clone);
        }

        // (original, parent of its copy), popped in document order
        let mut pending: Vec<(NodeId, NodeId)> = self
            .child_nodes(id)
            .iter()
            .rev()
            .map(|child| (child, clone))
            .collect();
        while let Some((original, parent)) = pending.pop() {
            let copy = self.copy_node(original)?;
            self.link_child(parent, copy, None);
            pending.extend(self.child_nodes(original).iter().rev().map(|child| (child, copy)));
        }
        Ok(clone)
    }

    /// Allocate a detached, childless, listener-free copy of one node
    fn copy_node(&mut self, id: NodeId) -> DomResult<NodeId> {
        let mut copy = self.node(id)?.clone();
        copy.parent = None;
        copy.listeners = EventTarget::new();
        copy.children.clear();
        Ok(self.alloc(copy))
    }

    /// Remove every child of `id`, leaving them unattached
    pub fn clear_children(&mut self, id: NodeId) -> DomResult<()> {
        let children = self.node_mut(id)?.children.take();
        for child in children {
            if let Some(node) = self.get_mut(child) {
                node.parent = None;
            }
        }
        Ok(())
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.node(parent)?;
        let node = self.node(child)?;
        if node.node_type() == NodeType::Document || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        Ok(())
    }

    /// Drop `child` from its current parent's children, if any
    fn detach(&mut self, child: NodeId) {
        let Some(old_parent) = self.parent_node(child) else {
            return;
        };
        if let Some(parent) = self.get_mut(old_parent) {
            if let Some(pos) = parent.children.index_of(child) {
                parent.children.remove(pos);
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
    }

    /// Link an unattached `child` under `parent` at `pos` (end when `None`)
    pub(crate) fn link_child(&mut self, parent: NodeId, child: NodeId, pos: Option<usize>) {
        if let Some(node) = self.get_mut(parent) {
            match pos {
                Some(pos) => node.children.insert(pos, child),
                None => node.children.push(child),
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        tracing::trace!("linked {} under {}", child, parent);
    }
}
