//! DOM Tree (arena-based allocation)
//!
//! The tree is the environment its nodes live in: besides the node arena it
//! records which document `ownerDocument` resolves to and which selector
//! matcher backs `querySelectorAll`.

use std::fmt;
use std::rc::Rc;

use crate::{DomError, DomResult, Node, NodeId};

/// External selector engine: `(root, selector) -> matching elements`
pub type SelectorMatcher = Rc<dyn Fn(&DomTree, NodeId, &str) -> Vec<NodeId>>;

/// Arena-based DOM tree
#[derive(Default)]
pub struct DomTree {
    nodes: Vec<Node>,
    /// The environment's document, set by the first `create_document`
    document: Option<NodeId>,
    selector_matcher: Option<SelectorMatcher>,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree whose queries go through `matcher`
    pub fn with_selector_matcher(matcher: SelectorMatcher) -> Self {
        Self {
            selector_matcher: Some(matcher),
            ..Self::default()
        }
    }

    pub fn set_selector_matcher(&mut self, matcher: Option<SelectorMatcher>) {
        self.selector_matcher = matcher;
    }

    pub fn selector_matcher(&self) -> Option<&SelectorMatcher> {
        self.selector_matcher.as_ref()
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub(crate) fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::UnknownNode(id))
    }

    /// Number of nodes ever allocated in this tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The environment's document, if one has been created
    pub fn document(&self) -> Option<NodeId> {
        self.document
    }

    pub(crate) fn adopt_document(&mut self, id: NodeId) {
        if self.document.is_none() {
            self.document = Some(id);
        }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// All nodes in allocation order, attached or not
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }
}

impl fmt::Debug for DomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomTree")
            .field("nodes", &self.nodes.len())
            .field("document", &self.document)
            .field("selector_matcher", &self.selector_matcher.is_some())
            .finish()
    }
}
