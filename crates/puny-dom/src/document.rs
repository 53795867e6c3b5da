//! Document - node factories and document-level lookups
//!
//! A document is an element-like root that builds its `html > head, body`
//! skeleton when created. The skeleton is not protected: the generic node
//! operations can still remove it.

use crate::{DomTree, ElementData, Node, NodeData, NodeId, NodeType};

/// `document.readyState`: loading never happens, so always terminal
pub const READY_STATE: &str = "complete";

/// `document.hidden`: nothing is ever rendered
pub const HIDDEN: bool = true;

impl DomTree {
    /// Create a document with its `html > head, body` skeleton.
    ///
    /// The first document created becomes the environment's document
    /// (`ownerDocument` for every node of this tree).
    pub fn create_document(&mut self) -> NodeId {
        let document = self.create_node(NodeType::Document);
        let html = self.create_element("html");
        let head = self.create_element("head");
        let body = self.create_element("body");

        self.link_child(document, html, None);
        self.link_child(html, head, None);
        self.link_child(html, body, None);

        self.adopt_document(document);
        tracing::debug!("Created document {}", document);
        document
    }

    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.alloc(Node::with_data(
            NodeType::Element,
            NodeData::Element(ElementData::new(name)),
        ))
    }

    pub fn create_text_node(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(Node::with_data(NodeType::Text, NodeData::Value(data.into())))
    }

    pub fn create_comment(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(Node::with_data(NodeType::Comment, NodeData::Value(data.into())))
    }

    pub fn create_document_fragment(&mut self) -> NodeId {
        self.create_node(NodeType::DocumentFragment)
    }

    pub fn create_document_type(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(Node::with_data(
            NodeType::DocumentType,
            NodeData::Doctype { name: name.into() },
        ))
    }

    /// First element (depth-first, document order) under `root` whose `id` is `id`
    pub fn get_element_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.self_and_descendants(root)
            .into_iter()
            .find(|&node| self.is_element(node) && self.id(node) == Some(id))
    }

    /// The `html` child of a document
    pub fn document_element(&self, document: NodeId) -> Option<NodeId> {
        self.named_child(document, "html")
    }

    /// `head` child of the document's `html` element
    pub fn head(&self, document: NodeId) -> Option<NodeId> {
        self.named_child(self.document_element(document)?, "head")
    }

    /// `body` child of the document's `html` element
    pub fn body(&self, document: NodeId) -> Option<NodeId> {
        self.named_child(self.document_element(document)?, "body")
    }

    /// `readyState` of a document node
    pub fn ready_state(&self, document: NodeId) -> Option<&'static str> {
        self.is_document(document).then_some(READY_STATE)
    }

    /// `hidden` of a document node
    pub fn hidden(&self, document: NodeId) -> bool {
        self.is_document(document) && HIDDEN
    }

    pub fn is_document(&self, id: NodeId) -> bool {
        self.node_type(id) == Some(NodeType::Document)
    }

    fn named_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.child_nodes(parent).iter().find(|&child| {
            self.is_element(child)
                && self
                    .local_name(child)
                    .is_some_and(|local| local.eq_ignore_ascii_case(name))
        })
    }
}
