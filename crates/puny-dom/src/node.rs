//! DOM Node
//!
//! Kind, value, parent/children links and the read-only navigation
//! accessors (`firstChild`, `nextSibling`, `ownerDocument`, ...).

use crate::{DomError, DomTree, ElementData, EventTarget, NodeId, NodeList};

static EMPTY_CHILDREN: NodeList = NodeList::new();

/// DOM node kind, numbered as in the standard DOM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
}

impl NodeType {
    /// Numeric `nodeType` code
    #[inline]
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Kinds for which `nodeValue` is meaningful
    #[inline]
    pub fn has_value(self) -> bool {
        matches!(
            self,
            NodeType::Text | NodeType::Attribute | NodeType::ProcessingInstruction | NodeType::Comment
        )
    }

    /// Kinds carrying a tag name and attributes
    #[inline]
    pub fn is_element_like(self) -> bool {
        matches!(
            self,
            NodeType::Element | NodeType::Document | NodeType::DocumentFragment
        )
    }
}

impl TryFrom<u16> for NodeType {
    type Error = DomError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => NodeType::Element,
            2 => NodeType::Attribute,
            3 => NodeType::Text,
            7 => NodeType::ProcessingInstruction,
            8 => NodeType::Comment,
            9 => NodeType::Document,
            10 => NodeType::DocumentType,
            11 => NodeType::DocumentFragment,
            other => return Err(DomError::UnknownNodeType(other)),
        })
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Element, Document and DocumentFragment
    Element(ElementData),
    /// Text, Attribute, ProcessingInstruction and Comment
    Value(String),
    /// DOCTYPE
    Doctype { name: String },
}

/// DOM Node - one tree position
#[derive(Debug, Clone)]
pub struct Node {
    node_type: NodeType,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: NodeList,
    pub(crate) data: NodeData,
    pub(crate) listeners: EventTarget,
}

impl Node {
    /// Create an unattached node of `node_type` with empty data
    pub fn new(node_type: NodeType) -> Self {
        let data = if node_type.is_element_like() {
            NodeData::Element(ElementData::new(""))
        } else if node_type.has_value() {
            NodeData::Value(String::new())
        } else {
            NodeData::Doctype { name: String::new() }
        };
        Self::with_data(node_type, data)
    }

    pub(crate) fn with_data(node_type: NodeType, data: NodeData) -> Self {
        Self {
            node_type,
            parent: None,
            children: NodeList::new(),
            data,
            listeners: EventTarget::new(),
        }
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &NodeList {
        &self.children
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Check if this is an element (not a document or fragment)
    #[inline]
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Element data for Element, Document and DocumentFragment nodes
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// `nodeValue`: `Some` only for value-bearing kinds
    pub fn value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Value(v) if self.node_type.has_value() => Some(v.as_str()),
            _ => None,
        }
    }

    /// Set `nodeValue`; discarded for structural kinds
    pub fn set_value(&mut self, value: impl Into<String>) {
        if let NodeData::Value(v) = &mut self.data {
            *v = value.into();
        }
    }

    pub fn listeners(&self) -> &EventTarget {
        &self.listeners
    }
}

impl DomTree {
    /// Create an unattached node of any kind (the generic `Node` constructor)
    pub fn create_node(&mut self, node_type: NodeType) -> NodeId {
        self.alloc(Node::new(node_type))
    }

    pub fn node_type(&self, id: NodeId) -> Option<NodeType> {
        self.get(id).map(Node::node_type)
    }

    /// `nodeName`: tag name for elements, `#kind` for the rest
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        let node = self.get(id)?;
        Some(match (&node.data, node.node_type) {
            (_, NodeType::Document) => "#document",
            (_, NodeType::DocumentFragment) => "#document-fragment",
            (_, NodeType::Text) => "#text",
            (_, NodeType::Comment) => "#comment",
            (_, NodeType::Attribute) => "#attribute",
            (_, NodeType::ProcessingInstruction) => "#processing-instruction",
            (NodeData::Doctype { name }, _) => name.as_str(),
            (NodeData::Element(elem), _) => elem.tag_name(),
            (NodeData::Value(_), _) => "",
        })
    }

    /// `nodeValue`: `None` for structural kinds
    pub fn node_value(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.value()
    }

    /// Set `nodeValue`; a no-op for structural kinds
    pub fn set_node_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(node) = self.get_mut(id) {
            node.set_value(value);
        }
    }

    /// `value` alias of `nodeValue`
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.node_value(id)
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        self.set_node_value(id, value);
    }

    pub fn parent_node(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Children in insertion order (empty for unknown ids)
    pub fn child_nodes(&self, id: NodeId) -> &NodeList {
        self.get(id).map_or(&EMPTY_CHILDREN, |node| &node.children)
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.child_nodes(id).first()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.child_nodes(id).last()
    }

    pub fn has_child_nodes(&self, id: NodeId) -> bool {
        !self.child_nodes(id).is_empty()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.child_nodes(self.parent_node(id)?);
        let pos = siblings.index_of(id)?;
        siblings.item(pos + 1)
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.child_nodes(self.parent_node(id)?);
        let pos = siblings.index_of(id)?;
        pos.checked_sub(1).and_then(|prev| siblings.item(prev))
    }

    /// The environment's document, whatever tree `id` sits in
    pub fn owner_document(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?;
        self.document()
    }

    /// Whether `other` is `id` or one of its descendants
    pub fn contains(&self, id: NodeId, other: NodeId) -> bool {
        let mut current = Some(other);
        while let Some(node) = current {
            if node == id {
                return true;
            }
            current = self.parent_node(node);
        }
        false
    }

    /// Path from the root of `id`'s tree down to `id` itself
    pub(crate) fn hierarchy(&self, id: NodeId) -> Vec<NodeId> {
        let mut hierarchy = vec![id];
        let mut current = self.parent_node(id);
        while let Some(node) = current {
            hierarchy.push(node);
            current = self.parent_node(node);
        }
        hierarchy.reverse();
        hierarchy
    }

    /// `id` followed by all its descendants, depth-first in document order
    pub(crate) fn self_and_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        if self.get(id).is_none() {
            return result;
        }
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            result.push(node);
            stack.extend(self.child_nodes(node).iter().rev());
        }
        result
    }
}
