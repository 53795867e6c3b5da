//! PunyDOM core - in-memory document tree
//!
//! Node, Element and Document semantics over an arena-owned tree, with a
//! flat per-node listener registry and HTML serialization.
//!
//! # Example
//! ```rust
//! use puny_dom::DomTree;
//!
//! let mut tree = DomTree::new();
//! let doc = tree.create_document();
//! let body = tree.body(doc).unwrap();
//!
//! let div = tree.create_element("div");
//! tree.set_attribute(div, "id", "x");
//! tree.append_child(body, div).unwrap();
//!
//! assert_eq!(tree.get_element_by_id(doc, "x"), Some(div));
//! assert_eq!(tree.to_html(body), "<body><div id=\"x\"></div></body>");
//! ```

mod attributes;
mod class_list;
mod dataset;
mod document;
mod element;
mod events;
mod geometry;
mod namespace;
mod node;
mod node_list;
mod operations;
mod serializer;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use class_list::ClassList;
pub use dataset::Dataset;
pub use document::{HIDDEN, READY_STATE};
pub use element::ElementData;
pub use events::{Event, EventHandler, EventTarget};
pub use geometry::DomRect;
pub use namespace::{XHTML_NAMESPACE, XMLNS_NAMESPACE};
pub use node::{Node, NodeData, NodeType};
pub use node_list::NodeList;
pub use operations::{DomError, DomResult};
pub use tree::{DomTree, SelectorMatcher};

/// Node identifier (index into the owning [`DomTree`] arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Arena slot of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
