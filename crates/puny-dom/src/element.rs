//! Element
//!
//! Tag name, attributes and the element-level views built on them:
//! attribute aliases, `className`, `textContent`, `innerHTML` and selector
//! queries.
//!
//! Element operations also apply to Document and DocumentFragment nodes,
//! which carry element data with an empty tag name. On any other kind they
//! read as absent and writes are ignored.

use crate::class_list::split_tokens;
use crate::namespace::split_qualified_name;
use crate::{DomError, DomResult, DomTree, NamedNodeMap, NodeId, NodeList, NodeType};

/// Element-specific data
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Tag name as created, possibly `prefix:local`
    tag_name: String,
    pub attributes: NamedNodeMap,
}

impl ElementData {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: NamedNodeMap::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Tag name without its namespace prefix
    pub fn local_name(&self) -> &str {
        split_qualified_name(&self.tag_name).1
    }

    /// Namespace prefix of the tag name (empty when unprefixed)
    pub fn prefix(&self) -> &str {
        split_qualified_name(&self.tag_name).0
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.set(name, value);
    }
}

impl DomTree {
    fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Whether `id` is an Element-kind node
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.is_element())
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::tag_name)
    }

    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::local_name)
    }

    /// Attribute value, matching the name case-insensitively
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    /// Store `value`'s string form under `name`
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl ToString) {
        match self.element_mut(id) {
            Some(elem) => elem.set_attr(name, value.to_string()),
            None => tracing::trace!("ignoring attribute {} on non-element {}", name, id),
        }
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id)
            .is_some_and(|elem| elem.attributes.contains(name))
    }

    /// Remove an attribute, returning its value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)?
            .attributes
            .remove(name)
            .map(|attr| attr.value)
    }

    /// Toggle a boolean attribute, returns whether it is now present
    pub fn toggle_attribute(&mut self, id: NodeId, name: &str, force: Option<bool>) -> bool {
        self.element_mut(id)
            .is_some_and(|elem| elem.attributes.toggle(name, force))
    }

    pub fn get_attribute_names(&self, id: NodeId) -> Vec<&str> {
        self.element(id)
            .map(|elem| elem.attributes.names())
            .unwrap_or_default()
    }

    pub fn attributes(&self, id: NodeId) -> Option<&NamedNodeMap> {
        self.element(id).map(|elem| &elem.attributes)
    }

    /// The `class` attribute, empty when absent
    pub fn class_name(&self, id: NodeId) -> &str {
        self.get_attribute(id, "class").unwrap_or("")
    }

    pub fn set_class_name(&mut self, id: NodeId, value: &str) {
        self.set_attribute(id, "class", value);
    }

    pub fn id(&self, id: NodeId) -> Option<&str> {
        self.get_attribute(id, "id")
    }

    pub fn set_id(&mut self, id: NodeId, value: &str) {
        self.set_attribute(id, "id", value);
    }

    pub fn href(&self, id: NodeId) -> Option<&str> {
        self.get_attribute(id, "href")
    }

    pub fn set_href(&mut self, id: NodeId, value: &str) {
        self.set_attribute(id, "href", value);
    }

    pub fn src(&self, id: NodeId) -> Option<&str> {
        self.get_attribute(id, "src")
    }

    pub fn set_src(&mut self, id: NodeId, value: &str) {
        self.set_attribute(id, "src", value);
    }

    pub fn style(&self, id: NodeId) -> Option<&str> {
        self.get_attribute(id, "style")
    }

    pub fn set_style(&mut self, id: NodeId, value: &str) {
        self.set_attribute(id, "style", value);
    }

    /// Serialized children, in order
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_children(id, &mut output);
        output
    }

    /// Markup parsing is not part of the tree model
    pub fn set_inner_html(&mut self, _id: NodeId, _html: &str) -> DomResult<()> {
        Err(DomError::NotSupported("innerHTML assignment"))
    }

    /// Concatenated values of every Text node in the subtree, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        self.self_and_descendants(id)
            .into_iter()
            .filter_map(|node| self.get(node))
            .filter(|node| node.node_type() == NodeType::Text)
            .filter_map(|node| node.value())
            .collect()
    }

    /// Replace all children with a single Text node holding `value`.
    ///
    /// An empty `value` leaves no children. Value-bearing nodes take `value`
    /// as their own value instead.
    pub fn set_text_content(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        if self.node(id)?.node_type().has_value() {
            self.set_node_value(id, value);
            return Ok(());
        }
        self.clear_children(id)?;
        if !value.is_empty() {
            let text = self.create_text_node(value);
            self.link_child(id, text, None);
        }
        Ok(())
    }

    /// Matches from the configured selector matcher; empty without one
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> NodeList {
        match self.selector_matcher() {
            Some(matcher) => NodeList::from(matcher(self, root, selector)),
            None => NodeList::new(),
        }
    }

    /// First match of `query_selector_all`
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        self.query_selector_all(root, selector).first()
    }

    /// Descendant elements whose tag name matches (ASCII case-insensitive,
    /// `*` matches all)
    pub fn get_elements_by_tag_name(&self, root: NodeId, name: &str) -> NodeList {
        self.descendant_elements(root)
            .filter(|&node| {
                name == "*"
                    || self
                        .tag_name(node)
                        .is_some_and(|tag| tag.eq_ignore_ascii_case(name))
            })
            .collect()
    }

    /// Descendant elements carrying every class in `names`
    pub fn get_elements_by_class_name(&self, root: NodeId, names: &str) -> NodeList {
        let wanted: Vec<&str> = split_tokens(names).collect();
        if wanted.is_empty() {
            return NodeList::new();
        }
        self.descendant_elements(root)
            .filter(|&node| {
                let classes: Vec<&str> = split_tokens(self.class_name(node)).collect();
                wanted.iter().all(|class| classes.contains(class))
            })
            .collect()
    }

    fn descendant_elements(&self, root: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.self_and_descendants(root)
            .into_iter()
            .skip(1)
            .filter(move |&node| self.is_element(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_attribute_case_insensitive() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");

        tree.set_attribute(div, "Class", "x");
        assert_eq!(tree.get_attribute(div, "class"), Some("x"));

        tree.set_attribute(div, "DATA-ID", 42);
        assert_eq!(tree.get_attribute(div, "data-id"), Some("42"));
        assert_eq!(tree.get_attribute(div, "missing"), None);
    }

    #[test]
    fn test_attribute_aliases() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        tree.set_id(a, "home");
        tree.set_href(a, "/index.html");
        tree.set_src(a, "logo.png");
        tree.set_style(a, "color: red");

        assert_eq!(tree.id(a), Some("home"));
        assert_eq!(tree.get_attribute(a, "href"), Some("/index.html"));
        assert_eq!(tree.src(a), Some("logo.png"));
        assert_eq!(tree.style(a), Some("color: red"));
        assert_eq!(tree.get_attribute_names(a), vec!["id", "href", "src", "style"]);
    }

    #[test]
    fn test_class_name_passthrough() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        assert_eq!(tree.class_name(div), "");

        tree.set_class_name(div, "a b");
        assert_eq!(tree.get_attribute(div, "class"), Some("a b"));
    }

    #[test]
    fn test_local_name_strips_prefix() {
        let mut tree = DomTree::new();
        let svg = tree.create_element("svg:rect");
        let div = tree.create_element("div");

        assert_eq!(tree.tag_name(svg), Some("svg:rect"));
        assert_eq!(tree.local_name(svg), Some("rect"));
        assert_eq!(tree.local_name(div), Some("div"));
    }

    #[test]
    fn test_attributes_ignored_on_text() {
        let mut tree = DomTree::new();
        let text = tree.create_text_node("t");
        tree.set_attribute(text, "id", "x");
        assert_eq!(tree.get_attribute(text, "id"), None);
        assert!(!tree.has_attribute(text, "id"));
    }

    #[test]
    fn test_text_content_collects_descendants() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let hello = tree.create_text_node("Hello, ");
        let b = tree.create_element("b");
        let world = tree.create_text_node("world");
        let comment = tree.create_comment("skip me");
        tree.append_child(p, hello).unwrap();
        tree.append_child(p, b).unwrap();
        tree.append_child(b, world).unwrap();
        tree.append_child(p, comment).unwrap();

        assert_eq!(tree.text_content(p), "Hello, world");
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let old = tree.create_element("span");
        tree.append_child(p, old).unwrap();

        tree.set_text_content(p, "hi").unwrap();
        assert_eq!(tree.child_nodes(p).len(), 1);
        assert_eq!(tree.parent_node(old), None);
        assert_eq!(tree.inner_html(p), "hi");

        tree.set_text_content(p, "").unwrap();
        assert!(!tree.has_child_nodes(p));
    }

    #[test]
    fn test_inner_html_write_unsupported() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        assert_eq!(
            tree.set_inner_html(div, "<b>x</b>"),
            Err(DomError::NotSupported("innerHTML assignment"))
        );
    }

    #[test]
    fn test_query_selector_without_matcher() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        assert!(tree.query_selector_all(div, "div").is_empty());
        assert_eq!(tree.query_selector(div, "div"), None);
    }

    #[test]
    fn test_query_selector_delegates() {
        let mut tree = DomTree::with_selector_matcher(Rc::new(
            |tree: &DomTree, root: NodeId, selector: &str| {
                tree.get_elements_by_tag_name(root, selector).to_vec()
            },
        ));
        let div = tree.create_element("div");
        let first = tree.create_element("span");
        let second = tree.create_element("span");
        tree.append_child(div, first).unwrap();
        tree.append_child(div, second).unwrap();

        assert_eq!(tree.query_selector_all(div, "span").to_vec(), vec![first, second]);
        assert_eq!(tree.query_selector(div, "span"), Some(first));
    }

    #[test]
    fn test_get_elements_by_class_name() {
        let mut tree = DomTree::new();
        let root = tree.create_element("div");
        let a = tree.create_element("p");
        let b = tree.create_element("p");
        tree.set_class_name(a, "note big");
        tree.set_class_name(b, "note");
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();

        assert_eq!(tree.get_elements_by_class_name(root, "note").to_vec(), vec![a, b]);
        assert_eq!(tree.get_elements_by_class_name(root, "big note").to_vec(), vec![a]);
        assert!(tree.get_elements_by_class_name(root, " ").is_empty());
    }
}
