//! HTML Serialization
//!
//! Values are written verbatim: nothing is entity-escaped, so callers must
//! pre-escape text they do not trust. Elements always get a close tag.

use crate::{DomTree, NodeData, NodeId, NodeType};

/// Pending serializer work
enum Step<'a> {
    Node(NodeId),
    Close(&'a str),
}

impl DomTree {
    /// Serialize a node and its descendants (outerHTML)
    pub fn to_html(&self, id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_nodes(std::slice::from_ref(&id), &mut output);
        output
    }

    pub(crate) fn serialize_children(&self, id: NodeId, output: &mut String) {
        self.serialize_nodes(self.child_nodes(id).as_slice(), output);
    }

    /// Serialize `roots` in order; nesting is tracked on a heap stack
    fn serialize_nodes(&self, roots: &[NodeId], output: &mut String) {
        let mut stack: Vec<Step<'_>> = roots.iter().rev().map(|&id| Step::Node(id)).collect();

        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Close(tag) => {
                    output.push_str("</");
                    output.push_str(tag);
                    output.push('>');
                    continue;
                }
                Step::Node(id) => id,
            };
            let Some(node) = self.get(id) else {
                continue;
            };

            match (&node.data, node.node_type()) {
                (NodeData::Value(value), NodeType::Comment) => {
                    output.push_str("<!--");
                    output.push_str(value);
                    output.push_str("-->");
                    continue;
                }
                (NodeData::Value(value), _) => {
                    output.push_str(value);
                    continue;
                }
                (NodeData::Element(elem), _) if !elem.tag_name().is_empty() => {
                    let tag = elem.tag_name();

                    // Start tag
                    output.push('<');
                    output.push_str(tag);
                    for attr in elem.attributes.iter() {
                        output.push(' ');
                        output.push_str(&attr.name);
                        output.push_str("=\"");
                        output.push_str(&attr.value);
                        output.push('"');
                    }
                    output.push('>');

                    // End tag, emitted once the children are done
                    stack.push(Step::Close(tag));
                }
                // Document, fragment and doctype: no tags of their own
                _ => {}
            }
            stack.extend(node.children.iter().rev().map(Step::Node));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_element_with_attributes() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        tree.set_attribute(a, "href", "/x");
        tree.set_attribute(a, "class", "link");
        let text = tree.create_text_node("go");
        tree.append_child(a, text).unwrap();

        assert_eq!(tree.to_html(a), r#"<a href="/x" class="link">go</a>"#);
    }

    #[test]
    fn test_serialize_comment_and_raw_text() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let comment = tree.create_comment(" note ");
        let text = tree.create_text_node("<b>&</b>");
        tree.append_child(div, comment).unwrap();
        tree.append_child(div, text).unwrap();

        assert_eq!(tree.to_html(div), "<div><!-- note --><b>&</b></div>");
        assert_eq!(tree.inner_html(div), "<!-- note --><b>&</b>");
    }

    #[test]
    fn test_fragment_has_no_tags() {
        let mut tree = DomTree::new();
        let fragment = tree.create_document_fragment();
        let a = tree.create_element("i");
        let b = tree.create_element("br");
        tree.append_child(fragment, a).unwrap();
        tree.append_child(fragment, b).unwrap();

        assert_eq!(tree.to_html(fragment), "<i></i><br></br>");
    }

    #[test]
    fn test_serialize_document() {
        let mut tree = DomTree::new();
        let doc = tree.create_document();
        assert_eq!(
            tree.to_html(doc),
            "<html><head></head><body></body></html>"
        );
    }
}
