//! Namespace resolution
//!
//! `namespaceURI` is resolved from `xmlns` / `xmlns:<prefix>` declarations
//! collected from the root of the node's tree down to the node itself, with
//! closer declarations overriding farther ones.

use std::collections::HashMap;

use crate::{DomTree, NodeId};

/// Default namespace of unprefixed elements
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Namespace bound to the literal `xmlns` prefix
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

const XMLNS_ATTRIBUTE: &str = "xmlns";
const XMLNS_PREFIX: &str = "xmlns:";

/// Split `prefix:local` into `(prefix, local)`; no colon means no prefix
pub(crate) fn split_qualified_name(name: &str) -> (&str, &str) {
    name.split_once(':').unwrap_or(("", name))
}

impl DomTree {
    /// Prefix -> namespace bindings in effect at `id`
    fn namespace_scope(&self, id: NodeId) -> HashMap<&str, &str> {
        let mut scope = HashMap::from([("", XHTML_NAMESPACE), ("xmlns", XMLNS_NAMESPACE)]);
        for node in self.hierarchy(id) {
            let Some(attributes) = self.attributes(node) else {
                continue;
            };
            for attr in attributes.iter() {
                let name = attr.name.as_str();
                if name.eq_ignore_ascii_case(XMLNS_ATTRIBUTE) {
                    scope.insert("", attr.value.as_str());
                } else if name
                    .get(..XMLNS_PREFIX.len())
                    .is_some_and(|p| p.eq_ignore_ascii_case(XMLNS_PREFIX))
                {
                    scope.insert(&name[XMLNS_PREFIX.len()..], attr.value.as_str());
                }
            }
        }
        scope
    }

    /// Namespace of an element-like node's tag prefix, `None` if unbound
    pub fn namespace_uri(&self, id: NodeId) -> Option<&str> {
        let prefix = self.get(id)?.as_element()?.prefix();
        self.namespace_scope(id).get(prefix).copied()
    }

    /// Namespace bound to `prefix` (`None` for the default namespace) at `id`
    pub fn lookup_namespace_uri(&self, id: NodeId, prefix: Option<&str>) -> Option<&str> {
        self.get(id)?;
        self.namespace_scope(id)
            .get(prefix.unwrap_or(""))
            .copied()
    }
}
