//! ClassList (DOMTokenList over `class`)
//!
//! A view bound to one element. It keeps no tokens of its own: every call
//! reads the current `class` attribute and writes the recomposed value back.
//! Tokens are separated by U+0020 only; tabs and newlines are token content.

use crate::{DomTree, NodeId};

/// Live token view over an element's `class` attribute
pub struct ClassList<'a> {
    tree: &'a mut DomTree,
    element: NodeId,
}

impl<'a> ClassList<'a> {
    pub fn new(tree: &'a mut DomTree, element: NodeId) -> Self {
        Self { tree, element }
    }

    /// Current `class` value
    pub fn value(&self) -> &str {
        self.tree.class_name(self.element)
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        split_tokens(self.value())
    }

    fn write(&mut self, value: String) {
        self.tree.set_attribute(self.element, "class", value);
    }

    /// Get number of tokens
    pub fn length(&self) -> usize {
        self.tokens().count()
    }

    /// Get token at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.tokens().nth(index)
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    /// Append each token not already present, separated by single spaces
    pub fn add(&mut self, tokens: &[&str]) {
        let mut value = self.value().to_string();
        let mut changed = false;
        for token in tokens {
            if token.is_empty() || split_tokens(&value).any(|t| t == *token) {
                continue;
            }
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(token);
            changed = true;
        }
        if changed {
            self.write(value);
        }
    }

    /// Rewrite `class` without any of `tokens`
    pub fn remove(&mut self, tokens: &[&str]) {
        if !tokens.iter().any(|token| self.contains(token)) {
            return;
        }
        let value = self
            .tokens()
            .filter(|t| !tokens.contains(t))
            .collect::<Vec<_>>()
            .join(" ");
        self.write(value);
    }

    /// Toggle token, returns new state
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        if force.unwrap_or(!self.contains(token)) {
            self.add(&[token]);
            true
        } else {
            self.remove(&[token]);
            false
        }
    }

    /// Replace `old_token` with `new_token`, returns whether `old_token` was present
    pub fn replace(&mut self, old_token: &str, new_token: &str) -> bool {
        if !self.contains(old_token) {
            return false;
        }
        let mut seen: Vec<&str> = Vec::new();
        for token in self.tokens() {
            let token = if token == old_token { new_token } else { token };
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
        let value = seen.join(" ");
        self.write(value);
        true
    }
}

/// Non-empty tokens of a space-separated list
pub(crate) fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(' ').filter(|token| !token.is_empty())
}

impl DomTree {
    /// `classList` view of `element`
    pub fn class_list(&mut self, element: NodeId) -> ClassList<'_> {
        ClassList::new(self, element)
    }
}
