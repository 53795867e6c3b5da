//! Element Attributes
//!
//! Attribute storage with case-insensitive names. A name keeps the spelling
//! of its first write; later reads and writes match it ignoring ASCII case.

use std::collections::HashMap;

/// Named node map (attribute collection, insertion ordered)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    /// ASCII-lowercased name -> index into `attributes`
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute by name (ASCII case-insensitive)
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .and_then(|&i| self.attributes.get(i))
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Set attribute value, returning the previous one.
    ///
    /// An existing attribute keeps its stored name spelling.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let key = name.to_ascii_lowercase();
        if let Some(&index) = self.by_name.get(&key) {
            let old = std::mem::replace(&mut self.attributes[index].value, value.into());
            Some(old)
        } else {
            self.by_name.insert(key, self.attributes.len());
            self.attributes.push(Attr::new(name, value));
            None
        }
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(&name.to_ascii_lowercase())?;
        // Update indices for items after removed
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Toggle a boolean attribute, returns whether it is now present
    pub fn toggle(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = self.contains(name);
        if force.unwrap_or(!present) {
            if !present {
                self.set(name, "");
            }
            true
        } else {
            self.remove(name);
            false
        }
    }

    /// Attribute names as stored
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("class", "btn");
        attrs.set("id", "submit");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get("class"), Some("btn"));
        assert_eq!(attrs.get("id"), Some("submit"));
        assert_eq!(attrs.get("title"), None);
    }

    #[test]
    fn test_case_insensitive_names() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("Class", "x");
        assert_eq!(attrs.get("class"), Some("x"));
        assert_eq!(attrs.get("CLASS"), Some("x"));

        assert_eq!(attrs.set("class", "y"), Some("x".to_string()));
        assert_eq!(attrs.length(), 1);
        assert_eq!(attrs.names(), vec!["Class"]);
        assert_eq!(attrs.get("Class"), Some("y"));
    }

    #[test]
    fn test_remove_attribute_keeps_order() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("c", "3");

        assert_eq!(attrs.remove("A"), Some(Attr::new("a", "1")));
        assert!(!attrs.contains("a"));
        assert_eq!(attrs.names(), vec!["b", "c"]);
        assert_eq!(attrs.get("c"), Some("3"));
        assert_eq!(attrs.remove("a"), None);
    }

    #[test]
    fn test_toggle_attribute() {
        let mut attrs = NamedNodeMap::new();

        assert!(attrs.toggle("disabled", None));
        assert!(attrs.contains("disabled"));

        assert!(!attrs.toggle("disabled", None));
        assert!(!attrs.contains("disabled"));

        assert!(attrs.toggle("hidden", Some(true)));
        assert!(attrs.toggle("hidden", Some(true)));
        assert_eq!(attrs.length(), 1);
    }
}
