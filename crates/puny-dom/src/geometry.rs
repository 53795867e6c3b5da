//! Geometry APIs
//!
//! There is no layout, so every element reports an empty rectangle.

use crate::{DomTree, NodeId};

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DomRect {
    /// Create empty rect
    pub fn new() -> Self {
        Self::default()
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }
}

impl DomTree {
    /// Always the empty rect at the origin
    pub fn get_bounding_client_rect(&self, _id: NodeId) -> DomRect {
        DomRect::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_rect_is_empty() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let rect = tree.get_bounding_client_rect(div);

        assert_eq!(rect, DomRect::new());
        assert_eq!(rect.right(), 0.0);
        assert_eq!(rect.bottom(), 0.0);
        assert_eq!(rect.left(), rect.top());
    }
}
