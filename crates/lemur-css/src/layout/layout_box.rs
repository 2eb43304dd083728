//! The positioned layout-box tree.
//!
//! [CSS Display Level 3](https://www.w3.org/TR/css-display-3/)

use crate::style::{PropertyMap, Value};

use super::BoxDimensions;

/// [§ 2.1 Anonymous Boxes](https://www.w3.org/TR/css-display-3/#anonymous)
///
/// What a layout box was generated for.
///
/// Boxes generated directly for a styled element carry that element's
/// resolved properties. Anonymous boxes are inserted by layout for
/// formatting purposes, carry no style of their own, and never paint —
/// though their children may.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxType {
    /// A box generated for a styled element.
    Styled(PropertyMap),
    /// "anonymous boxes... cannot be targeted by selectors and have no
    /// style of their own"
    Anonymous,
}

/// A positioned, sized box produced by layout for one document node.
///
/// Owned tree: each box holds its children by value, in document order,
/// so the tree is acyclic by construction and traversal depth equals
/// nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    /// Content/padding/border/margin geometry computed by layout.
    pub dimensions: BoxDimensions,
    /// Styled or anonymous.
    pub box_type: BoxType,
    /// Child boxes in document order.
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    /// Create a box for a styled element.
    #[must_use]
    pub const fn styled(dimensions: BoxDimensions, properties: PropertyMap) -> Self {
        Self {
            dimensions,
            box_type: BoxType::Styled(properties),
            children: Vec::new(),
        }
    }

    /// Create an anonymous box.
    #[must_use]
    pub const fn anonymous(dimensions: BoxDimensions) -> Self {
        Self {
            dimensions,
            box_type: BoxType::Anonymous,
            children: Vec::new(),
        }
    }

    /// Append a child box.
    pub fn push_child(&mut self, child: LayoutBox) {
        self.children.push(child);
    }

    /// Resolve a style property through an ordered fallback chain.
    ///
    /// Only styled boxes resolve anything; an anonymous box yields `None`
    /// for every chain. See [`PropertyMap::value`] for the fallback
    /// semantics.
    #[must_use]
    pub fn style_value(&self, names: &[&str]) -> Option<Value> {
        match &self.box_type {
            BoxType::Styled(properties) => properties.value(names),
            BoxType::Anonymous => None,
        }
    }
}
