//! Positioned box-tree types consumed by painting.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! Layout (an upstream crate) positions and sizes boxes; this module holds
//! the resulting tree shape. Painting reads it without mutating it.

mod box_model;
mod layout_box;

pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use layout_box::{BoxType, LayoutBox};
