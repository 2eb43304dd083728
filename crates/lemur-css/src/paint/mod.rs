//! Display list and painting.
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! The display list is the output of the painting phase: an ordered,
//! backend-agnostic sequence of paint commands a rasterizer can execute
//! without knowing anything about HTML, CSS, or layout.

mod display_list;
mod painter;

pub use display_list::{DisplayCommand, DisplayList, RectangleCmd, Renderer};
pub use painter::build_display_list;
