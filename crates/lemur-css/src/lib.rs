//! Style values, box model, and display-list painting for the Lemur renderer.
//!
//! # Scope
//!
//! This crate implements the paint side of the engine core:
//!
//! - **Style values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Color values (hex notation, basic named colors)
//!   - Resolved per-element property maps with ordered fallback lookup
//!
//! - **Box model types** ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Rectangles and per-edge sizes
//!   - Content/padding/border/margin area computation
//!   - The positioned layout-box tree consumed by painting
//!
//! - **Display list and painting** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html))
//!   - Backend-agnostic paint commands with renderer dispatch
//!   - The display-list builder walking a layout tree in paint order
//!
//! # Not Yet Implemented
//!
//! - Text painting (layout produces no text fragments yet)
//! - Tokenizer, parser, selector matching, and cascade (upstream crates
//!   hand this crate fully resolved property maps)

/// Box model and layout-box structures per [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/).
pub mod layout;
/// Display list and painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Style value representation per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod style;

// Re-exports for convenience
pub use layout::{BoxDimensions, BoxType, EdgeSizes, LayoutBox, Rect};
pub use paint::{DisplayCommand, DisplayList, RectangleCmd, Renderer, build_display_list};
pub use style::{ColorValue, PropertyMap, Unit, Value};
