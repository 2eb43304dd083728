//! Painter - generates a display list from a layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! The painter walks the layout tree in pre-order and appends drawing
//! commands back to front: a box's own background and borders first, then
//! its children in document order. Parents therefore always paint
//! underneath their children, and earlier siblings underneath later ones.
//!
//! The painter holds no state between calls and never mutates the input
//! tree; it is a pure function from box tree to display list.

use lemur_common::warning::warn_once;

use crate::layout::{LayoutBox, Rect};
use crate::style::{ColorValue, Value};

use super::{DisplayCommand, DisplayList, RectangleCmd};

/// Property fallback chain for backgrounds: the longhand wins over the
/// shorthand when both are present.
const BACKGROUND_CHAIN: &[&str] = &["background-color", "background"];

/// Property fallback chain for borders: an element with no explicit
/// border color still shows a border in its background color.
const BORDER_CHAIN: &[&str] = &["border-color", "background-color", "background"];

/// Build the display list for the layout tree rooted at `root`.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// This is the main entry point for painting. The returned list captures
/// every paint needed to render the whole tree, in correct paint order.
#[must_use]
pub fn build_display_list(root: &LayoutBox) -> DisplayList {
    let mut display_list = DisplayList::new();
    paint_box(root, &mut display_list);
    display_list
}

/// Paint a single layout box, then its descendants.
fn paint_box(layout_box: &LayoutBox, display_list: &mut DisplayList) {
    paint_background(layout_box, display_list);
    paint_borders(layout_box, display_list);
    // TODO: paint text once layout produces text fragments

    // draw children on top of parent
    for child in &layout_box.children {
        paint_box(child, display_list);
    }
}

/// [CSS 2.1 Appendix E.2 Step 2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// "the background color of the element"
///
/// Fills the box's padding area (content + padding, excluding border)
/// with the resolved background color. Emits nothing when no color
/// resolves.
fn paint_background(layout_box: &LayoutBox, display_list: &mut DisplayList) {
    let Some(color) = resolve_color(layout_box, BACKGROUND_CHAIN) else {
        return;
    };
    display_list.push(DisplayCommand::Rect(RectangleCmd::new(
        layout_box.dimensions.padding_box(),
        color,
    )));
}

/// [CSS 2.1 Appendix E.2 Step 2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// "the border of the element"
///
/// Decomposes the border area into four rectangles, emitted in the fixed
/// order top, right, bottom, left. Zero-thickness edges still emit a
/// degenerate zero-area command; filtering those out is a renderer
/// concern, not the painter's.
fn paint_borders(layout_box: &LayoutBox, display_list: &mut DisplayList) {
    let Some(color) = resolve_color(layout_box, BORDER_CHAIN) else {
        return; // nothing to paint if no border color
    };

    let dims = &layout_box.dimensions;
    let border_box = dims.border_box();
    let edges = dims.border;

    // top border
    display_list.push(DisplayCommand::Rect(RectangleCmd::new(
        Rect::new(border_box.x, border_box.y, border_box.width, edges.top),
        color.clone(),
    )));
    // right border
    display_list.push(DisplayCommand::Rect(RectangleCmd::new(
        Rect::new(
            border_box.x + border_box.width - edges.right,
            border_box.y,
            edges.right,
            border_box.height,
        ),
        color.clone(),
    )));
    // bottom border
    display_list.push(DisplayCommand::Rect(RectangleCmd::new(
        Rect::new(
            border_box.x,
            border_box.y + border_box.height - edges.bottom,
            border_box.width,
            edges.bottom,
        ),
        color.clone(),
    )));
    // left border
    display_list.push(DisplayCommand::Rect(RectangleCmd::new(
        Rect::new(border_box.x, border_box.y, edges.left, border_box.height),
        color,
    )));
}

/// Resolve a color through a property fallback chain.
///
/// Anonymous boxes resolve no color for any chain. A present but
/// non-color-typed value resolves to no color as well — it shadows later
/// candidates rather than falling through, and the skip is reported once
/// as an unsupported-feature warning rather than an error.
fn resolve_color(layout_box: &LayoutBox, chain: &[&str]) -> Option<ColorValue> {
    match layout_box.style_value(chain)? {
        Value::Color(color) => Some(color),
        value @ (Value::Length(..) | Value::Keyword(_)) => {
            warn_once(
                "Paint",
                &format!("ignoring non-color value {value:?} for '{}'", chain[0]),
            );
            None
        }
    }
}
