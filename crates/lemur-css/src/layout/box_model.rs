//! CSS Box Model types.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Negative widths and heights are representable and pass through layout
/// and painting unchecked; degenerate rectangles are a renderer concern.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its origin and dimensions.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// Create edge sizes, listed in the CSS shorthand order.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same size on all four edges.
    #[must_use]
    pub const fn uniform(size: f32) -> Self {
        Self::new(size, size, size, size)
    }
}

/// [§ 3. The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
///
/// The boxes from innermost to outermost:
///   1. Content box  - the actual content (text, images, etc.)
///   2. Padding box  - content + padding
///   3. Border box   - content + padding + border
///   4. Margin box   - content + padding + border + margin (outermost)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxDimensions {
    /// Content area rectangle.
    pub content: Rect,
    /// Padding thickness per edge.
    pub padding: EdgeSizes,
    /// Border thickness per edge.
    pub border: EdgeSizes,
    /// Margin thickness per edge.
    pub margin: EdgeSizes,
}

impl BoxDimensions {
    /// Dimensions with the given content rect and no padding, border, or
    /// margin.
    #[must_use]
    pub const fn from_content(content: Rect) -> Self {
        Self {
            content,
            padding: EdgeSizes::new(0.0, 0.0, 0.0, 0.0),
            border: EdgeSizes::new(0.0, 0.0, 0.0, 0.0),
            margin: EdgeSizes::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    /// "The content box contains the actual content of the element."
    #[must_use]
    pub const fn content_box(&self) -> Rect {
        self.content
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        Rect {
            x: self.content.x - self.padding.left,
            y: self.content.y - self.padding.top,
            width: self.content.width + self.padding.left + self.padding.right,
            height: self.content.height + self.padding.top + self.padding.bottom,
        }
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub fn border_box(&self) -> Rect {
        let padding_box = self.padding_box();
        Rect {
            x: padding_box.x - self.border.left,
            y: padding_box.y - self.border.top,
            width: padding_box.width + self.border.left + self.border.right,
            height: padding_box.height + self.border.top + self.border.bottom,
        }
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        let border_box = self.border_box();
        Rect {
            x: border_box.x - self.margin.left,
            y: border_box.y - self.margin.top,
            width: border_box.width + self.margin.left + self.margin.right,
            height: border_box.height + self.margin.top + self.margin.bottom,
        }
    }
}
