//! Display List - a sequence of drawing commands
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! Commands are stored in painting order (back to front): entries nearer
//! the front are painted first and may be covered by later entries. Order
//! is the sole carrier of z-ordering; there is no explicit z-index field.

use crate::layout::Rect;
use crate::style::ColorValue;

/// Command to fill an axis-aligned rectangle with a solid color.
///
/// Used for backgrounds and solid borders. Immutable after construction;
/// no validation is performed, so negative or zero-area rectangles pass
/// through and the renderer decides how to treat them (commonly as a
/// no-op paint).
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleCmd {
    rect: Rect,
    color: ColorValue,
}

impl RectangleCmd {
    /// Create a rectangle command.
    #[must_use]
    pub const fn new(rect: Rect, color: ColorValue) -> Self {
        Self { rect, color }
    }

    /// The encompassing rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// The fill color.
    #[must_use]
    pub const fn color(&self) -> &ColorValue {
        &self.color
    }
}

/// A single drawing command.
///
/// [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Closed set of command kinds with exhaustive dispatch: adding a renderer
/// backend requires no change here, while adding a command kind means
/// extending [`Renderer`] and every implementation of it. Renderers are
/// few and command kinds change rarely, so the trade-off points this way.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Fill a solid rectangle (backgrounds, borders).
    Rect(RectangleCmd),
}

impl DisplayCommand {
    /// Double dispatch: hand this command to the renderer operation
    /// matching its kind. The renderer, not the command, decides how the
    /// paint is executed.
    pub fn dispatch<R: Renderer>(&self, renderer: &mut R) {
        match self {
            Self::Rect(cmd) => renderer.paint_rect(cmd),
        }
    }
}

/// A paint backend executing display commands.
///
/// One paint operation per concrete command kind. Implementations must be
/// safe to invoke once per queued command, in queue order, with no
/// required state between calls beyond an accumulating pixel buffer.
pub trait Renderer {
    /// Paint a solid rectangle.
    fn paint_rect(&mut self, cmd: &RectangleCmd);
}

/// A list of drawing commands in painting order.
///
/// [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Append-only FIFO: the builder never removes or reorders entries once
/// pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// The commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// The number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute every command against `renderer`, in painting order.
    pub fn replay<R: Renderer>(&self, renderer: &mut R) {
        for command in &self.commands {
            command.dispatch(renderer);
        }
    }
}
