//! Frame rendering over any [`DrawContext`].

use inkslate_core::Whiteboard;
use inkslate_core::draw::{DrawContext, HighlightStyle};
use kurbo::Rect;

/// Default marquee dash pattern.
pub const MARQUEE_DASH: [f64; 2] = [4.0, 4.0];

/// Context for a single render frame.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// The whiteboard to render.
    pub whiteboard: &'a Whiteboard,
    /// Draw the dashed selection rectangle while a selection is live.
    pub show_marquee: bool,
    /// Marquee stroke color.
    pub marquee_color: String,
    /// Marquee stroke width.
    pub marquee_width: f64,
    /// Marquee dash pattern.
    pub marquee_dash: Vec<f64>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(whiteboard: &'a Whiteboard) -> Self {
        Self {
            whiteboard,
            show_marquee: true,
            marquee_color: HighlightStyle::DEFAULT_COLOR.to_string(),
            marquee_width: 1.0,
            marquee_dash: MARQUEE_DASH.to_vec(),
        }
    }

    pub fn with_marquee(mut self, show: bool) -> Self {
        self.show_marquee = show;
        self
    }

    pub fn with_marquee_color(mut self, color: impl Into<String>) -> Self {
        self.marquee_color = color.into();
        self
    }

    pub fn with_marquee_width(mut self, width: f64) -> Self {
        self.marquee_width = width;
        self
    }

    pub fn with_marquee_dash(mut self, dash: impl Into<Vec<f64>>) -> Self {
        self.marquee_dash = dash.into();
        self
    }

    /// The marquee to draw this frame, if any.
    pub fn marquee(&self) -> Option<Rect> {
        if self.show_marquee {
            self.whiteboard.selection_rect()
        } else {
            None
        }
    }
}

/// Something a frame can be rendered onto.
pub trait Renderer {
    /// Render the whiteboard described by `ctx`.
    fn render(&mut self, ctx: &RenderContext);
}

impl<T: DrawContext + ?Sized> Renderer for T {
    fn render(&mut self, ctx: &RenderContext) {
        render_scene(ctx, self);
    }
}

/// Draw every shape in order, then the selection marquee.
pub fn render_scene<C: DrawContext + ?Sized>(ctx: &RenderContext, target: &mut C) {
    ctx.whiteboard.draw(target);

    if let Some(rect) = ctx.marquee() {
        log::trace!("Drawing marquee {rect:?}");
        target.set_stroke_style(&ctx.marquee_color);
        target.set_line_width(ctx.marquee_width);
        target.set_line_dash(&ctx.marquee_dash);
        target.stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
        target.set_line_dash(&[]);
    }
}
