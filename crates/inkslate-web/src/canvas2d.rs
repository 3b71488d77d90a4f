//! [`DrawContext`] over a browser 2D canvas context.

use inkslate_core::draw::{DrawContext, LineCap, LineJoin};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Forwards drawing calls to a `CanvasRenderingContext2D`.
pub struct Canvas2d<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2d<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawContext for Canvas2d<'_> {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        // The canvas throws on negative radii
        if let Err(err) = self.ctx.arc(cx, cy, radius, start_angle, end_angle) {
            log::warn!("Canvas arc failed: {err:?}");
        }
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let array: js_sys::Array = segments.iter().copied().map(JsValue::from_f64).collect();
        if let Err(err) = self.ctx.set_line_dash(array.as_ref()) {
            log::warn!("Canvas setLineDash failed: {err:?}");
        }
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_str());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(join.as_str());
    }
}
