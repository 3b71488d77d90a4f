//! JavaScript-facing whiteboard class.

use crate::canvas2d::Canvas2d;
use inkslate_core::{Whiteboard, WhiteboardConfig};
use inkslate_render::{RenderContext, render_scene};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// A whiteboard owned by the host page.
#[wasm_bindgen(js_name = Whiteboard)]
pub struct WebWhiteboard {
    inner: Whiteboard,
}

impl Default for WebWhiteboard {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_class = Whiteboard)]
impl WebWhiteboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Whiteboard::new(),
        }
    }

    /// Construct from a JSON configuration object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WebWhiteboard, JsError> {
        let config = WhiteboardConfig::from_json(json).map_err(to_js_error)?;
        let inner = Whiteboard::with_config(config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    pub fn init(&mut self) {
        self.inner.init();
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(js_name = startDrawing)]
    pub fn start_drawing(&mut self, x: f64, y: f64) {
        self.inner.start_drawing(x, y);
    }

    #[wasm_bindgen(js_name = continueDrawing)]
    pub fn continue_drawing(&mut self, x: f64, y: f64) {
        self.inner.continue_drawing(x, y);
    }

    #[wasm_bindgen(js_name = endDrawing)]
    pub fn end_drawing(&mut self) {
        self.inner.end_drawing();
    }

    #[wasm_bindgen(js_name = setShapeType)]
    pub fn set_shape_type(&mut self, value: u32) -> Result<(), JsError> {
        self.inner.set_shape_type_value(value).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setShapeTypeName)]
    pub fn set_shape_type_name(&mut self, name: &str) -> Result<(), JsError> {
        self.inner.set_shape_type_name(name).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, color: &str) {
        self.inner.set_color(color);
    }

    #[wasm_bindgen(js_name = setThickness)]
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), JsError> {
        self.inner.set_thickness(thickness).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setSelectMode)]
    pub fn set_select_mode(&mut self, enabled: bool) {
        self.inner.set_select_mode(enabled);
    }

    /// Render all shapes, plus the selection marquee while dragging.
    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        let mut canvas = Canvas2d::new(ctx);
        render_scene(&RenderContext::new(&self.inner), &mut canvas);
    }

    pub fn erase(&mut self, x: f64, y: f64, radius: f64) {
        self.inner.erase(x, y, radius);
    }

    #[wasm_bindgen(js_name = startSelection)]
    pub fn start_selection(&mut self, x: f64, y: f64) {
        self.inner.start_selection(x, y);
    }

    #[wasm_bindgen(js_name = updateSelection)]
    pub fn update_selection(&mut self, x: f64, y: f64) {
        self.inner.update_selection(x, y);
    }

    #[wasm_bindgen(js_name = endSelection)]
    pub fn end_selection(&mut self) {
        self.inner.end_selection();
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    #[wasm_bindgen(js_name = moveSelected)]
    pub fn move_selected(&mut self, dx: f64, dy: f64) {
        self.inner.move_selected(dx, dy);
    }

    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self) {
        self.inner.delete_selected();
    }

    /// SVG document of the current shapes.
    #[wasm_bindgen(js_name = exportVector)]
    pub fn export_vector(&self) -> String {
        self.inner.export_vector()
    }

    #[wasm_bindgen(js_name = selectedCount)]
    pub fn selected_count(&self) -> usize {
        self.inner.selected_count()
    }

    #[wasm_bindgen(js_name = shapeCount)]
    pub fn shape_count(&self) -> usize {
        self.inner.shapes().len()
    }
}

fn to_js_error(err: inkslate_core::WhiteboardError) -> JsError {
    log::warn!("{err}");
    JsError::new(&err.to_string())
}
