//! Inkslate Web
//!
//! WebAssembly bindings: a `Whiteboard` class for JavaScript hosts that
//! draws onto a `CanvasRenderingContext2D`.

mod canvas2d;
mod whiteboard;

pub use canvas2d::Canvas2d;
pub use whiteboard::WebWhiteboard;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    log::info!("Inkslate whiteboard module loaded");
    Ok(())
}
