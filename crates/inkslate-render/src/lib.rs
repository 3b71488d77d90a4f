//! Inkslate Render Library
//!
//! Renders a whiteboard frame onto any `DrawContext`, and provides a
//! recording context for headless use.

mod recorder;
mod renderer;

pub use recorder::{CommandRecorder, DrawCommand};
pub use renderer::{MARQUEE_DASH, RenderContext, Renderer, render_scene};
