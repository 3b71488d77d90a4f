//! Inkslate Core Library
//!
//! Platform-agnostic data structures and logic for the Inkslate whiteboard:
//! shapes, the board that holds them, tools, and the drawing session.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod geometry;
pub mod session;
pub mod shapes;
pub mod tools;

pub use canvas::Board;
pub use config::{EraseMode, SelectionPolicy, WhiteboardConfig};
pub use draw::{DrawContext, HighlightStyle, LineCap, LineJoin};
pub use error::{WhiteboardError, WhiteboardResult};
pub use export::export_svg;
pub use session::{InteractionState, Whiteboard};
pub use shapes::{Circle, Freehand, Rectangle, Shape, ShapeStyle, ShapeTrait};
pub use tools::{ToolKind, ToolManager};
