//! Whiteboard behavior configuration.

use crate::draw::HighlightStyle;
use crate::error::{WhiteboardError, WhiteboardResult};
use crate::shapes::{DEFAULT_COLOR, DEFAULT_THICKNESS, HIT_TOLERANCE};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// How a selection rectangle decides which shapes it picks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Any overlap selects: per segment for strokes, by bounds otherwise.
    #[default]
    Intersects,
    /// Only shapes whose bounds lie fully inside the rectangle.
    Contains,
}

/// What the eraser removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraseMode {
    /// Remove every shape under the eraser point.
    #[default]
    WholeShape,
    /// Remove stroke points within the eraser radius; drop a stroke once it
    /// is empty. Rectangles and circles under the point are removed whole.
    Points,
}

/// Tunables for a [`crate::Whiteboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// Tool selected on start and after `clear`.
    pub default_tool: ToolKind,
    /// Stroke color on start and after `clear`.
    pub default_color: String,
    /// Stroke width on start and after `clear`.
    pub default_thickness: f64,
    /// Stroke hit distance in pixels.
    pub hit_tolerance: f64,
    pub selection_policy: SelectionPolicy,
    pub erase_mode: EraseMode,
    /// Apply color/thickness changes to the shape being drawn.
    pub live_style: bool,
    /// Selection outline.
    pub highlight: HighlightStyle,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            default_tool: ToolKind::Freehand,
            default_color: DEFAULT_COLOR.to_string(),
            default_thickness: DEFAULT_THICKNESS,
            hit_tolerance: HIT_TOLERANCE,
            selection_policy: SelectionPolicy::default(),
            erase_mode: EraseMode::default(),
            live_style: false,
            highlight: HighlightStyle::default(),
        }
    }
}

impl WhiteboardConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> WhiteboardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> WhiteboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check numeric fields.
    pub fn validate(&self) -> WhiteboardResult<()> {
        if !(self.default_thickness.is_finite() && self.default_thickness > 0.0) {
            return Err(WhiteboardError::InvalidConfig(format!(
                "default_thickness must be finite and greater than zero, got {}",
                self.default_thickness
            )));
        }
        if !(self.hit_tolerance.is_finite() && self.hit_tolerance >= 0.0) {
            return Err(WhiteboardError::InvalidConfig(format!(
                "hit_tolerance must be finite and non-negative, got {}",
                self.hit_tolerance
            )));
        }
        if !(self.highlight.width.is_finite() && self.highlight.width > 0.0) {
            return Err(WhiteboardError::InvalidConfig(format!(
                "highlight.width must be finite and greater than zero, got {}",
                self.highlight.width
            )));
        }
        if !self.highlight.margin.is_finite() {
            return Err(WhiteboardError::InvalidConfig(format!(
                "highlight.margin must be finite, got {}",
                self.highlight.margin
            )));
        }
        Ok(())
    }
}
