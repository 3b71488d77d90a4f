//! Errors raised at the host boundary.

use thiserror::Error;

/// Errors returned when the host passes values the model cannot accept.
///
/// Drawing, selection and erase operations never fail; only values crossing
/// into the model (tool ids, stroke widths, configuration) are validated.
#[derive(Debug, Error)]
pub enum WhiteboardError {
    #[error("Unknown tool value: {0}")]
    UnknownTool(u32),
    #[error("Unknown tool name: {0}")]
    UnknownToolName(String),
    #[error("Invalid thickness: {0} (must be finite and greater than zero)")]
    InvalidThickness(f64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for boundary operations.
pub type WhiteboardResult<T> = Result<T, WhiteboardError>;

/// Check that a stroke width is usable.
pub fn validate_thickness(thickness: f64) -> WhiteboardResult<f64> {
    if thickness.is_finite() && thickness > 0.0 {
        Ok(thickness)
    } else {
        Err(WhiteboardError::InvalidThickness(thickness))
    }
}
