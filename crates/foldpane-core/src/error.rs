//! Error type for pane construction and styling.

use thiserror::Error;

/// Errors raised while configuring a pane.
///
/// Every operation on a constructed pane is infallible; only configuration
/// and style parsing can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaneError {
    #[error("Animation duration must be greater than zero")]
    ZeroDuration,
    #[error("Invalid color: {0:?} (expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),
    #[error("Invalid border width: {0}")]
    InvalidBorderWidth(f32),
    #[error("Invalid border style: {0:?}")]
    InvalidBorderStyle(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PaneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for pane configuration.
pub type PaneResult<T> = Result<T, PaneError>;
