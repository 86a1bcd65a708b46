//! Pane configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{PaneError, PaneResult};

/// Default animation duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 100;

/// Header height assumed until the host measures the real one.
pub const DEFAULT_HEADER_HEIGHT: f32 = 28.0;

/// Construction parameters for a pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub title: String,
    pub animation_duration_ms: u64,
    pub easing: Easing,
    pub header_height: f32,
    pub start_expanded: bool,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::default(),
            header_height: DEFAULT_HEADER_HEIGHT,
            start_expanded: false,
        }
    }
}

impl PaneConfig {
    /// Config with a title and duration, everything else default.
    pub fn new(title: impl Into<String>, animation_duration_ms: u64) -> Self {
        Self {
            title: title.into(),
            animation_duration_ms,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> PaneResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values a pane cannot be built from.
    pub fn validate(&self) -> PaneResult<()> {
        if self.animation_duration_ms == 0 {
            return Err(PaneError::ZeroDuration);
        }
        if !self.header_height.is_finite() || self.header_height < 0.0 {
            return Err(PaneError::Config(format!(
                "header_height must be a non-negative number, got {}",
                self.header_height
            )));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}
