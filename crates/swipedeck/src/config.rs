//! Deck configuration
//!
//! Viewport width, swipe threshold and exit timing are passed in at
//! construction rather than read from the display, so decks can be driven
//! with synthetic viewport sizes. Configurations can also be loaded from
//! TOML:
//!
//! ```toml
//! viewport_width = 390.0
//! swipe_threshold_ratio = 0.4
//! exit_duration_ms = 250
//! exit_easing = "linear"
//!
//! [reset_spring]
//! stiffness = 230.0
//! damping = 22.0
//! ```

use serde::{Deserialize, Serialize};
use swipedeck_animation::{Easing, SpringConfig};
use swipedeck_core::{DeckError, Result};

/// Width used when a configuration does not name one
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 375.0;

/// Fraction of the viewport a release must pass to commit a swipe
pub const DEFAULT_SWIPE_THRESHOLD_RATIO: f32 = 0.40;

/// Duration of the swipe-out animation
pub const DEFAULT_EXIT_DURATION_MS: u32 = 250;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Width of the viewport in logical pixels
    pub viewport_width: f32,
    /// Swipe threshold as a fraction of `viewport_width`
    pub swipe_threshold_ratio: f32,
    /// Duration of the timed exit transition
    pub exit_duration_ms: u32,
    /// Easing of the timed exit transition
    pub exit_easing: Easing,
    /// Horizontal offset, in viewport widths, at which rotation saturates
    pub rotation_span: f32,
    /// Rotation reached at `rotation_span`, in degrees
    pub max_rotation_deg: f32,
    /// Spring used to return an abandoned drag to rest
    pub reset_spring: SpringConfig,
}

impl DeckConfig {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }

    pub fn with_threshold_ratio(mut self, ratio: f32) -> Self {
        self.swipe_threshold_ratio = ratio;
        self
    }

    pub fn with_exit_duration_ms(mut self, duration_ms: u32) -> Self {
        self.exit_duration_ms = duration_ms;
        self
    }

    pub fn with_exit_easing(mut self, easing: Easing) -> Self {
        self.exit_easing = easing;
        self
    }

    pub fn with_reset_spring(mut self, spring: SpringConfig) -> Self {
        self.reset_spring = spring;
        self
    }

    /// Absolute horizontal offset a release must exceed to commit
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_ratio * self.viewport_width
    }

    /// Horizontal distance travelled by an exiting card
    pub fn exit_distance(&self) -> f32 {
        self.viewport_width
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: DeckConfig =
            toml::from_str(source).map_err(|e| DeckError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0) {
            return Err(DeckError::InvalidViewportWidth(self.viewport_width));
        }
        let ratio = self.swipe_threshold_ratio;
        if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
            return Err(DeckError::InvalidThresholdRatio(ratio));
        }
        if !(self.rotation_span.is_finite() && self.rotation_span > 0.0) {
            return Err(DeckError::InvalidRange(format!(
                "rotation span must be positive, got {}",
                self.rotation_span
            )));
        }
        if !self.max_rotation_deg.is_finite() {
            return Err(DeckError::InvalidRange(format!(
                "max rotation must be finite, got {}",
                self.max_rotation_deg
            )));
        }
        self.reset_spring.validate()
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            swipe_threshold_ratio: DEFAULT_SWIPE_THRESHOLD_RATIO,
            exit_duration_ms: DEFAULT_EXIT_DURATION_MS,
            exit_easing: Easing::Linear,
            rotation_span: 2.0,
            max_rotation_deg: 120.0,
            reset_spring: SpringConfig::default(),
        }
    }
}
