//! Error types

use thiserror::Error;

/// Configuration errors raised when building a deck or its animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    /// Viewport width must be finite and positive
    #[error("Invalid viewport width: {0}")]
    InvalidViewportWidth(f32),

    /// Swipe threshold ratio must lie in (0, 1]
    #[error("Invalid swipe threshold ratio: {0} (expected a value in (0, 1])")]
    InvalidThresholdRatio(f32),

    /// Spring parameters out of range
    #[error("Invalid spring configuration: {0}")]
    InvalidSpring(String),

    /// Interpolation ranges are malformed
    #[error("Invalid interpolation range: {0}")]
    InvalidRange(String),

    /// Configuration could not be parsed
    #[error("Failed to parse deck configuration: {0}")]
    ConfigParse(String),
}

/// Result type for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;
