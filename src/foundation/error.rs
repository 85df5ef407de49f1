/// Convenience result type used across the crate.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for page construction and configuration.
///
/// Runtime events (scroll, pointer, intersection, frame ticks) never fail;
/// errors only surface while building a page, parsing a margin or loading a
/// scenario.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided or page-definition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters (durations, delays, easing curves).
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid layout data (unknown sections, negative sizes).
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MotionError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
