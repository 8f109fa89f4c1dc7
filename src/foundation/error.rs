/// Convenience result type used across banim.
pub type BanimResult<T> = Result<T, BanimError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction-time invariant violations surface as errors. Missing ports, stale waypoint
/// indices and unresolved wire endpoints are handled locally by the component that detects them.
#[derive(thiserror::Error, Debug)]
pub enum BanimError {
    /// Invalid user-provided configuration (grid dimensions, surface sizes, fps).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters (zero or non-finite durations).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors raised while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised while presenting frames to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BanimError {
    /// Build a [`BanimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BanimError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`BanimError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BanimError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
