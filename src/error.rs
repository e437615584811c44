/// Convenience result type used across the card pipeline.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy for card generation.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid user-provided input (slug, hero path, arguments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel-stage contract violations (buffer sizes, kernel parameters).
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}
