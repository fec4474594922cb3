/// Crate-wide result alias.
pub type AnvilResult<T> = Result<T, AnvilError>;

/// Error type for rendering, encoding and configuration failures.
///
/// Missing fonts never show up here: font resolution falls back to the built-in bitmap font.
#[derive(thiserror::Error, Debug)]
pub enum AnvilError {
    /// Invalid sizes, frame rates, timelines or frame indices.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization or text layout failure.
    #[error("render error: {0}")]
    Render(String),

    /// PNG/GIF encoding failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Unreadable or malformed configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Output file system failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnvilError {
    /// Build an [`AnvilError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AnvilError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AnvilError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`AnvilError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<image::ImageError> for AnvilError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
