/// Crate-wide result alias.
pub type DiagmockResult<T> = Result<T, DiagmockError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type used across diagmock APIs.
pub enum DiagmockError {
    /// Canvas dimensions the compositor cannot paint.
    #[error("invalid canvas {width}x{height}: {reason}")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Color specification that is neither hex nor a known name.
    #[error("color error: {0}")]
    Color(String),

    /// One scalable font candidate could not be loaded.
    #[error("font error: {0}")]
    Font(String),

    /// Uploaded image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Scene JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other failure with preserved source.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DiagmockError {
    /// Build an [`DiagmockError::InvalidCanvas`] error.
    pub fn invalid_canvas(width: u32, height: u32, reason: &'static str) -> Self {
        Self::InvalidCanvas {
            width,
            height,
            reason,
        }
    }

    /// Build a [`DiagmockError::Color`] error.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`DiagmockError::Font`] error.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`DiagmockError::Decode`] error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`DiagmockError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
