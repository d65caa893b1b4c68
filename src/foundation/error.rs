/// Result alias used across the crate.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Errors surfaced by decoders, loaders and validation.
///
/// Out-of-range pixel access and degenerate resize requests are not errors; they are reported
/// through `Option` and [`crate::ResizeOutcome`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// The file could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes do not form a valid bitmap or animation container.
    #[error("format error: {0}")]
    Format(String),

    /// The input is well-formed but uses a feature this crate does not decode.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Caller-supplied parameters are inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other failure, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Format`].
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`SpriteError::Unsupported`].
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`SpriteError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Map an early end of stream to a format error, keep every other I/O failure as-is.
    pub(crate) fn from_read(err: std::io::Error, what: &str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::format(format!("stream ended early while reading {what}"))
        } else {
            Self::Io(err)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
