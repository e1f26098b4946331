use std::sync::Arc;

/// Convenience result type used across the crate.
pub type DiaryResult<T> = Result<T, DiaryError>;

/// Top-level error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum DiaryError {
    /// Missing or invalid configuration. Fatal for any fetch.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid caller-provided data (viewport, fps, route...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Content backend returned something unusable as a whole.
    #[error("content error: {0}")]
    Content(String),

    /// Rasterization or surface errors.
    #[error("render error: {0}")]
    Render(String),

    /// Transport-level failure talking to the content backend.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// An error replayed from a shared in-flight fetch.
    #[error(transparent)]
    Shared(Arc<DiaryError>),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DiaryError {
    /// Build a [`DiaryError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DiaryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DiaryError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`DiaryError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DiaryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` when this (or the shared error it wraps) is a configuration error.
    pub fn is_config(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Shared(inner) => inner.is_config(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for DiaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
