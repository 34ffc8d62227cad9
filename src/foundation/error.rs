/// Convenience result type used across Previz.
pub type PrevizResult<T> = Result<T, PrevizError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Degraded preview conditions (missing media, empty timeline, unmeasured
/// containers) are deliberately *not* errors; they are expected steady states
/// handled by placeholder layers, advisories, and `Option` returns. Errors are
/// reserved for invalid model data and serialization failures.
#[derive(thiserror::Error, Debug)]
pub enum PrevizError {
    /// Invalid user-provided project or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrevizError {
    /// Build a [`PrevizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PrevizError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
