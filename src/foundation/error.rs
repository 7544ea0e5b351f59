/// Convenience result type used across notchfit.
pub type NotchfitResult<T> = Result<T, NotchfitError>;

/// Error taxonomy for structural defects.
///
/// Degenerate numbers (NaN safe areas, zero-sized containers) are never
/// reported here; they are normalized where they are read.
#[derive(thiserror::Error, Debug)]
pub enum NotchfitError {
    /// Invalid fitter configuration (influence out of range, malformed values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The driven rectangle has no top-level container to measure against.
    #[error("missing container: {0}")]
    MissingContainer(String),

    /// Errors when serializing or deserializing configuration or device profiles.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NotchfitError {
    /// Build a [`NotchfitError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`NotchfitError::MissingContainer`] value.
    pub fn missing_container(msg: impl Into<String>) -> Self {
        Self::MissingContainer(msg.into())
    }

    /// Build a [`NotchfitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for NotchfitError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
