// Domain error taxonomy
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Validation failures raised by the core. None of them are fatal to a
/// tracking session or a matching query; callers decide what to surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid coordinate: latitude={latitude}, longitude={longitude}")]
    InvalidCoordinate { latitude: String, longitude: String },

    #[error("invalid fix: {0}")]
    InvalidFix(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    pub fn invalid_coordinate(latitude: impl ToString, longitude: impl ToString) -> Self {
        Self::InvalidCoordinate {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }
}
