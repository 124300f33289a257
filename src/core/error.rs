use thiserror::Error;

/// Errors reported by the compatibility engine
///
/// These are data-integrity problems with the profiles handed in. The engine
/// is deterministic, so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Profile {user_id} is missing required field `{field}`")]
    MissingField { user_id: String, field: &'static str },

    #[error("Profile {user_id} has an invalid range: {reason}")]
    InvalidRange { user_id: String, reason: String },

    #[error("Profile {user_id} has an invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        user_id: String,
        latitude: f64,
        longitude: f64,
    },
}

impl EngineError {
    /// Id of the profile that caused the error
    pub fn user_id(&self) -> &str {
        match self {
            EngineError::MissingField { user_id, .. }
            | EngineError::InvalidRange { user_id, .. }
            | EngineError::InvalidCoordinate { user_id, .. } => user_id,
        }
    }
}
