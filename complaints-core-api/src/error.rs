use thiserror::Error;

/// Error taxonomy for the complaint core.
///
/// Authorization denials that must not leak row existence are reported as
/// `NotFound`; `Forbidden` is reserved for callers that are allowed to see
/// the entity but not to act on it.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Reference id generation failed: {0}")]
    Generation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        CoreError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
