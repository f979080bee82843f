use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// An entity looked up by something other than its id was absent.
    #[error("Not found: {0}")]
    Missing(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Several fields failed validation at once; one message per field.
    #[error("Validation failed: {}", .0.join("; "))]
    InvalidFields(Vec<String>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
