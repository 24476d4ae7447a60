use crate::types::DbId;

/// Domain-level failure taxonomy shared by the Account Directory and the
/// Idea Ledger.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User with this phone number already exists")]
    DuplicateAccount,

    /// Unknown phone number and wrong password are deliberately the same
    /// variant.
    #[error("Invalid phone number or password")]
    InvalidCredentials,

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
