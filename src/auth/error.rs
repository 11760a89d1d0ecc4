//! Error types for the session provider.

use crate::error::ValidationError;
use crate::framework::StoreError;
use crate::profile_actor::ProfileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered: {0}")]
    EmailTaken(String),

    #[error("Password should be at least {0} characters")]
    WeakPassword(usize),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Account has no profile: {0}")]
    MissingProfile(String),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e.into_rejection::<AuthError>() {
            Ok(inner) => inner,
            Err(StoreError::Conflict(email)) => AuthError::EmailTaken(email),
            Err(other) => AuthError::ActorCommunicationError(other.to_string()),
        }
    }
}
