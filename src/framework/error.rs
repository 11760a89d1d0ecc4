//! # Store Errors
//!
//! Errors raised by the table store itself, independent of any row type. Row-level failures
//! raised inside a hook travel inside [`StoreError::Rejected`] and can be recovered with
//! [`StoreError::downcast_rejection`].

/// Errors that can occur within the table store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Table actor closed")]
    ActorClosed,
    #[error("Table actor dropped response channel")]
    ActorDropped,
    #[error("Row not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("Row rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Borrow the row error carried by a `Rejected` variant, if it is an `E`.
    pub fn downcast_rejection<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            StoreError::Rejected(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Take ownership of the row error carried by a `Rejected` variant, if it is an `E`.
    pub fn into_rejection<E: std::error::Error + 'static>(self) -> Result<E, StoreError> {
        match self {
            StoreError::Rejected(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(StoreError::Rejected(inner)),
            },
            other => Err(other),
        }
    }
}
