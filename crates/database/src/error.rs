use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the registry services.
///
/// The first three variants are the failure classes the schema itself can
/// produce; everything else the store reports passes through as [`Db`]
/// unmodified.
///
/// [`Db`]: ServiceError::Db
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required relation is missing or does not resolve.
    #[error("{0}")]
    Validation(String),

    /// A one-to-one constraint already has its single record.
    #[error("{0}")]
    Uniqueness(String),

    /// Read, update or delete of an identifier that is not in storage.
    #[error("{0}")]
    NotFound(String),

    /// Any other database error, propagated unmodified.
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub(crate) fn not_found(what: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{what} {id} not found"))
    }
}
