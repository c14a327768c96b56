//! Store error types

use crate::persistence::PersistError;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Dependent records found while evaluating a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependents {
    /// Dependent collection label ("Department", "Employee", ...)
    pub entity: &'static str,
    pub count: usize,
}

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound {
        entity: &'static str,
        id: i64,
        code: ErrorCode,
    },

    /// Delete blocked: other records still reference the target
    #[error("{message}")]
    InUse {
        entity: &'static str,
        id: i64,
        code: ErrorCode,
        message: String,
        dependents: Vec<Dependents>,
    },

    /// The highest id in the collection is already `i64::MAX`
    #[error("No {entity} id left to assign")]
    IdsExhausted { entity: &'static str },

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. } | Self::InUse { code, .. } => *code,
            Self::IdsExhausted { .. } => ErrorCode::InternalError,
            Self::Persist(PersistError::Serialization(_)) => ErrorCode::SerializationError,
            Self::Persist(_) => ErrorCode::StorageError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_in_use(&self) -> bool {
        matches!(self, Self::InUse { .. })
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id, code } => {
                AppError::with_message(code, format!("{entity} {id} not found"))
                    .with_detail("entity", entity)
                    .with_detail("id", id)
            }
            StoreError::InUse {
                entity,
                id,
                code,
                message,
                dependents,
            } => dependents.into_iter().fold(
                AppError::in_use(code, message)
                    .with_detail("entity", entity)
                    .with_detail("id", id),
                |err, d| err.with_detail(d.entity, d.count),
            ),
            StoreError::IdsExhausted { entity } => {
                AppError::internal(format!("No {entity} id left to assign"))
                    .with_detail("entity", entity)
            }
            StoreError::Persist(e) => e.into(),
        }
    }
}
