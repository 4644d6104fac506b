//! Accessor error types.

use graft_core::StoreError;
use graft_registry::ClassificationError;
use thiserror::Error;

/// Result type for accessor operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Errors that can occur while reading or writing relationship fields.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("Entity {entity} is not bound to a store node")]
    UnboundEntity { entity: String },

    #[error("Invalid target for field {field} on type {entity}: {detail}")]
    InvalidTarget {
        entity: String,
        field: String,
        detail: String,
    },

    #[error("Field {field} on type {entity} cannot relate an entity to itself")]
    CircularReference { entity: String, field: String },

    #[error("Unsupported operation on field {field} of type {entity}: {detail}")]
    UnsupportedOperation {
        entity: String,
        field: String,
        detail: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccessError {
    pub fn unbound_entity(entity: impl Into<String>) -> Self {
        Self::UnboundEntity {
            entity: entity.into(),
        }
    }

    pub fn invalid_target(
        entity: impl Into<String>,
        field: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::InvalidTarget {
            entity: entity.into(),
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn circular_reference(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Self::CircularReference {
            entity: entity.into(),
            field: field.into(),
        }
    }

    pub fn unsupported_operation(
        entity: impl Into<String>,
        field: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperation {
            entity: entity.into(),
            field: field.into(),
            detail: detail.into(),
        }
    }
}
