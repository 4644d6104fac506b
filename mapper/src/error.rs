//! Mapper error types.

use graft_accessor::AccessError;
use graft_core::StoreError;
use graft_registry::ClassificationError;
use thiserror::Error;

/// Result type for mapper operations.
pub type MapperResult<T> = Result<T, MapperError>;

/// Mapper errors.
#[derive(Debug, Error)]
pub enum MapperError {
    /// Type name is not registered.
    #[error("Unknown entity type: {name}")]
    UnknownType { name: String },

    /// Type is registered but backed by edges, not nodes.
    #[error("Entity type {name} is not node-backed")]
    NotNodeBacked { name: String },

    /// Field does not map to a relationship accessor.
    #[error("Type {type_name} has no relationship field named {field}")]
    UnknownField { type_name: String, field: String },

    /// Classification error.
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    /// Accessor error.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MapperError {
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    pub fn not_node_backed(name: impl Into<String>) -> Self {
        Self::NotNodeBacked { name: name.into() }
    }

    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}
