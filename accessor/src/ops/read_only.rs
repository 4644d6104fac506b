//! Read-only one-to-many relationship accessor.

use graft_core::EntityRef;
use graft_graph::GraphStore;

use crate::error::{AccessError, AccessResult};
use crate::materialize::Materialize;
use crate::ops::{snapshot_node_targets, FieldBinding};
use crate::target_set::TargetSet;

/// Accessor for fields populated from the graph but never written.
#[derive(Debug, Clone)]
pub struct ReadOnlyAccessor {
    binding: FieldBinding,
}

impl ReadOnlyAccessor {
    pub fn new(binding: FieldBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// Snapshot the currently related entities.
    pub fn read<S, M>(
        &self,
        store: &S,
        materializer: &M,
        owner: &EntityRef,
    ) -> AccessResult<TargetSet>
    where
        S: GraphStore + ?Sized,
        M: Materialize + ?Sized,
    {
        snapshot_node_targets(store, materializer, &self.binding, owner)
    }

    /// Writes are rejected before any store call.
    pub fn write<S>(
        &self,
        _store: &mut S,
        _owner: &EntityRef,
        _desired: &[EntityRef],
    ) -> AccessResult<()>
    where
        S: GraphStore + ?Sized,
    {
        Err(AccessError::unsupported_operation(
            &self.binding.entity,
            &self.binding.field,
            "field is read-only",
        ))
    }
}
