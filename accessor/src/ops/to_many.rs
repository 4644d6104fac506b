//! Writable one-to-many relationship accessor.

use graft_core::EntityRef;
use graft_graph::GraphStore;

use crate::error::AccessResult;
use crate::materialize::Materialize;
use crate::ops::{snapshot_node_targets, FieldBinding};
use crate::sync::sync_node_targets;
use crate::target_set::TargetSet;
use crate::validation::{require_node_target, require_owner_node};

/// Accessor for fields holding a mutable set of related entities.
#[derive(Debug, Clone)]
pub struct OneToManyAccessor {
    binding: FieldBinding,
}

impl OneToManyAccessor {
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

    /// Make `desired` the exact set of related entities.
    ///
    /// Every handle is validated before the first store mutation, so a
    /// rejected write leaves the graph untouched. Duplicate handles
    /// collapse by store identity.
    pub fn write<S>(
        &self,
        store: &mut S,
        owner: &EntityRef,
        desired: &[EntityRef],
    ) -> AccessResult<()>
    where
        S: GraphStore + ?Sized,
    {
        let owner_id = require_owner_node(owner)?;

        let mut endpoints = Vec::with_capacity(desired.len());
        for target in desired {
            endpoints.push(require_node_target(&self.binding, owner_id, target)?);
        }

        sync_node_targets(store, owner_id, &self.binding.rel, &endpoints)?;
        Ok(())
    }
}
