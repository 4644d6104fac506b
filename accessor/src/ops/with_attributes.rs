//! Relationship-entity accessor.
//!
//! Target elements here are the edges themselves, surfaced as edge-backed
//! entities that carry properties. Reads and writes therefore diff by edge
//! identity, not by far endpoint.

use graft_core::{EdgeId, EntityRef};
use graft_graph::GraphStore;
use std::collections::BTreeSet;

use crate::error::{AccessError, AccessResult};
use crate::materialize::Materialize;
use crate::ops::FieldBinding;
use crate::target_set::TargetSet;
use crate::validation::require_owner_node;

/// Accessor for fields holding edge-backed relationship entities.
#[derive(Debug, Clone)]
pub struct WithAttributesAccessor {
    binding: FieldBinding,
}

impl WithAttributesAccessor {
    pub fn new(binding: FieldBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// Snapshot the relationship entities incident to the owner.
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
        let owner_id = require_owner_node(owner)?;

        let mut targets = Vec::new();
        for edge_id in store.find_edges(owner_id, &self.binding.rel)? {
            let edge = store.edge(edge_id)?;
            targets.push(materializer.materialize_edge(edge, &self.binding.target_type));
        }
        Ok(TargetSet::from_handles(targets))
    }

    /// Prune the relationship-entity set down to `desired`.
    ///
    /// Every desired handle must be a relationship entity already incident
    /// to the owner; fresh relationship entities enter the graph through
    /// edge creation on the mapper side, so this write only ever removes.
    /// A removed entity loses its backing edge and all its properties.
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
        let current = store.find_edges(owner_id, &self.binding.rel)?;

        let mut keep = BTreeSet::new();
        for target in desired {
            keep.insert(self.require_incident(&current, target)?);
        }

        for edge_id in current {
            if !keep.contains(&edge_id) {
                store.delete_edge(edge_id)?;
            }
        }
        Ok(())
    }

    /// Validate one desired handle against the current incident edges.
    fn require_incident(&self, current: &[EdgeId], target: &EntityRef) -> AccessResult<EdgeId> {
        if target.type_name() != self.binding.target_type {
            return Err(AccessError::invalid_target(
                &self.binding.entity,
                &self.binding.field,
                format!(
                    "expected {}, got {}",
                    self.binding.target_type,
                    target.type_name()
                ),
            ));
        }

        let edge_id = match target.edge_id() {
            Some(id) => id,
            None => {
                return Err(AccessError::invalid_target(
                    &self.binding.entity,
                    &self.binding.field,
                    format!("{} is not a stored relationship entity", target),
                ))
            }
        };

        if !current.contains(&edge_id) {
            return Err(AccessError::invalid_target(
                &self.binding.entity,
                &self.binding.field,
                format!("{} is not incident to the owner", target),
            ));
        }

        Ok(edge_id)
    }
}
