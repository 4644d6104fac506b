//! Single-valued relationship accessor.

use graft_core::EntityRef;
use graft_graph::GraphStore;

use crate::error::AccessResult;
use crate::materialize::Materialize;
use crate::ops::FieldBinding;
use crate::sync::{far_endpoint, sync_node_targets};
use crate::validation::{require_node_target, require_owner_node};

/// Accessor for fields holding at most one related entity.
#[derive(Debug, Clone)]
pub struct SingleAccessor {
    binding: FieldBinding,
}

impl SingleAccessor {
    pub fn new(binding: FieldBinding) -> Self {
        Self { binding }
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// Read the currently related entity, if any.
    ///
    /// Duplicate edges left behind by outside mutation are tolerated by
    /// picking the one with the lowest edge id.
    pub fn read<S, M>(
        &self,
        store: &S,
        materializer: &M,
        owner: &EntityRef,
    ) -> AccessResult<Option<EntityRef>>
    where
        S: GraphStore + ?Sized,
        M: Materialize + ?Sized,
    {
        let owner_id = require_owner_node(owner)?;

        let edge_ids = store.find_edges(owner_id, &self.binding.rel)?;
        let edge_id = match edge_ids.first() {
            Some(&edge_id) => edge_id,
            None => return Ok(None),
        };

        let (from, to) = store.endpoints(edge_id)?;
        let node = store.node(far_endpoint(from, to, owner_id))?;
        Ok(Some(materializer.materialize_node(node)))
    }

    /// Make `value` the one related entity, dropping any other.
    ///
    /// Passing `None` clears the field. Writing the current value is a
    /// no-op that keeps the existing edge.
    pub fn write<S>(
        &self,
        store: &mut S,
        owner: &EntityRef,
        value: Option<&EntityRef>,
    ) -> AccessResult<()>
    where
        S: GraphStore + ?Sized,
    {
        let owner_id = require_owner_node(owner)?;

        let desired = match value {
            Some(target) => vec![require_node_target(&self.binding, owner_id, target)?],
            None => Vec::new(),
        };

        sync_node_targets(store, owner_id, &self.binding.rel, &desired)?;
        Ok(())
    }
}
