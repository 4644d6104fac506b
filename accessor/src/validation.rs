//! Shared target validation helpers for accessor operations.
//!
//! Validation runs to completion before the first store mutation, so a
//! rejected write leaves the graph untouched.

use graft_core::{EntityRef, NodeId};

use crate::error::{AccessError, AccessResult};
use crate::ops::FieldBinding;

/// Require the owner to be bound to a store node.
pub fn require_owner_node(owner: &EntityRef) -> AccessResult<NodeId> {
    owner
        .node_id()
        .ok_or_else(|| AccessError::unbound_entity(owner.type_name()))
}

/// Require a desired target to be a bound node of the expected type,
/// distinct from the owner.
pub fn require_node_target(
    binding: &FieldBinding,
    owner_id: NodeId,
    target: &EntityRef,
) -> AccessResult<NodeId> {
    if target.type_name() != binding.target_type {
        return Err(AccessError::invalid_target(
            &binding.entity,
            &binding.field,
            format!(
                "expected {}, got {}",
                binding.target_type,
                target.type_name()
            ),
        ));
    }

    let target_id = match target.node_id() {
        Some(id) => id,
        None => {
            return Err(AccessError::invalid_target(
                &binding.entity,
                &binding.field,
                format!("{} is not bound to a store node", target),
            ))
        }
    };

    if target_id == owner_id {
        return Err(AccessError::circular_reference(
            &binding.entity,
            &binding.field,
        ));
    }

    Ok(target_id)
}
