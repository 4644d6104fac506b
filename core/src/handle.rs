//! Typed entity handles.
//!
//! An `EntityRef` is the in-memory face of a graph-backed entity: a type name
//! plus an optional binding to a store element. Entities exist unbound before
//! they are persisted; relationship operations on an unbound owner fail
//! rather than touch the store.

use crate::{EdgeId, EntityId, NodeId};
use std::fmt;

/// An opaque handle to a graph-backed entity.
///
/// Node-backed entities bind a `NodeId`, edge-backed entities (relationship
/// entities) bind an `EdgeId`. Membership in a target set is decided by
/// [`EntityRef::same_element`]: store identity, never in-memory identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    type_name: String,
    binding: Option<EntityId>,
}

impl EntityRef {
    /// Create a handle bound to a store node.
    pub fn node(type_name: impl Into<String>, id: NodeId) -> Self {
        Self {
            type_name: type_name.into(),
            binding: Some(EntityId::Node(id)),
        }
    }

    /// Create a handle bound to a store edge.
    pub fn edge(type_name: impl Into<String>, id: EdgeId) -> Self {
        Self {
            type_name: type_name.into(),
            binding: Some(EntityId::Edge(id)),
        }
    }

    /// Create a handle with no backing store element yet.
    pub fn unbound(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            binding: None,
        }
    }

    /// The entity type name this handle was materialized as.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The store identity this handle is bound to, if any.
    pub fn binding(&self) -> Option<EntityId> {
        self.binding
    }

    /// Returns true if this handle is bound to a store element.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// The backing node, if this handle is node-bound.
    pub fn node_id(&self) -> Option<NodeId> {
        self.binding.and_then(|id| id.as_node())
    }

    /// The backing edge, if this handle is edge-bound.
    pub fn edge_id(&self) -> Option<EdgeId> {
        self.binding.and_then(|id| id.as_edge())
    }

    /// Store-identity comparison: true when both handles are bound to the
    /// same store element. Unbound handles are never the same element as
    /// anything, including themselves.
    pub fn same_element(&self, other: &EntityRef) -> bool {
        match (self.binding, other.binding) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.binding {
            Some(id) => write!(f, "{}#{}", self.type_name, id),
            None => write!(f, "{} (unbound)", self.type_name),
        }
    }
}
