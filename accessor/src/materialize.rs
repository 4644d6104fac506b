//! Turning store elements back into typed entity handles.

use graft_core::{Edge, EntityRef, Node};

/// Turns raw store elements into typed entity handles.
///
/// Invoked by read paths once the store has produced an element. The seam
/// exists so callers can substitute richer entity construction; the
/// accessors themselves only ever need the returned handle.
pub trait Materialize {
    /// Handle for a node, typed as the node's own stored type.
    fn materialize_node(&self, node: &Node) -> EntityRef;

    /// Handle for an edge-backed relationship entity, typed as
    /// `entity_type`.
    ///
    /// The expected type is passed in because edge records carry the
    /// relationship type name, not the entity type name.
    fn materialize_edge(&self, edge: &Edge, entity_type: &str) -> EntityRef;
}

/// Default materializer: handles carry the store identity and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreMaterializer;

impl Materialize for StoreMaterializer {
    fn materialize_node(&self, node: &Node) -> EntityRef {
        EntityRef::node(&node.type_name, node.id)
    }

    fn materialize_edge(&self, edge: &Edge, entity_type: &str) -> EntityRef {
        EntityRef::edge(entity_type, edge.id)
    }
}
