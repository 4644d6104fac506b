//! Store records for graft.
//!
//! Nodes and edges are the two element kinds a graph store holds. Both carry
//! a type name assigned at creation (an entity type name for nodes, a
//! relationship type name for edges) and an opaque property map.

use crate::{EdgeId, NodeId, Properties, Value};

/// A node in the graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Entity type name assigned at creation.
    pub type_name: String,
    /// Property values.
    pub properties: Properties,
}

impl Node {
    /// Create a new node record.
    pub fn new(id: NodeId, type_name: impl Into<String>, properties: Properties) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            properties,
        }
    }

    /// Get a property value by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a property value.
    pub fn set_property(&mut self, name: String, value: Value) {
        self.properties.insert(name, value);
    }

    /// Remove a property.
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }
}

/// An edge in the graph.
///
/// Edges are binary and directed at the physical level: `from` and `to` are
/// the stored endpoints. Which endpoint a field considers "far" is decided by
/// the field's declared direction, not by the record.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Relationship type name assigned at creation.
    pub type_name: String,
    /// Physical source endpoint.
    pub from: NodeId,
    /// Physical target endpoint.
    pub to: NodeId,
    /// Property values.
    pub properties: Properties,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(
        id: EdgeId,
        type_name: impl Into<String>,
        from: NodeId,
        to: NodeId,
        properties: Properties,
    ) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            from,
            to,
            properties,
        }
    }

    /// Get a property value by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a property value.
    pub fn set_property(&mut self, name: String, value: Value) {
        self.properties.insert(name, value);
    }

    /// Remove a property.
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }
}
