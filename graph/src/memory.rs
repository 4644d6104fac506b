//! In-memory graph store implementation.

use crate::index::AdjacencyIndex;
use crate::store::GraphStore;
use graft_core::{
    Direction, Edge, EdgeId, Node, NodeId, Properties, RelationshipType, StoreError, StoreResult,
    Value,
};
use std::collections::HashMap;

/// Allocates store ids, starting from 1.
#[derive(Debug)]
struct IdAllocator {
    next_node: u64,
    next_edge: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_node: 1,
            next_edge: 1,
        }
    }

    fn alloc_node(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node);
        self.next_node += 1;
        id
    }

    fn alloc_edge(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge);
        self.next_edge += 1;
        id
    }
}

/// An indexed in-memory graph store.
///
/// The store is deliberately permissive: it accepts self-loops and duplicate
/// edges between the same endpoints. Relationship invariants (cardinality,
/// no self-reference) belong to the accessor layer above it.
#[derive(Debug)]
pub struct MemoryGraph {
    ids: IdAllocator,
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    adjacency: AdjacencyIndex,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            nodes: HashMap::new(),
            edges: HashMap::new(),
            adjacency: AdjacencyIndex::new(),
        }
    }

    // ==================== Node Operations ====================

    /// Delete a node, cascading to all edges that touch it.
    pub fn delete_node(&mut self, id: NodeId) -> StoreResult<()> {
        if !self.nodes.contains_key(&id) {
            return Err(StoreError::NodeNotFound(id));
        }

        let incident: Vec<EdgeId> = self.adjacency.edges_involving(id).collect();
        for edge_id in incident {
            self.remove_edge(edge_id)?;
        }

        self.nodes.remove(&id);
        Ok(())
    }

    /// Set a property on a node.
    pub fn set_node_property(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: Value,
    ) -> StoreResult<()> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(StoreError::NodeNotFound(id))?;
        node.set_property(name.into(), value);
        Ok(())
    }

    // ==================== Edge Operations ====================

    /// Set a property on an edge.
    pub fn set_edge_property(
        &mut self,
        id: EdgeId,
        name: impl Into<String>,
        value: Value,
    ) -> StoreResult<()> {
        let edge = self
            .edges
            .get_mut(&id)
            .ok_or(StoreError::EdgeNotFound(id))?;
        edge.set_property(name.into(), value);
        Ok(())
    }

    fn remove_edge(&mut self, id: EdgeId) -> StoreResult<Edge> {
        let edge = self.edges.remove(&id).ok_or(StoreError::EdgeNotFound(id))?;
        self.adjacency
            .remove(edge.id, &edge.type_name, edge.from, edge.to);
        Ok(edge)
    }

    // ==================== Statistics ====================

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore for MemoryGraph {
    fn create_node(&mut self, type_name: &str, properties: Properties) -> StoreResult<NodeId> {
        let id = self.ids.alloc_node();
        self.nodes.insert(id, Node::new(id, type_name, properties));
        Ok(id)
    }

    fn node(&self, id: NodeId) -> StoreResult<&Node> {
        self.nodes.get(&id).ok_or(StoreError::NodeNotFound(id))
    }

    fn edge(&self, id: EdgeId) -> StoreResult<&Edge> {
        self.edges.get(&id).ok_or(StoreError::EdgeNotFound(id))
    }

    fn find_edges(&self, owner: NodeId, rel: &RelationshipType) -> StoreResult<Vec<EdgeId>> {
        if !self.nodes.contains_key(&owner) {
            return Err(StoreError::NodeNotFound(owner));
        }

        let mut found: Vec<EdgeId> = match rel.direction() {
            Direction::Outgoing => self.adjacency.edges_from(owner, rel.name()).collect(),
            Direction::Incoming => self.adjacency.edges_to(owner, rel.name()).collect(),
        };
        found.sort();
        Ok(found)
    }

    fn create_edge(
        &mut self,
        owner: NodeId,
        element: NodeId,
        rel: &RelationshipType,
        properties: Properties,
    ) -> StoreResult<EdgeId> {
        if !self.nodes.contains_key(&owner) {
            return Err(StoreError::NodeNotFound(owner));
        }
        if !self.nodes.contains_key(&element) {
            return Err(StoreError::NodeNotFound(element));
        }

        let (from, to) = match rel.direction() {
            Direction::Outgoing => (owner, element),
            Direction::Incoming => (element, owner),
        };

        let id = self.ids.alloc_edge();
        self.adjacency.insert(id, rel.name(), from, to);
        self.edges
            .insert(id, Edge::new(id, rel.name(), from, to, properties));
        Ok(id)
    }

    fn delete_edge(&mut self, id: EdgeId) -> StoreResult<()> {
        self.remove_edge(id)?;
        Ok(())
    }

    fn endpoints(&self, id: EdgeId) -> StoreResult<(NodeId, NodeId)> {
        let edge = self.edge(id)?;
        Ok((edge.from, edge.to))
    }
}
