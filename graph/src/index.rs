//! Adjacency index for efficient edge lookups.

use graft_core::{EdgeId, NodeId};
use std::collections::{HashMap, HashSet};

/// Adjacency index: per node, incident edges grouped by relationship type
/// name and physical orientation.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// Edges where the node is the physical source.
    outbound: HashMap<NodeId, HashMap<String, HashSet<EdgeId>>>,
    /// Edges where the node is the physical target.
    inbound: HashMap<NodeId, HashMap<String, HashSet<EdgeId>>>,
    /// All edges touching a node (either endpoint).
    all: HashMap<NodeId, HashSet<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: EdgeId, type_name: &str, from: NodeId, to: NodeId) {
        self.all.entry(from).or_default().insert(edge_id);
        self.all.entry(to).or_default().insert(edge_id);

        self.outbound
            .entry(from)
            .or_default()
            .entry(type_name.to_string())
            .or_default()
            .insert(edge_id);
        self.inbound
            .entry(to)
            .or_default()
            .entry(type_name.to_string())
            .or_default()
            .insert(edge_id);
    }

    pub fn remove(&mut self, edge_id: EdgeId, type_name: &str, from: NodeId, to: NodeId) {
        for node_id in [from, to] {
            if let Some(set) = self.all.get_mut(&node_id) {
                set.remove(&edge_id);
                if set.is_empty() {
                    self.all.remove(&node_id);
                }
            }
        }

        Self::remove_typed(&mut self.outbound, from, type_name, edge_id);
        Self::remove_typed(&mut self.inbound, to, type_name, edge_id);
    }

    fn remove_typed(
        index: &mut HashMap<NodeId, HashMap<String, HashSet<EdgeId>>>,
        node_id: NodeId,
        type_name: &str,
        edge_id: EdgeId,
    ) {
        if let Some(type_map) = index.get_mut(&node_id) {
            if let Some(set) = type_map.get_mut(type_name) {
                set.remove(&edge_id);
                if set.is_empty() {
                    type_map.remove(type_name);
                }
            }
            if type_map.is_empty() {
                index.remove(&node_id);
            }
        }
    }

    /// Edges leaving a node with the given type name.
    pub fn edges_from(&self, node_id: NodeId, type_name: &str) -> impl Iterator<Item = EdgeId> + '_ {
        self.outbound
            .get(&node_id)
            .and_then(|type_map| type_map.get(type_name))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Edges arriving at a node with the given type name.
    pub fn edges_to(&self, node_id: NodeId, type_name: &str) -> impl Iterator<Item = EdgeId> + '_ {
        self.inbound
            .get(&node_id)
            .and_then(|type_map| type_map.get(type_name))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// All edges touching a node, at either endpoint.
    pub fn edges_involving(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.all
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
