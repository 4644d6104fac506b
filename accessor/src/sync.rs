//! Shared edge synchronization.
//!
//! Every writable accessor funnels through the same diff: read the current
//! far-endpoint map, delete the edges of endpoints that are no longer
//! desired, create one edge per newly desired endpoint, and leave the
//! intersection untouched. Unchanged endpoints keep their edge identity.

use graft_core::{EdgeId, NodeId, Properties, RelationshipType};
use graft_graph::GraphStore;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::AccessResult;

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Edges created, one per newly desired endpoint, ascending by endpoint.
    pub created: Vec<EdgeId>,
    /// Edges removed, covering every no-longer-desired endpoint.
    pub removed: Vec<EdgeId>,
}

impl SyncReport {
    /// Check whether the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.removed.is_empty()
    }
}

/// Far endpoint of an edge relative to one of its endpoints.
pub(crate) fn far_endpoint(from: NodeId, to: NodeId, near: NodeId) -> NodeId {
    if from == near {
        to
    } else {
        from
    }
}

/// Map every far endpoint reachable through matching edges to the edges
/// reaching it.
///
/// Endpoints iterate in ascending node id order; the edges per endpoint
/// keep the store's ascending edge id order.
pub fn current_node_targets<S>(
    store: &S,
    owner: NodeId,
    rel: &RelationshipType,
) -> AccessResult<BTreeMap<NodeId, Vec<EdgeId>>>
where
    S: GraphStore + ?Sized,
{
    let mut current: BTreeMap<NodeId, Vec<EdgeId>> = BTreeMap::new();
    for edge_id in store.find_edges(owner, rel)? {
        let (from, to) = store.endpoints(edge_id)?;
        current
            .entry(far_endpoint(from, to, owner))
            .or_default()
            .push(edge_id);
    }
    Ok(current)
}

/// Make `desired` the exact set of far endpoints related to `owner`.
///
/// Two phases, in order:
/// 1. Remove-missing: every current endpoint absent from `desired` loses
///    all its matching edges, duplicates included.
/// 2. Create-new: every desired endpoint with no current matching edge
///    gains exactly one. Endpoints that already have an edge are left
///    alone, so duplicate edges to a still-desired endpoint survive and
///    an unchanged set is a no-op.
///
/// Duplicate node ids in `desired` collapse. The caller validates the
/// endpoints first; a store failure mid-sequence leaves the earlier edge
/// operations applied.
pub fn sync_node_targets<S>(
    store: &mut S,
    owner: NodeId,
    rel: &RelationshipType,
    desired: &[NodeId],
) -> AccessResult<SyncReport>
where
    S: GraphStore + ?Sized,
{
    let current = current_node_targets(store, owner, rel)?;
    let desired: BTreeSet<NodeId> = desired.iter().copied().collect();

    let mut report = SyncReport::default();

    for (endpoint, edge_ids) in &current {
        if desired.contains(endpoint) {
            continue;
        }
        for &edge_id in edge_ids {
            store.delete_edge(edge_id)?;
            report.removed.push(edge_id);
        }
    }

    for &endpoint in &desired {
        if current.contains_key(&endpoint) {
            continue;
        }
        let edge_id = store.create_edge(owner, endpoint, rel, Properties::new())?;
        report.created.push(edge_id);
    }

    Ok(report)
}
