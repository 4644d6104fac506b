//! The graph store adapter trait.

use graft_core::{Edge, EdgeId, Node, NodeId, Properties, RelationshipType, StoreResult};

/// The store surface the relationship-mapping layer is written against.
///
/// The edge-synchronization algorithm calls only the four edge primitives
/// (`find_edges`, `create_edge`, `delete_edge`, `endpoints`); the element
/// methods serve materializing reads and entity creation. Each call is
/// atomic on its own; nothing at this layer groups calls into a
/// transaction.
pub trait GraphStore {
    /// Create a node of the given entity type.
    fn create_node(&mut self, type_name: &str, properties: Properties) -> StoreResult<NodeId>;

    /// Look up a node record.
    fn node(&self, id: NodeId) -> StoreResult<&Node>;

    /// Look up an edge record.
    fn edge(&self, id: EdgeId) -> StoreResult<&Edge>;

    /// All edges incident to `owner` that carry the relationship's type name
    /// in the relationship's direction, in ascending id order.
    fn find_edges(&self, owner: NodeId, rel: &RelationshipType) -> StoreResult<Vec<EdgeId>>;

    /// Create an edge between `owner` and `element` for the given
    /// relationship. The physical orientation follows the relationship's
    /// direction: an outgoing relationship stores `owner -> element`, an
    /// incoming one stores `element -> owner`.
    fn create_edge(
        &mut self,
        owner: NodeId,
        element: NodeId,
        rel: &RelationshipType,
        properties: Properties,
    ) -> StoreResult<EdgeId>;

    /// Delete an edge, dropping its properties with it.
    fn delete_edge(&mut self, id: EdgeId) -> StoreResult<()>;

    /// The physical `(from, to)` endpoints of an edge.
    fn endpoints(&self, id: EdgeId) -> StoreResult<(NodeId, NodeId)>;
}
