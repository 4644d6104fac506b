//! Shared schema fixtures.

use graft_accessor::TargetSet;
use graft_core::{Direction, EdgeId, NodeId};
use graft_graph::MemoryGraph;
use graft_mapper::Mapper;
use graft_registry::{FieldDescriptor, Registry, RegistryBuilder, RelationshipMeta};

/// Library schema covering all four accessor kinds.
///
/// - `Book.publisher`: single-valued, edge type from the default naming
///   policy (`Book.publisher`).
/// - `Author.books`: one-to-many over outgoing `WROTE` edges.
/// - `Book.authors`: the same `WROTE` edges read from the incoming side.
/// - `Publisher.catalog`: read-only view over the reverse of
///   `Book.publisher` edges.
/// - `Member.borrowings`: relationship entities on `BORROWED` edges.
pub fn library_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .add_entity("Book")
        .field(FieldDescriptor::scalar("title"))
        .field(FieldDescriptor::entity("publisher", "Publisher"))
        .field(
            FieldDescriptor::collection("authors").relationship(
                RelationshipMeta::typed("WROTE")
                    .direction(Direction::Incoming)
                    .target("Author"),
            ),
        )
        .done()
        .unwrap();
    builder
        .add_entity("Author")
        .field(FieldDescriptor::scalar("name"))
        .field(
            FieldDescriptor::collection("books")
                .relationship(RelationshipMeta::typed("WROTE").target("Book")),
        )
        .done()
        .unwrap();
    builder
        .add_entity("Publisher")
        .field(FieldDescriptor::scalar("name"))
        .field(
            FieldDescriptor::sequence("catalog").relationship(
                RelationshipMeta::typed("Book.publisher")
                    .direction(Direction::Incoming)
                    .target("Book"),
            ),
        )
        .done()
        .unwrap();
    builder
        .add_entity("Member")
        .field(FieldDescriptor::scalar("name"))
        .field(
            FieldDescriptor::collection("borrowings")
                .relationship_entity(RelationshipMeta::typed("BORROWED").target("Borrowing")),
        )
        .done()
        .unwrap();
    builder
        .add_relationship_entity("Borrowing")
        .field(FieldDescriptor::scalar("since"))
        .field(FieldDescriptor::scalar("due"))
        .done()
        .unwrap();
    builder.build().unwrap()
}

/// A mapper over a fresh in-memory graph.
pub fn library_mapper(registry: &Registry) -> Mapper<'_, MemoryGraph> {
    Mapper::new(registry, MemoryGraph::new()).unwrap()
}

/// Node ids of a snapshot, in snapshot order.
pub fn node_ids(targets: &TargetSet) -> Vec<NodeId> {
    targets.iter().filter_map(|t| t.node_id()).collect()
}

/// Edge ids of a snapshot, in snapshot order.
pub fn edge_ids(targets: &TargetSet) -> Vec<EdgeId> {
    targets.iter().filter_map(|t| t.edge_id()).collect()
}
