//! Many-valued relationship fields.

use graft_accessor::current_node_targets;
use graft_tests::prelude::*;
use pretty_assertions::assert_eq;

mod lifecycle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_then_read_back() {
        // GIVEN
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        let b3 = mapper.create("Book", props! {}).unwrap();

        // WHEN
        mapper
            .write_many(&author, "books", &[b1.clone(), b2.clone(), b3.clone()])
            .unwrap();

        // THEN the snapshot holds all three, in store order
        let books = mapper.read_many(&author, "books").unwrap();
        assert_eq!(
            node_ids(&books),
            vec![
                b1.node_id().unwrap(),
                b2.node_id().unwrap(),
                b3.node_id().unwrap(),
            ]
        );
        assert_eq!(mapper.store().edge_count(), 3);
    }

    #[test]
    fn test_empty_field_reads_empty() {
        // GIVEN
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();

        // THEN
        assert!(mapper.read_many(&author, "books").unwrap().is_empty());
    }

    #[test]
    fn test_rewrite_touches_only_the_difference() {
        // GIVEN an author with three books on record
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        let b3 = mapper.create("Book", props! {}).unwrap();
        let b4 = mapper.create("Book", props! {}).unwrap();
        mapper
            .write_many(&author, "books", &[b1.clone(), b2.clone(), b3.clone()])
            .unwrap();

        let rel = RelationshipType::outgoing("WROTE");
        let owner = author.node_id().unwrap();
        let before = current_node_targets(mapper.store(), owner, &rel).unwrap();

        // WHEN the desired set drops b1 and adds b4
        mapper
            .write_many(&author, "books", &[b2.clone(), b3.clone(), b4.clone()])
            .unwrap();

        // THEN the edges behind b2 and b3 are the same ones as before
        let after = current_node_targets(mapper.store(), owner, &rel).unwrap();
        assert_eq!(after[&b2.node_id().unwrap()], before[&b2.node_id().unwrap()]);
        assert_eq!(after[&b3.node_id().unwrap()], before[&b3.node_id().unwrap()]);
        assert!(!after.contains_key(&b1.node_id().unwrap()));
        assert!(after.contains_key(&b4.node_id().unwrap()));
    }

    #[test]
    fn test_duplicate_handles_collapse() {
        // GIVEN
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();

        // WHEN the same book appears twice in the desired set
        mapper
            .write_many(&author, "books", &[b1.clone(), b1.clone(), b2.clone()])
            .unwrap();

        // THEN one edge per distinct target
        assert_eq!(mapper.read_many(&author, "books").unwrap().len(), 2);
        assert_eq!(mapper.store().edge_count(), 2);
    }

    #[test]
    fn test_empty_write_clears_the_field() {
        // GIVEN
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        mapper.write_many(&author, "books", &[b1]).unwrap();

        // WHEN
        mapper.write_many(&author, "books", &[]).unwrap();

        // THEN
        assert!(mapper.read_many(&author, "books").unwrap().is_empty());
        assert_eq!(mapper.store().edge_count(), 0);
    }

    #[test]
    fn test_idempotent_rewrite_is_a_noop() {
        // GIVEN
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        mapper
            .write_many(&author, "books", &[b1.clone(), b2.clone()])
            .unwrap();
        let rel = RelationshipType::outgoing("WROTE");
        let owner = author.node_id().unwrap();
        let before = current_node_targets(mapper.store(), owner, &rel).unwrap();

        // WHEN the same set is written again
        mapper.write_many(&author, "books", &[b1, b2]).unwrap();

        // THEN nothing moved
        let after = current_node_targets(mapper.store(), owner, &rel).unwrap();
        assert_eq!(before, after);
    }
}

mod duplicates {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parallel_edges_to_kept_targets_survive() {
        // GIVEN two parallel edges to b1 and one to b2, seeded directly
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        let rel = RelationshipType::outgoing("WROTE");
        let owner = author.node_id().unwrap();
        let store = mapper.store_mut();
        store
            .create_edge(owner, b1.node_id().unwrap(), &rel, props! {})
            .unwrap();
        store
            .create_edge(owner, b1.node_id().unwrap(), &rel, props! {})
            .unwrap();
        store
            .create_edge(owner, b2.node_id().unwrap(), &rel, props! {})
            .unwrap();

        // WHEN the desired set keeps b1 only
        mapper.write_many(&author, "books", &[b1.clone()]).unwrap();

        // THEN both b1 edges stay and every b2 edge is gone
        let current = current_node_targets(mapper.store(), owner, &rel).unwrap();
        assert_eq!(current[&b1.node_id().unwrap()].len(), 2);
        assert!(!current.contains_key(&b2.node_id().unwrap()));

        // AND a snapshot still lists b1 once
        assert_eq!(mapper.read_many(&author, "books").unwrap().len(), 1);
    }
}

mod snapshots {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_survives_later_store_mutation() {
        // GIVEN an author with two books and a snapshot of them
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        mapper
            .write_many(&author, "books", &[b1.clone(), b2.clone()])
            .unwrap();
        let snapshot = mapper.read_many(&author, "books").unwrap();

        // WHEN the field is rewritten and the surviving edge deleted outright
        mapper.write_many(&author, "books", &[b2.clone()]).unwrap();
        let rel = RelationshipType::outgoing("WROTE");
        let owner = author.node_id().unwrap();
        let remaining = mapper.store().find_edges(owner, &rel).unwrap();
        for edge in remaining {
            mapper.store_mut().delete_edge(edge).unwrap();
        }

        // THEN the earlier snapshot still lists both books
        assert_eq!(
            node_ids(&snapshot),
            vec![b1.node_id().unwrap(), b2.node_id().unwrap()]
        );

        // AND only a fresh read sees the empty field
        assert!(mapper.read_many(&author, "books").unwrap().is_empty());
    }
}

mod read_only {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_reflects_foreign_writes() {
        // GIVEN two books published by the same house
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let publisher = mapper.create("Publisher", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        mapper
            .write_single(&b1, "publisher", Some(&publisher))
            .unwrap();
        mapper
            .write_single(&b2, "publisher", Some(&publisher))
            .unwrap();

        // WHEN the reverse view is read
        let catalog = mapper.read_many(&publisher, "catalog").unwrap();

        // THEN it lists both books
        assert_eq!(
            node_ids(&catalog),
            vec![b1.node_id().unwrap(), b2.node_id().unwrap()]
        );
    }

    #[test]
    fn test_view_rejects_writes() {
        // GIVEN
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let publisher = mapper.create("Publisher", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        mapper
            .write_single(&b1, "publisher", Some(&publisher))
            .unwrap();

        // WHEN the view is written, even with an empty set
        let result = mapper.write_many(&publisher, "catalog", &[]);

        // THEN the write is refused and the backing edge survives
        let err = result.err().unwrap();
        assert!(matches!(
            err,
            MapperError::Access(AccessError::UnsupportedOperation { .. })
        ));
        assert!(err.to_string().contains("read-only"));
        assert_eq!(mapper.store().edge_count(), 1);
    }
}

mod isolation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shared_edges_read_from_both_sides() {
        // GIVEN an author related to two books
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        mapper
            .write_many(&author, "books", &[b1.clone(), b2.clone()])
            .unwrap();

        // THEN each book sees the author through the incoming side
        let authors = mapper.read_many(&b1, "authors").unwrap();
        assert_eq!(node_ids(&authors), vec![author.node_id().unwrap()]);

        // WHEN the incoming side is cleared for b1
        mapper.write_many(&b1, "authors", &[]).unwrap();

        // THEN only that book's edge is gone
        assert!(mapper.read_many(&b1, "authors").unwrap().is_empty());
        let books = mapper.read_many(&author, "books").unwrap();
        assert_eq!(node_ids(&books), vec![b2.node_id().unwrap()]);
    }

    #[test]
    fn test_other_edge_types_are_invisible() {
        // GIVEN a stray edge of an unrelated type from the author
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let stray = RelationshipType::outgoing("TRANSLATED");
        mapper
            .store_mut()
            .create_edge(
                author.node_id().unwrap(),
                b1.node_id().unwrap(),
                &stray,
                props! {},
            )
            .unwrap();

        // THEN the field neither reads it
        assert!(mapper.read_many(&author, "books").unwrap().is_empty());

        // NOR removes it on a write
        mapper.write_many(&author, "books", &[]).unwrap();
        assert_eq!(mapper.store().edge_count(), 1);
    }

    #[test]
    fn test_opposite_direction_is_invisible() {
        // GIVEN an edge of the right type pointing at the author
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let rel = RelationshipType::outgoing("WROTE");
        mapper
            .store_mut()
            .create_edge(
                b1.node_id().unwrap(),
                author.node_id().unwrap(),
                &rel,
                props! {},
            )
            .unwrap();

        // THEN the outgoing field does not see it
        assert!(mapper.read_many(&author, "books").unwrap().is_empty());
    }
}

mod validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bad_handle_leaves_the_graph_untouched() {
        // GIVEN an author with one book on record
        let registry = library_registry();
        let mut mapper = library_mapper(&registry);
        let author = mapper.create("Author", props! {}).unwrap();
        let b1 = mapper.create("Book", props! {}).unwrap();
        let b2 = mapper.create("Book", props! {}).unwrap();
        let member = mapper.create("Member", props! {}).unwrap();
        mapper.write_many(&author, "books", &[b1.clone()]).unwrap();

        // WHEN a desired set mixes valid and invalid handles
        let mistyped = mapper.write_many(&author, "books", &[b2.clone(), member]);
        let unbound = mapper.write_many(
            &author,
            "books",
            &[b2.clone(), EntityRef::unbound("Book")],
        );

        // THEN both writes fail before any edge moves
        assert!(matches!(
            mistyped,
            Err(MapperError::Access(AccessError::InvalidTarget { .. }))
        ));
        assert!(matches!(
            unbound,
            Err(MapperError::Access(AccessError::InvalidTarget { .. }))
        ));
        let books = mapper.read_many(&author, "books").unwrap();
        assert_eq!(node_ids(&books), vec![b1.node_id().unwrap()]);
    }

    #[test]
    fn test_self_reference_is_rejected() {
        // GIVEN a schema where a to-many field targets the owner's type
        let mut builder = RegistryBuilder::new();
        builder
            .add_entity("Person")
            .field(
                FieldDescriptor::collection("friends")
                    .relationship(RelationshipMeta::typed("KNOWS").target("Person")),
            )
            .done()
            .unwrap();
        let registry = builder.build().unwrap();
        let mut mapper = Mapper::new(&registry, MemoryGraph::new()).unwrap();
        let person = mapper.create("Person", props! {}).unwrap();
        let other = mapper.create("Person", props! {}).unwrap();

        // WHEN the owner appears in its own desired set
        let result = mapper.write_many(&person, "friends", &[other, person.clone()]);

        // THEN
        assert!(matches!(
            result,
            Err(MapperError::Access(AccessError::CircularReference { .. }))
        ));
        assert_eq!(mapper.store().edge_count(), 0);
    }
}
