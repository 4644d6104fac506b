//! Randomized write sequences checked against reference models.
//!
//! Every round rewrites a field to a random desired state, then compares
//! the store against a model kept entirely outside the mapper. Seeds are
//! fixed so failures replay.

use std::collections::BTreeMap;

use graft_accessor::current_node_targets;
use graft_tests::prelude::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

#[test]
fn test_random_set_rewrites_match_the_model() {
    // GIVEN an author, a shelf of books and an empty model
    let registry = library_registry();
    let mut mapper = library_mapper(&registry);
    let author = mapper.create("Author", props! {}).unwrap();
    let books: Vec<EntityRef> = (0..8)
        .map(|_| mapper.create("Book", props! {}).unwrap())
        .collect();
    let rel = RelationshipType::outgoing("WROTE");
    let owner = author.node_id().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mut model: BTreeMap<NodeId, EdgeId> = BTreeMap::new();

    for _ in 0..ROUNDS {
        // WHEN a random subset is written
        let desired: Vec<EntityRef> = books
            .iter()
            .filter(|_| rng.gen_bool(0.5))
            .cloned()
            .collect();
        mapper.write_many(&author, "books", &desired).unwrap();

        // THEN exactly the desired endpoints are related, one edge each,
        // and endpoints kept across rounds ride their old edge
        let current = current_node_targets(mapper.store(), owner, &rel).unwrap();
        let mut next = BTreeMap::new();
        for id in desired.iter().filter_map(|b| b.node_id()) {
            let edges = &current[&id];
            assert_eq!(edges.len(), 1);
            if let Some(previous) = model.get(&id) {
                assert_eq!(edges[0], *previous);
            }
            next.insert(id, edges[0]);
        }
        assert_eq!(current.len(), next.len());
        model = next;

        // AND a fresh snapshot agrees with the model
        let snapshot = mapper.read_many(&author, "books").unwrap();
        let expected: Vec<NodeId> = model.keys().copied().collect();
        assert_eq!(node_ids(&snapshot), expected);
    }
}

#[test]
fn test_random_single_writes_match_the_model() {
    // GIVEN a book and a handful of publishers
    let registry = library_registry();
    let mut mapper = library_mapper(&registry);
    let book = mapper.create("Book", props! {}).unwrap();
    let publishers: Vec<EntityRef> = (0..3)
        .map(|_| mapper.create("Publisher", props! {}).unwrap())
        .collect();
    let mut rng = StdRng::seed_from_u64(7);
    let mut model: Option<NodeId> = None;

    for _ in 0..ROUNDS {
        // WHEN the field is randomly set or cleared
        let pick = rng.gen_range(0..=publishers.len());
        let value = publishers.get(pick);
        mapper.write_single(&book, "publisher", value).unwrap();
        model = value.and_then(|p| p.node_id());

        // THEN the read agrees and never more than one edge backs it
        let read = mapper.read_single(&book, "publisher").unwrap();
        assert_eq!(read.and_then(|v| v.node_id()), model);
        let backing = model.map(|_| 1).unwrap_or(0);
        assert_eq!(mapper.store().edge_count(), backing);
    }
}

#[test]
fn test_random_borrowing_churn_matches_the_model() {
    // GIVEN a member, some books and no borrowings yet
    let registry = library_registry();
    let mut mapper = library_mapper(&registry);
    let member = mapper.create("Member", props! {}).unwrap();
    let books: Vec<EntityRef> = (0..4)
        .map(|_| mapper.create("Book", props! {}).unwrap())
        .collect();
    let mut rng = StdRng::seed_from_u64(4242);
    let mut model: Vec<EntityRef> = Vec::new();

    for _ in 0..ROUNDS {
        if model.is_empty() || rng.gen_bool(0.6) {
            // WHEN a random book is borrowed
            let book = &books[rng.gen_range(0..books.len())];
            let borrowing = mapper
                .relate(&member, "borrowings", book, props! {})
                .unwrap();
            model.push(borrowing);
        } else {
            // WHEN a random subset of borrowings is returned
            let keep: Vec<EntityRef> = model
                .iter()
                .filter(|_| rng.gen_bool(0.5))
                .cloned()
                .collect();
            mapper.write_many(&member, "borrowings", &keep).unwrap();
            model = keep;
        }

        // THEN the field mirrors the surviving borrowings
        let snapshot = mapper.read_many(&member, "borrowings").unwrap();
        let mut expected: Vec<EdgeId> = model.iter().filter_map(|h| h.edge_id()).collect();
        expected.sort();
        assert_eq!(edge_ids(&snapshot), expected);
    }
}
