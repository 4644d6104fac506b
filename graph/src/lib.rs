//! Graft Graph Storage
//!
//! This crate provides the store seam of the relationship mapper:
//! - The `GraphStore` adapter trait (the only store surface accessors use)
//! - `MemoryGraph`, an indexed in-memory implementation
//! - Adjacency index: find a node's edges per relationship type and
//!   direction

mod index;
mod memory;
mod store;

pub use memory::MemoryGraph;
pub use store::GraphStore;
