//! Graft Mapper
//!
//! Entity-level façade over a registry and a graph store.
//!
//! Responsibilities:
//! - Resolve relationship accessors for every node-backed type up front
//! - Create store nodes for registered entity types
//! - Route field reads and writes to the resolved accessors
//! - Create relationship entities as property-carrying edges
//! - Surface classification, access and store errors unchanged

mod error;
mod mapper;

pub use error::{MapperError, MapperResult};
pub use mapper::Mapper;
