//! Graft Entity Registry
//!
//! Holds the entity type definitions that drive mapping:
//! - Field descriptors with shapes and relationship metadata
//! - Entity type definitions (node-backed and relationship-backed)
//! - A builder for assembling and validating a registry
//! - Relationship naming policies
//! - Field classification into accessor kinds

mod builder;
mod classify;
mod field;
mod naming;
mod registry;
mod types;

pub use builder::*;
pub use classify::*;
pub use field::*;
pub use naming::*;
pub use registry::*;
pub use types::*;
