//! Graft Core Types
//!
//! This crate provides the foundational types used throughout the graft
//! workspace:
//! - Identity types (NodeId, EdgeId, EntityId)
//! - Value types (the Value enum and Properties maps)
//! - Store records (Node, Edge)
//! - Relationship identity (Direction, RelationshipType)
//! - Entity handles (EntityRef)
//! - Common error types

mod entity;
mod error;
mod handle;
mod id;
mod relationship;
mod value;

pub use entity::*;
pub use error::*;
pub use handle::*;
pub use id::*;
pub use relationship::*;
pub use value::*;
