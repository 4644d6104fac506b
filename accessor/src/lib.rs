//! Graft Relationship Accessors
//!
//! Synchronize relationship fields with graph edges.
//!
//! Responsibilities:
//! - Resolve field descriptors into per-field accessors
//! - Read current target sets as fresh snapshots
//! - Apply desired target sets as minimal edge diffs
//! - Validate every handle before the first store mutation
//!
//! # Module Structure
//!
//! - `mapping` - Per-type resolution from descriptors to accessors
//! - `ops/` - The four accessor variants (single, to-many, read-only, with-attributes)
//! - `sync` - Shared edge diff algorithm
//! - `target_set` - Deduplicated target snapshots
//! - `materialize` - Turning store elements back into entity handles
//! - `validation` - Shared target validation helpers
//! - `error` - Error types for accessor failures

mod error;
mod mapping;
mod materialize;
mod ops;
mod sync;
mod target_set;
mod validation;

pub use error::{AccessError, AccessResult};
pub use mapping::EntityMapping;
pub use materialize::{Materialize, StoreMaterializer};
pub use ops::{
    FieldAccessor, FieldBinding, OneToManyAccessor, ReadOnlyAccessor, SingleAccessor,
    WithAttributesAccessor,
};
pub use sync::{current_node_targets, sync_node_targets, SyncReport};
pub use target_set::TargetSet;
