//! The four relationship accessor variants.
//!
//! Each variant owns the same resolved field identity and differs only in
//! its read/write behavior. Accessors hold no graph state; every call
//! reads the store fresh.

mod read_only;
mod single;
mod to_many;
mod with_attributes;

pub use read_only::ReadOnlyAccessor;
pub use single::SingleAccessor;
pub use to_many::OneToManyAccessor;
pub use with_attributes::WithAttributesAccessor;

use graft_core::{EntityRef, RelationshipType};
use graft_graph::GraphStore;
use graft_registry::AccessorKind;

use crate::error::{AccessError, AccessResult};
use crate::materialize::Materialize;
use crate::sync::current_node_targets;
use crate::target_set::TargetSet;
use crate::validation::require_owner_node;

/// Resolved identity of one relationship field.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    /// Declaring entity type name.
    pub entity: String,
    /// Field name.
    pub field: String,
    /// Relationship type and direction backing the field's edges.
    pub rel: RelationshipType,
    /// Expected target entity type name.
    pub target_type: String,
}

impl FieldBinding {
    pub fn new(
        entity: impl Into<String>,
        field: impl Into<String>,
        rel: RelationshipType,
        target_type: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            field: field.into(),
            rel,
            target_type: target_type.into(),
        }
    }
}

/// Snapshot the node endpoints currently related through a binding.
pub(crate) fn snapshot_node_targets<S, M>(
    store: &S,
    materializer: &M,
    binding: &FieldBinding,
    owner: &EntityRef,
) -> AccessResult<TargetSet>
where
    S: GraphStore + ?Sized,
    M: Materialize + ?Sized,
{
    let owner_id = require_owner_node(owner)?;
    let current = current_node_targets(store, owner_id, &binding.rel)?;
    let mut targets = Vec::with_capacity(current.len());
    for endpoint in current.keys() {
        let node = store.node(*endpoint)?;
        targets.push(materializer.materialize_node(node));
    }
    Ok(TargetSet::from_handles(targets))
}

/// A resolved accessor for one relationship field.
#[derive(Debug, Clone)]
pub enum FieldAccessor {
    Single(SingleAccessor),
    OneToMany(OneToManyAccessor),
    ReadOnly(ReadOnlyAccessor),
    WithAttributes(WithAttributesAccessor),
}

impl FieldAccessor {
    /// The accessor kind this field resolved to.
    pub fn kind(&self) -> AccessorKind {
        match self {
            FieldAccessor::Single(_) => AccessorKind::SingleRelationship,
            FieldAccessor::OneToMany(_) => AccessorKind::OneToManyRelationship,
            FieldAccessor::ReadOnly(_) => AccessorKind::ReadOnlyOneToManyRelationship,
            FieldAccessor::WithAttributes(_) => AccessorKind::OneToManyRelationshipWithAttributes,
        }
    }

    /// The resolved field identity.
    pub fn binding(&self) -> &FieldBinding {
        match self {
            FieldAccessor::Single(a) => a.binding(),
            FieldAccessor::OneToMany(a) => a.binding(),
            FieldAccessor::ReadOnly(a) => a.binding(),
            FieldAccessor::WithAttributes(a) => a.binding(),
        }
    }

    /// Read a single-valued field.
    pub fn read_single<S, M>(
        &self,
        store: &S,
        materializer: &M,
        owner: &EntityRef,
    ) -> AccessResult<Option<EntityRef>>
    where
        S: GraphStore + ?Sized,
        M: Materialize + ?Sized,
    {
        match self {
            FieldAccessor::Single(a) => a.read(store, materializer, owner),
            _ => Err(self.wrong_cardinality("single-valued read on a many-valued field")),
        }
    }

    /// Read a many-valued field.
    pub fn read_many<S, M>(
        &self,
        store: &S,
        materializer: &M,
        owner: &EntityRef,
    ) -> AccessResult<TargetSet>
    where
        S: GraphStore + ?Sized,
        M: Materialize + ?Sized,
    {
        match self {
            FieldAccessor::Single(_) => {
                Err(self.wrong_cardinality("many-valued read on a single-valued field"))
            }
            FieldAccessor::OneToMany(a) => a.read(store, materializer, owner),
            FieldAccessor::ReadOnly(a) => a.read(store, materializer, owner),
            FieldAccessor::WithAttributes(a) => a.read(store, materializer, owner),
        }
    }

    /// Write a single-valued field.
    pub fn write_single<S>(
        &self,
        store: &mut S,
        owner: &EntityRef,
        value: Option<&EntityRef>,
    ) -> AccessResult<()>
    where
        S: GraphStore + ?Sized,
    {
        match self {
            FieldAccessor::Single(a) => a.write(store, owner, value),
            _ => Err(self.wrong_cardinality("single-valued write on a many-valued field")),
        }
    }

    /// Write a many-valued field.
    pub fn write_many<S>(
        &self,
        store: &mut S,
        owner: &EntityRef,
        desired: &[EntityRef],
    ) -> AccessResult<()>
    where
        S: GraphStore + ?Sized,
    {
        match self {
            FieldAccessor::Single(_) => {
                Err(self.wrong_cardinality("many-valued write on a single-valued field"))
            }
            FieldAccessor::OneToMany(a) => a.write(store, owner, desired),
            FieldAccessor::ReadOnly(a) => a.write(store, owner, desired),
            FieldAccessor::WithAttributes(a) => a.write(store, owner, desired),
        }
    }

    fn wrong_cardinality(&self, detail: &str) -> AccessError {
        let binding = self.binding();
        AccessError::unsupported_operation(&binding.entity, &binding.field, detail)
    }
}
