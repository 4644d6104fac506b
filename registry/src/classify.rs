//! Field classification into accessor kinds.
//!
//! Classification is a pure function of the field descriptor: exactly one
//! accessor kind applies to a non-transient relationship field, and a field
//! matching zero or several kinds is rejected rather than guessed at.

use crate::{EntityTypeDef, FieldDescriptor, FieldShape, RelationshipMeta, RelationshipNaming};
use graft_core::Direction;
use thiserror::Error;

/// The accessor strategy resolved for a relationship field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// At most one related entity, reached through at most one edge.
    SingleRelationship,
    /// A mutable set of related entities.
    OneToManyRelationship,
    /// A set of related entities populated from the graph, never written.
    ReadOnlyOneToManyRelationship,
    /// A set of edge-backed relationship entities carrying properties.
    OneToManyRelationshipWithAttributes,
}

/// A field that cannot be mapped to exactly one accessor kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot classify field {field} on type {entity}: {detail}")]
pub struct ClassificationError {
    /// Declaring entity type name.
    pub entity: String,
    /// Field name.
    pub field: String,
    /// What disqualified the field.
    pub detail: String,
}

impl ClassificationError {
    fn new(def: &EntityTypeDef, field: &FieldDescriptor, detail: &str) -> Self {
        Self {
            entity: def.name.clone(),
            field: field.name.clone(),
            detail: detail.to_string(),
        }
    }
}

/// A relationship field with its metadata fully resolved.
///
/// Missing pieces have been filled in from the naming policy and the field
/// shape, so consumers never re-derive anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelationship {
    /// The accessor kind the field maps to.
    pub kind: AccessorKind,
    /// Relationship type name backing the field's edges.
    pub type_name: String,
    /// Traversal direction relative to the owning entity.
    pub direction: Direction,
    /// Expected target entity type name.
    pub target_type: String,
}

/// Resolve a field into a relationship mapping.
///
/// Returns `Ok(None)` for transient fields, `Ok(Some(resolved))` when
/// exactly one accessor kind applies, and an error when none or several do.
///
/// The decision rules, in terms of the descriptor alone:
/// - `Entity { .. }` shape is a single relationship. An explicit type name
///   wins over the naming policy, the direction is carried by the metadata
///   record, and the target is always the shape's target.
/// - `Collection` shape with concrete relationship metadata is one-to-many.
/// - `Sequence` shape with concrete relationship metadata is read-only
///   one-to-many.
/// - Either to-many shape with concrete relationship-entity metadata is
///   one-to-many with attributes.
pub fn resolve_relationship(
    def: &EntityTypeDef,
    field: &FieldDescriptor,
    naming: &dyn RelationshipNaming,
) -> Result<Option<ResolvedRelationship>, ClassificationError> {
    if field.transient {
        return Ok(None);
    }

    let mut candidates = Vec::new();

    if let FieldShape::Entity { target } = &field.shape {
        let meta = field.relationship.clone().unwrap_or_default();
        let type_name = match meta.type_name {
            Some(name) => name,
            None => naming.relationship_type_name(&def.name, &field.name, def.use_short_names),
        };
        candidates.push(ResolvedRelationship {
            kind: AccessorKind::SingleRelationship,
            type_name,
            direction: meta.direction,
            target_type: target.clone(),
        });
    }

    if field.shape.is_to_many() {
        if let Some(RelationshipMeta {
            type_name: Some(type_name),
            direction,
            target: Some(target),
        }) = field.relationship.clone()
        {
            let kind = match field.shape {
                FieldShape::Collection => AccessorKind::OneToManyRelationship,
                _ => AccessorKind::ReadOnlyOneToManyRelationship,
            };
            candidates.push(ResolvedRelationship {
                kind,
                type_name,
                direction,
                target_type: target,
            });
        }
        if let Some(RelationshipMeta {
            type_name: Some(type_name),
            direction,
            target: Some(target),
        }) = field.relationship_entity.clone()
        {
            candidates.push(ResolvedRelationship {
                kind: AccessorKind::OneToManyRelationshipWithAttributes,
                type_name,
                direction,
                target_type: target,
            });
        }
    }

    match candidates.len() {
        0 => Err(ClassificationError::new(
            def,
            field,
            "not a relationship field",
        )),
        1 => Ok(candidates.pop()),
        _ => Err(ClassificationError::new(
            def,
            field,
            "ambiguous relationship metadata",
        )),
    }
}

/// Resolve the accessor kind for a field.
///
/// Returns `Ok(None)` for transient fields, `Ok(Some(kind))` when exactly
/// one kind applies, and an error when none or several do. The kind never
/// depends on the naming policy.
pub fn classify(
    def: &EntityTypeDef,
    field: &FieldDescriptor,
) -> Result<Option<AccessorKind>, ClassificationError> {
    use crate::DefaultNaming;
    Ok(resolve_relationship(def, field, &DefaultNaming)?.map(|r| r.kind))
}

/// Check whether a field maps to a relationship accessor.
pub fn is_relationship_field(def: &EntityTypeDef, field: &FieldDescriptor) -> bool {
    matches!(classify(def, field), Ok(Some(_)))
}
