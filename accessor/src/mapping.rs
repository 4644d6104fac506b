//! Per-type resolution of field descriptors into accessors.

use graft_core::RelationshipType;
use graft_registry::{
    resolve_relationship, AccessorKind, ClassificationError, EntityTypeDef, FieldShape,
    RelationshipNaming,
};
use std::collections::HashMap;

use crate::ops::{
    FieldAccessor, FieldBinding, OneToManyAccessor, ReadOnlyAccessor, SingleAccessor,
    WithAttributesAccessor,
};

/// Resolved accessors for every relationship field of one entity type.
///
/// Resolution happens once per type; the result is immutable and shared by
/// all subsequent field operations.
#[derive(Debug, Clone)]
pub struct EntityMapping {
    /// Declaring entity type name.
    type_name: String,
    /// Accessors keyed by field name.
    accessors: HashMap<String, FieldAccessor>,
}

impl EntityMapping {
    /// Resolve all relationship fields of a type.
    ///
    /// Scalar and transient fields are passed over; a misdeclared
    /// relationship field fails resolution with its classification error.
    pub fn resolve(
        def: &EntityTypeDef,
        naming: &dyn RelationshipNaming,
    ) -> Result<Self, ClassificationError> {
        let mut accessors = HashMap::new();

        for field in &def.fields {
            if field.transient || matches!(field.shape, FieldShape::Scalar) {
                continue;
            }
            let resolved = match resolve_relationship(def, field, naming)? {
                Some(resolved) => resolved,
                None => continue,
            };

            let binding = FieldBinding::new(
                &def.name,
                &field.name,
                RelationshipType::new(resolved.type_name, resolved.direction),
                resolved.target_type,
            );
            let accessor = match resolved.kind {
                AccessorKind::SingleRelationship => {
                    FieldAccessor::Single(SingleAccessor::new(binding))
                }
                AccessorKind::OneToManyRelationship => {
                    FieldAccessor::OneToMany(OneToManyAccessor::new(binding))
                }
                AccessorKind::ReadOnlyOneToManyRelationship => {
                    FieldAccessor::ReadOnly(ReadOnlyAccessor::new(binding))
                }
                AccessorKind::OneToManyRelationshipWithAttributes => {
                    FieldAccessor::WithAttributes(WithAttributesAccessor::new(binding))
                }
            };
            accessors.insert(field.name.clone(), accessor);
        }

        Ok(Self {
            type_name: def.name.clone(),
            accessors,
        })
    }

    /// Declaring entity type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get the accessor for a field.
    pub fn accessor(&self, field: &str) -> Option<&FieldAccessor> {
        self.accessors.get(field)
    }

    /// Check whether a field resolved to a relationship accessor.
    pub fn has_accessor(&self, field: &str) -> bool {
        self.accessors.contains_key(field)
    }

    /// Number of resolved relationship fields.
    pub fn accessor_count(&self) -> usize {
        self.accessors.len()
    }
}
