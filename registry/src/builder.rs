//! RegistryBuilder for constructing an immutable Registry.

use crate::{EntityKind, EntityTypeDef, FieldDescriptor, Registry};
use std::collections::HashMap;
use thiserror::Error;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {name}")]
    DuplicateTypeName { name: String },

    #[error("Duplicate field {field} on type {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("Unknown target type {target} for field {field} on type {type_name}")]
    UnknownTarget {
        type_name: String,
        field: String,
        target: String,
    },

    #[error("Target type {target} for field {field} on type {type_name} must be node-backed")]
    TargetNotNodeBacked {
        type_name: String,
        field: String,
        target: String,
    },

    #[error(
        "Target type {target} for field {field} on type {type_name} must be a relationship entity"
    )]
    TargetNotEdgeBacked {
        type_name: String,
        field: String,
        target: String,
    },
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Types being built, in registration order.
    types: Vec<EntityTypeDef>,
    /// Type name to index mapping.
    type_names: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node-backed entity type.
    pub fn add_entity(&mut self, name: impl Into<String>) -> EntityTypeBuilder<'_> {
        EntityTypeBuilder {
            builder: self,
            def: EntityTypeDef::new(name, EntityKind::Node),
        }
    }

    /// Add an edge-backed relationship entity type.
    pub fn add_relationship_entity(&mut self, name: impl Into<String>) -> EntityTypeBuilder<'_> {
        EntityTypeBuilder {
            builder: self,
            def: EntityTypeDef::new(name, EntityKind::Relationship),
        }
    }

    /// Build the immutable Registry.
    ///
    /// Validates that every declared target names a registered type of the
    /// right kind: node-backed for entity shapes and plain relationship
    /// metadata, edge-backed for relationship-entity metadata.
    pub fn build(self) -> RegistryResult<Registry> {
        for def in &self.types {
            for field in &def.fields {
                if field.transient {
                    continue;
                }
                if let Some(target) = field.shape.entity_target() {
                    self.check_node_target(def, field, target)?;
                }
                if let Some(target) = field.relationship.as_ref().and_then(|m| m.target.as_deref())
                {
                    self.check_node_target(def, field, target)?;
                }
                if let Some(target) = field
                    .relationship_entity
                    .as_ref()
                    .and_then(|m| m.target.as_deref())
                {
                    self.check_edge_target(def, field, target)?;
                }
            }
        }

        Ok(Registry::new(self.types))
    }

    fn lookup(&self, name: &str) -> Option<&EntityTypeDef> {
        self.type_names.get(name).map(|&i| &self.types[i])
    }

    fn check_node_target(
        &self,
        def: &EntityTypeDef,
        field: &FieldDescriptor,
        target: &str,
    ) -> RegistryResult<()> {
        match self.lookup(target) {
            None => Err(RegistryError::UnknownTarget {
                type_name: def.name.clone(),
                field: field.name.clone(),
                target: target.to_string(),
            }),
            Some(t) if !t.is_node() => Err(RegistryError::TargetNotNodeBacked {
                type_name: def.name.clone(),
                field: field.name.clone(),
                target: target.to_string(),
            }),
            Some(_) => Ok(()),
        }
    }

    fn check_edge_target(
        &self,
        def: &EntityTypeDef,
        field: &FieldDescriptor,
        target: &str,
    ) -> RegistryResult<()> {
        match self.lookup(target) {
            None => Err(RegistryError::UnknownTarget {
                type_name: def.name.clone(),
                field: field.name.clone(),
                target: target.to_string(),
            }),
            Some(t) if !t.is_relationship() => Err(RegistryError::TargetNotEdgeBacked {
                type_name: def.name.clone(),
                field: field.name.clone(),
                target: target.to_string(),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Builder for a single entity type definition.
pub struct EntityTypeBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    def: EntityTypeDef,
}

impl<'a> EntityTypeBuilder<'a> {
    /// Derive short relationship names for this type's fields.
    pub fn short_names(mut self) -> Self {
        self.def.use_short_names = true;
        self
    }

    /// Append a field descriptor.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.def.fields.push(field);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> RegistryResult<()> {
        // Check for duplicate name
        if self.builder.type_names.contains_key(&self.def.name) {
            return Err(RegistryError::DuplicateTypeName {
                name: self.def.name,
            });
        }

        // Check for duplicate fields within the type
        for (i, field) in self.def.fields.iter().enumerate() {
            if self.def.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(RegistryError::DuplicateField {
                    type_name: self.def.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        self.builder
            .type_names
            .insert(self.def.name.clone(), self.builder.types.len());
        self.builder.types.push(self.def);

        Ok(())
    }
}
