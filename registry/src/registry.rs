//! The Registry - immutable entity type lookup.

use crate::EntityTypeDef;
use std::collections::HashMap;

/// The Registry provides runtime lookup of entity type definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Type definitions in registration order.
    types: Vec<EntityTypeDef>,
    /// Type index lookup by name.
    type_names: HashMap<String, usize>,
}

impl Registry {
    /// Create a registry from built definitions (use RegistryBuilder).
    pub(crate) fn new(types: Vec<EntityTypeDef>) -> Self {
        let type_names = types
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name.clone(), i))
            .collect();
        Self { types, type_names }
    }

    // ==================== Type Lookups ====================

    /// Get a type definition by name.
    pub fn get_type(&self, name: &str) -> Option<&EntityTypeDef> {
        self.type_names.get(name).map(|&i| &self.types[i])
    }

    /// Check if a type is registered.
    pub fn contains_type(&self, name: &str) -> bool {
        self.type_names.contains_key(name)
    }

    /// Check if a name refers to a registered node-backed type.
    pub fn is_node_type(&self, name: &str) -> bool {
        self.get_type(name).map(|d| d.is_node()).unwrap_or(false)
    }

    /// Check if a name refers to a registered edge-backed type.
    pub fn is_relationship_type(&self, name: &str) -> bool {
        self.get_type(name)
            .map(|d| d.is_relationship())
            .unwrap_or(false)
    }

    // ==================== Iteration ====================

    /// Get all type definitions, in registration order.
    pub fn all_types(&self) -> impl Iterator<Item = &EntityTypeDef> {
        self.types.iter()
    }

    /// Get all node-backed type definitions, in registration order.
    pub fn node_types(&self) -> impl Iterator<Item = &EntityTypeDef> {
        self.types.iter().filter(|d| d.is_node())
    }

    /// Get the number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
