//! Entity type definitions.

use crate::FieldDescriptor;

/// What kind of graph element instances of a type map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    /// Instances map to nodes.
    #[default]
    Node,
    /// Instances map to edges between two nodes.
    Relationship,
}

/// Entity type definition.
#[derive(Debug, Clone)]
pub struct EntityTypeDef {
    /// Type name.
    pub name: String,
    /// Whether instances are node-backed or edge-backed.
    pub kind: EntityKind,
    /// Whether derived relationship names drop the declaring type prefix.
    pub use_short_names: bool,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl EntityTypeDef {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            use_short_names: false,
            fields: Vec::new(),
        }
    }

    /// Check if instances of this type map to nodes.
    pub fn is_node(&self) -> bool {
        self.kind == EntityKind::Node
    }

    /// Check if instances of this type map to edges.
    pub fn is_relationship(&self) -> bool {
        self.kind == EntityKind::Relationship
    }

    /// Get a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this type declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}
