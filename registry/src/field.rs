//! Field descriptors and per-field relationship metadata.

use graft_core::Direction;

/// Declared shape of a field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// A plain property value carried on the entity's own element.
    Scalar,
    /// A reference to a single entity of the named node-backed type.
    Entity {
        /// Target entity type name.
        target: String,
    },
    /// A mutable, unordered collection of entity references.
    Collection,
    /// A read-only, ordered sequence of entity references.
    Sequence,
}

impl FieldShape {
    /// Check whether this shape holds many referenced entities.
    pub fn is_to_many(&self) -> bool {
        matches!(self, FieldShape::Collection | FieldShape::Sequence)
    }

    /// Target type name declared by the shape, if any.
    pub fn entity_target(&self) -> Option<&str> {
        match self {
            FieldShape::Entity { target } => Some(target),
            _ => None,
        }
    }
}

/// Relationship configuration declared on a field.
///
/// Every part is optional at declaration time: a missing type name falls
/// back to the naming policy, a missing target is an unresolved placeholder
/// and never concrete.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationshipMeta {
    /// Explicit relationship type name.
    pub type_name: Option<String>,
    /// Traversal direction relative to the owning entity.
    pub direction: Direction,
    /// Explicit target entity type name.
    pub target: Option<String>,
}

impl RelationshipMeta {
    /// Create empty metadata (derived name, outgoing, no target).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metadata with an explicit relationship type name.
    pub fn typed(name: impl Into<String>) -> Self {
        Self {
            type_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the traversal direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the target entity type name.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// A single declared field on an entity type.
///
/// Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the declaring type.
    pub name: String,
    /// Declared value shape.
    pub shape: FieldShape,
    /// Metadata for a plain relationship to endpoint nodes.
    pub relationship: Option<RelationshipMeta>,
    /// Metadata for a relationship backed by an edge-backed entity type.
    pub relationship_entity: Option<RelationshipMeta>,
    /// Whether the field is excluded from mapping entirely.
    pub transient: bool,
}

impl FieldDescriptor {
    fn with_shape(name: impl Into<String>, shape: FieldShape) -> Self {
        Self {
            name: name.into(),
            shape,
            relationship: None,
            relationship_entity: None,
            transient: false,
        }
    }

    /// Declare a scalar field.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::with_shape(name, FieldShape::Scalar)
    }

    /// Declare a single-entity reference field.
    pub fn entity(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_shape(
            name,
            FieldShape::Entity {
                target: target.into(),
            },
        )
    }

    /// Declare a mutable collection field.
    pub fn collection(name: impl Into<String>) -> Self {
        Self::with_shape(name, FieldShape::Collection)
    }

    /// Declare a read-only sequence field.
    pub fn sequence(name: impl Into<String>) -> Self {
        Self::with_shape(name, FieldShape::Sequence)
    }

    /// Attach plain relationship metadata.
    pub fn relationship(mut self, meta: RelationshipMeta) -> Self {
        self.relationship = Some(meta);
        self
    }

    /// Attach relationship-entity metadata.
    pub fn relationship_entity(mut self, meta: RelationshipMeta) -> Self {
        self.relationship_entity = Some(meta);
        self
    }

    /// Exclude the field from mapping.
    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}
