//! Relationship identity: type name plus direction.

use std::fmt;

/// Orientation of an edge relative to the owning entity's node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The owner is the physical source of the edge.
    #[default]
    Outgoing,
    /// The owner is the physical target of the edge.
    Incoming,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outgoing => write!(f, "outgoing"),
            Direction::Incoming => write!(f, "incoming"),
        }
    }
}

/// Identifies the edges that belong to one field: an opaque type name plus
/// the direction in which the owning entity sees them.
///
/// Edges of another name, or of this name in the opposite direction, are
/// invisible to the field that holds this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipType {
    name: String,
    direction: Direction,
}

impl RelationshipType {
    /// Create a relationship type with an explicit direction.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    /// Create an outgoing relationship type.
    pub fn outgoing(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Outgoing)
    }

    /// Create an incoming relationship type.
    pub fn incoming(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Incoming)
    }

    /// The opaque type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direction relative to the owning entity.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.direction)
    }
}
