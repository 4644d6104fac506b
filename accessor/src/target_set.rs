//! Deduplicated snapshots of related entities.

use graft_core::{EntityId, EntityRef};

/// The set of entities related through one field.
///
/// Holds owned handles deduplicated by store identity and iterated in
/// ascending store id order. Always an independent snapshot: mutating the
/// graph after a read leaves previously returned sets unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    targets: Vec<EntityRef>,
}

impl TargetSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from handles, collapsing duplicates by store identity.
    ///
    /// Unbound handles carry no identity and are kept as given; bound
    /// handles sort ascending by store id.
    pub fn from_handles<I>(handles: I) -> Self
    where
        I: IntoIterator<Item = EntityRef>,
    {
        let mut targets: Vec<EntityRef> = handles.into_iter().collect();
        targets.sort_by_key(Self::sort_key);
        targets.dedup_by(|a, b| a.same_element(b));
        Self { targets }
    }

    fn sort_key(handle: &EntityRef) -> (bool, Option<EntityId>) {
        (handle.binding().is_none(), handle.binding())
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Check membership by store identity.
    pub fn contains(&self, handle: &EntityRef) -> bool {
        self.targets.iter().any(|t| t.same_element(handle))
    }

    /// Iterate the targets in ascending store id order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        self.targets.iter()
    }

    /// View the targets as a slice.
    pub fn as_slice(&self) -> &[EntityRef] {
        &self.targets
    }

    /// Consume the set into its handles.
    pub fn into_vec(self) -> Vec<EntityRef> {
        self.targets
    }
}

impl FromIterator<EntityRef> for TargetSet {
    fn from_iter<I: IntoIterator<Item = EntityRef>>(iter: I) -> Self {
        Self::from_handles(iter)
    }
}

impl IntoIterator for TargetSet {
    type Item = EntityRef;
    type IntoIter = std::vec::IntoIter<EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a EntityRef;
    type IntoIter = std::slice::Iter<'a, EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
