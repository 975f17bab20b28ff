//! Named registry of perturbation stamps.

use indexmap::IndexMap;
use ripple_core::StampId;
use ripple_space::Stamp;

/// Insertion-ordered stamps addressed by [`StampId`].
///
/// Ids are dense positions in insertion order. Re-inserting a name
/// replaces its stamp and keeps its id.
#[derive(Clone, Debug, Default)]
pub struct StampLibrary {
    stamps: IndexMap<String, Stamp>,
}

impl StampLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `stamp` under `name` and return its id.
    pub fn insert(&mut self, name: impl Into<String>, stamp: Stamp) -> StampId {
        let (index, _) = self.stamps.insert_full(name.into(), stamp);
        StampId(index as u32)
    }

    /// The stamp with this id.
    pub fn get(&self, id: StampId) -> Option<&Stamp> {
        self.stamps.get_index(id.0 as usize).map(|(_, stamp)| stamp)
    }

    /// Look up an id by name.
    pub fn id_of(&self, name: &str) -> Option<StampId> {
        self.stamps
            .get_index_of(name)
            .map(|index| StampId(index as u32))
    }

    /// The name registered for this id.
    pub fn name_of(&self, id: StampId) -> Option<&str> {
        self.stamps
            .get_index(id.0 as usize)
            .map(|(name, _)| name.as_str())
    }

    /// Whether `id` names a registered stamp.
    pub fn contains(&self, id: StampId) -> bool {
        (id.0 as usize) < self.stamps.len()
    }

    /// Number of registered stamps.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// All stamps in id order.
    pub fn iter(&self) -> impl Iterator<Item = (StampId, &str, &Stamp)> {
        self.stamps
            .iter()
            .enumerate()
            .map(|(index, (name, stamp))| (StampId(index as u32), name.as_str(), stamp))
    }
}
