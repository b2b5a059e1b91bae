//! Cumulative drag offsets keyed by child identity.
//!
//! The store is what lets drag state survive re-layout: the layout engine
//! resets every child to its natural position, then the container replays
//! each stored offset on top.
//!
//! # Invariants
//!
//! 1. An entry exists only after at least one non-zero accumulation, or
//!    when restored from a snapshot that carried it.
//! 2. A stored offset equals the sum of every delta accumulated for that
//!    child; nothing decays and nothing is clamped here.
//! 3. Entries are removed only explicitly (`remove`, `retain`, `clear`),
//!    which the container does when a child leaves it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::child::ChildId;

/// A cumulative pixel translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new offset.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    fn add(&mut self, dx: i32, dy: i32) {
        self.dx = self.dx.saturating_add(dx);
        self.dy = self.dy.saturating_add(dy);
    }
}

/// Mapping from child identity to cumulative drag offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetStore {
    entries: FxHashMap<ChildId, Offset>,
}

impl OffsetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset recorded for `child`, if it was ever dragged.
    #[must_use]
    pub fn get(&self, child: ChildId) -> Option<Offset> {
        self.entries.get(&child).copied()
    }

    /// Add `(dx, dy)` to the entry for `child`, creating a zero entry first
    /// if absent. A zero delta never creates an entry.
    pub fn accumulate(&mut self, child: ChildId, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        self.entries.entry(child).or_default().add(dx, dy);
    }

    /// Visit every entry. Iteration order is unspecified.
    pub fn for_each(&self, mut f: impl FnMut(ChildId, Offset)) {
        for (&child, &offset) in &self.entries {
            f(child, offset);
        }
    }

    /// Iterate over every entry. Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (ChildId, Offset)> + '_ {
        self.entries.iter().map(|(&child, &offset)| (child, offset))
    }

    /// Drop the entry for `child`, returning it.
    pub fn remove(&mut self, child: ChildId) -> Option<Offset> {
        self.entries.remove(&child)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(ChildId) -> bool) {
        self.entries.retain(|&child, _| keep(child));
    }

    /// Number of children with a recorded offset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no child has a recorded offset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Deterministic snapshot, sorted by child id.
    #[must_use]
    pub fn snapshot(&self) -> OffsetSnapshot {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(child, _)| *child);
        OffsetSnapshot { entries }
    }

    /// Rebuild a store from a snapshot. Every entry is kept, including
    /// zero offsets of children dragged back to where they started;
    /// duplicate ids are summed.
    #[must_use]
    pub fn from_snapshot(snapshot: &OffsetSnapshot) -> Self {
        let mut store = Self::new();
        for &(child, offset) in &snapshot.entries {
            store
                .entries
                .entry(child)
                .or_default()
                .add(offset.dx, offset.dy);
        }
        store
    }
}

/// Serializable form of an [`OffsetStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetSnapshot {
    pub entries: Vec<(ChildId, Offset)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ChildId {
        ChildId::new(raw).expect("non-zero id")
    }

    #[test]
    fn accumulate_creates_then_sums() {
        let mut store = OffsetStore::new();
        assert_eq!(store.get(id(1)), None);
        store.accumulate(id(1), 2, 3);
        store.accumulate(id(1), -1, 4);
        assert_eq!(store.get(id(1)), Some(Offset::new(1, 7)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn accumulation_order_does_not_matter() {
        let mut forward = OffsetStore::new();
        forward.accumulate(id(1), 2, 3);
        forward.accumulate(id(1), -1, 4);

        let mut backward = OffsetStore::new();
        backward.accumulate(id(1), -1, 4);
        backward.accumulate(id(1), 2, 3);

        assert_eq!(forward.get(id(1)), Some(Offset::new(1, 7)));
        assert_eq!(forward, backward);
    }

    #[test]
    fn zero_delta_creates_no_entry() {
        let mut store = OffsetStore::new();
        store.accumulate(id(1), 0, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn entry_survives_returning_to_zero() {
        let mut store = OffsetStore::new();
        store.accumulate(id(3), 5, 0);
        store.accumulate(id(3), -5, 0);
        assert_eq!(store.get(id(3)), Some(Offset::ZERO));
    }

    #[test]
    fn remove_and_retain_prune_entries() {
        let mut store = OffsetStore::new();
        for raw in 1..=4 {
            store.accumulate(id(raw), raw as i32, 0);
        }
        assert_eq!(store.remove(id(2)), Some(Offset::new(2, 0)));
        assert_eq!(store.remove(id(2)), None);
        store.retain(|child| child.get() % 2 == 1);
        assert_eq!(store.len(), 2);
        assert!(store.get(id(4)).is_none());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn for_each_visits_every_entry() {
        let mut store = OffsetStore::new();
        store.accumulate(id(1), 1, 1);
        store.accumulate(id(2), 2, 2);
        let mut total = Offset::ZERO;
        store.for_each(|_, offset| total.add(offset.dx, offset.dy));
        assert_eq!(total, Offset::new(3, 3));
    }

    #[test]
    fn snapshot_is_sorted_and_restorable() {
        let mut store = OffsetStore::new();
        store.accumulate(id(9), 1, 2);
        store.accumulate(id(2), -3, 4);
        let snapshot = store.snapshot();
        assert_eq!(
            snapshot.entries,
            vec![(id(2), Offset::new(-3, 4)), (id(9), Offset::new(1, 2))]
        );
        assert_eq!(OffsetStore::from_snapshot(&snapshot), store);
    }

    #[test]
    fn snapshot_keeps_entries_dragged_back_to_zero() {
        let mut store = OffsetStore::new();
        store.accumulate(id(1), 10, 0);
        store.accumulate(id(1), -10, 0);
        store.accumulate(id(2), 4, 4);
        let restored = OffsetStore::from_snapshot(&store.snapshot());
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get(id(1)), Some(Offset::ZERO));
        assert_eq!(restored, store);
    }
}
