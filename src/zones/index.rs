//! Owner index for card locations and movement.
//!
//! `OwnerIndex` tracks which `OwnerState` holds each storage slot and keeps,
//! for every owner, the list of its slots. Lists stay sorted by slot, so
//! iterating an owner always follows registry storage order no matter in
//! which order the cards arrived.

use rustc_hash::FxHashMap;

use super::owner::OwnerState;

/// Location of every slot plus per-owner slot lists.
///
/// ```
/// use durak_sim::zones::{OwnerIndex, OwnerState};
///
/// let mut index = OwnerIndex::new(4, OwnerState::Deck);
/// index.move_to(3, OwnerState::Discard);
/// index.move_to(1, OwnerState::Discard);
///
/// assert_eq!(index.slots_with(OwnerState::Discard), &[1, 3]);
/// assert_eq!(index.count(OwnerState::Deck), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OwnerIndex {
    /// Slot -> owner.
    locations: Vec<OwnerState>,

    /// Owner -> slots, ascending.
    by_owner: FxHashMap<OwnerState, Vec<usize>>,
}

impl OwnerIndex {
    /// Create an index of `slots` slots, all held by `initial`.
    #[must_use]
    pub fn new(slots: usize, initial: OwnerState) -> Self {
        let mut by_owner = FxHashMap::default();
        by_owner.insert(initial, (0..slots).collect());

        Self {
            locations: vec![initial; slots],
            by_owner,
        }
    }

    /// Number of tracked slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Owner of a slot, or `None` if the slot is out of range.
    #[must_use]
    pub fn owner_of(&self, slot: usize) -> Option<OwnerState> {
        self.locations.get(slot).copied()
    }

    /// Move a slot to a new owner.
    ///
    /// Returns the previous owner, or `None` if the slot is out of range.
    pub fn move_to(&mut self, slot: usize, new_owner: OwnerState) -> Option<OwnerState> {
        let old_owner = self.owner_of(slot)?;

        if old_owner == new_owner {
            return Some(old_owner);
        }

        if let Some(list) = self.by_owner.get_mut(&old_owner) {
            if let Ok(pos) = list.binary_search(&slot) {
                list.remove(pos);
            }
        }

        let list = self.by_owner.entry(new_owner).or_default();
        if let Err(pos) = list.binary_search(&slot) {
            list.insert(pos, slot);
        }

        self.locations[slot] = new_owner;
        Some(old_owner)
    }

    /// Slots held by `owner`, in storage order.
    #[must_use]
    pub fn slots_with(&self, owner: OwnerState) -> &[usize] {
        self.by_owner.get(&owner).map_or(&[], |v| v.as_slice())
    }

    /// Number of slots held by `owner`.
    #[must_use]
    pub fn count(&self, owner: OwnerState) -> usize {
        self.slots_with(owner).len()
    }

    /// Every owner that currently holds at least one slot.
    pub fn owners(&self) -> impl Iterator<Item = OwnerState> + '_ {
        self.by_owner
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(&owner, _)| owner)
    }
}
