//! Fixed-capacity, index-addressed storage shared by item pockets and
//! Pokémon containers.
//!
//! A [`SlottedList`] never grows or shrinks. Under [`Discipline::Compacting`]
//! the occupied slots always form the prefix `[0, occupied_count)`; under
//! [`Discipline::Sparse`] entries may sit at any index and gaps persist.
//! Every mutating call validates fully before touching the slots, so a
//! failed call leaves the list unchanged.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core_api::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Compacting,
    Sparse,
}

impl Discipline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compacting => "Compacting",
            Self::Sparse => "Sparse",
        }
    }
}

/// Payload stored in a [`SlottedList`].
pub trait SlotValue: Clone + PartialEq {
    /// True when both values refer to the same stored thing (same item
    /// name, same creature record), regardless of any other field.
    fn same_identity(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlottedList<T> {
    discipline: Discipline,
    slots: Vec<Option<T>>,
}

impl<T: SlotValue> SlottedList<T> {
    pub fn new(capacity: usize, discipline: Discipline) -> Self {
        Self {
            discipline,
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.capacity()
    }

    pub fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(CoreError::out_of_range(format!(
                "index {index} is outside [0, {})",
                self.slots.len()
            )))
        }
    }

    pub fn get(&self, index: usize) -> Result<Option<&T>, CoreError> {
        self.check_index(index)?;
        Ok(self.slots[index].as_ref())
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, CoreError> {
        self.check_index(index)?;
        Ok(self.slots[index].as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Occupied slots with their indices, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    pub fn position(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.occupied()
            .find(|(_, value)| predicate(value))
            .map(|(index, _)| index)
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Index a newly appended entry would land on: the end of the packed
    /// prefix when compacting, the lowest empty slot when sparse.
    pub fn next_free(&self) -> Option<usize> {
        match self.discipline {
            Discipline::Compacting => {
                let count = self.occupied_count();
                (count < self.capacity()).then_some(count)
            }
            Discipline::Sparse => self.first_empty(),
        }
    }

    /// Direct assignment. `None` clears the slot.
    ///
    /// Rejects re-assigning an unchanged value onto itself, placing past the
    /// packed prefix, and clearing an interior slot of a compacting list.
    /// Returns whatever the slot held before.
    pub fn set(&mut self, index: usize, entry: Option<T>) -> Result<Option<T>, CoreError> {
        self.check_index(index)?;
        let occupied = self.occupied_count();

        match &entry {
            Some(value) => {
                let unchanged = self.slots[index]
                    .as_ref()
                    .is_some_and(|current| current.same_identity(value) && current == value);
                if unchanged {
                    return Err(CoreError::invalid_value(format!(
                        "slot {index} already holds this entry"
                    )));
                }
                if self.discipline == Discipline::Compacting && index > occupied {
                    return Err(CoreError::invalid_value(format!(
                        "slot {index} would leave a gap after the {occupied} occupied slot(s)"
                    )));
                }
            }
            None => {
                if self.slots[index].is_none() {
                    return Ok(None);
                }
                if self.discipline == Discipline::Compacting && index + 1 != occupied {
                    return Err(CoreError::invalid_value(format!(
                        "cannot clear interior slot {index}; only slot {} may be cleared",
                        occupied.saturating_sub(1)
                    )));
                }
            }
        }

        trace!("slot {index} assigned (occupied before: {occupied})");
        Ok(std::mem::replace(&mut self.slots[index], entry))
    }

    /// Places `value` on [`next_free`](Self::next_free).
    pub fn push(&mut self, value: T) -> Result<usize, CoreError> {
        let index = self.next_free().ok_or_else(|| {
            CoreError::out_of_range(format!("all {} slots are occupied", self.capacity()))
        })?;
        self.slots[index] = Some(value);
        trace!("slot {index} filled by append");
        Ok(index)
    }

    /// Empties `index`. Compacting lists shift later entries left to close
    /// the gap; sparse lists leave everything else in place.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, CoreError> {
        self.check_index(index)?;
        if self.slots[index].is_none() {
            return Ok(None);
        }

        let taken = match self.discipline {
            Discipline::Compacting => {
                let taken = self.slots.remove(index);
                self.slots.push(None);
                trace!("slot {index} removed; later entries shifted left");
                taken
            }
            Discipline::Sparse => self.slots[index].take(),
        };
        Ok(taken)
    }

    /// Relocates the entry at `from` to `to`.
    ///
    /// Compacting lists treat the packed prefix as an ordered sequence and
    /// shift the entries in between; both indices must fall inside it.
    /// Sparse lists swap the two slots.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        self.check_index(from)?;
        self.check_index(to)?;

        match self.discipline {
            Discipline::Compacting => {
                let occupied = self.occupied_count();
                for index in [from, to] {
                    if index >= occupied {
                        return Err(CoreError::out_of_range(format!(
                            "index {index} is outside the {occupied} occupied slot(s)"
                        )));
                    }
                }
                if from != to {
                    let entry = self.slots.remove(from);
                    self.slots.insert(to, entry);
                }
            }
            Discipline::Sparse => {
                if self.slots[from].is_none() {
                    return Err(CoreError::invalid_value(format!("slot {from} is empty")));
                }
                self.slots.swap(from, to);
            }
        }

        trace!("slot {from} moved to {to}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(&'static str, u32);

    impl SlotValue for Tag {
        fn same_identity(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    fn take_repacks_compacting_list() {
        let mut list = SlottedList::new(4, Discipline::Compacting);
        list.push(Tag("a", 1)).expect("push a");
        list.push(Tag("b", 1)).expect("push b");
        list.push(Tag("c", 1)).expect("push c");

        list.take(0).expect("take a");

        assert_eq!(list.get(0).expect("index 0"), Some(&Tag("b", 1)));
        assert_eq!(list.get(1).expect("index 1"), Some(&Tag("c", 1)));
        assert_eq!(list.get(2).expect("index 2"), None);
        assert_eq!(list.occupied_count(), 2);
    }

    #[test]
    fn take_leaves_gap_in_sparse_list() {
        let mut list = SlottedList::new(4, Discipline::Sparse);
        list.push(Tag("a", 1)).expect("push a");
        list.push(Tag("b", 1)).expect("push b");

        list.take(0).expect("take a");

        assert_eq!(list.get(0).expect("index 0"), None);
        assert_eq!(list.get(1).expect("index 1"), Some(&Tag("b", 1)));
        assert_eq!(list.next_free(), Some(0));
    }

    #[test]
    fn compacting_move_shifts_intervening_entries() {
        let mut list = SlottedList::new(5, Discipline::Compacting);
        for tag in ["a", "b", "c", "d"] {
            list.push(Tag(tag, 1)).expect("push");
        }

        list.move_entry(0, 2).expect("move");

        let order: Vec<&str> = list.occupied().map(|(_, tag)| tag.0).collect();
        assert_eq!(order, vec!["b", "c", "a", "d"]);
        assert!(list.move_entry(0, 4).is_err());
    }

    #[test]
    fn same_value_reassignment_is_rejected() {
        let mut list = SlottedList::new(2, Discipline::Sparse);
        list.push(Tag("a", 1)).expect("push a");

        assert!(list.set(0, Some(Tag("a", 1))).is_err());
        list.set(0, Some(Tag("a", 2))).expect("changed value is accepted");
    }
}
