// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! The note slot table that assignments fill.

use std::collections::BTreeMap;

use crate::assign::candidate::Candidate;

/// The state of one note slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// No file assigned. Empty slots always win the lowest-priority
    /// selection, so they fill before any occupied note is reconsidered.
    Empty,
    /// The candidate currently assigned to the note.
    Filled(Candidate),
}

/// The full table of note slots for one generation run. Every note in the
/// configured half-open range gets a slot up front, whether or not a file
/// ever lands on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteSlots {
    slots: BTreeMap<u8, Slot>,
}

impl NoteSlots {
    /// Creates an empty slot for every note in `[first_note, last_note)`.
    /// An empty range yields an empty table.
    pub fn for_range(first_note: u8, last_note: u8) -> NoteSlots {
        NoteSlots {
            slots: (first_note..last_note)
                .map(|note| (note, Slot::Empty))
                .collect(),
        }
    }

    /// Returns true if the note belongs to the table's range.
    pub fn contains(&self, note: u8) -> bool {
        self.slots.contains_key(&note)
    }

    /// Gets the slot for a note.
    pub fn get(&self, note: u8) -> Option<&Slot> {
        self.slots.get(&note)
    }

    /// Places a candidate on a note, replacing any previous occupant. The
    /// note must already have a slot; the table never grows.
    pub fn fill(&mut self, note: u8, candidate: Candidate) {
        debug_assert!(self.slots.contains_key(&note), "note {note} has no slot");
        if let Some(slot) = self.slots.get_mut(&note) {
            *slot = Slot::Filled(candidate);
        }
    }

    /// The note that should receive the next distributed file: the first
    /// empty slot if one exists, otherwise the lowest note whose occupant
    /// has the minimum priority. Returns None only for an empty table.
    pub fn lowest_priority_note(&self) -> Option<u8> {
        let mut lowest: Option<(u8, i32)> = None;
        for (note, slot) in self.slots.iter() {
            match slot {
                Slot::Empty => return Some(*note),
                Slot::Filled(candidate) => match lowest {
                    Some((_, priority)) if candidate.priority() >= priority => {}
                    _ => lowest = Some((*note, candidate.priority())),
                },
            }
        }
        lowest.map(|(note, _)| note)
    }

    /// Iterates the filled slots in ascending note order.
    pub fn assigned(&self) -> impl Iterator<Item = (u8, &Candidate)> {
        self.slots.iter().filter_map(|(note, slot)| match slot {
            Slot::Filled(candidate) => Some((*note, candidate)),
            Slot::Empty => None,
        })
    }

    /// Returns the number of slots in the table.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_range_is_total_and_half_open() {
        let slots = NoteSlots::for_range(36, 40);
        assert_eq!(4, slots.len());
        assert!(!slots.contains(35));
        assert!(slots.contains(36));
        assert!(slots.contains(39));
        assert!(!slots.contains(40));
        assert_eq!(0, slots.assigned().count());
    }

    #[test]
    fn empty_range_yields_empty_table() {
        let slots = NoteSlots::for_range(36, 36);
        assert!(slots.is_empty());
        assert_eq!(None, slots.lowest_priority_note());
    }

    #[test]
    fn fill_replaces_the_occupant() {
        let mut slots = NoteSlots::for_range(36, 38);
        slots.fill(36, Candidate::with_priority("a.wav", 0));
        slots.fill(36, Candidate::with_priority("b.wav", -1));

        match slots.get(36) {
            Some(Slot::Filled(candidate)) => assert_eq!("b.wav", candidate.path()),
            other => panic!("slot 36 should be filled, got {other:?}"),
        }
        assert_eq!(Some(&Slot::Empty), slots.get(37));
    }

    #[test]
    fn first_empty_slot_always_wins() {
        let mut slots = NoteSlots::for_range(36, 40);
        slots.fill(36, Candidate::with_priority("a.wav", -5));
        slots.fill(38, Candidate::with_priority("b.wav", -5));

        // 37 is empty and beats both low-priority occupants.
        assert_eq!(Some(37), slots.lowest_priority_note());
    }

    #[test]
    fn full_table_selects_minimum_priority() {
        let mut slots = NoteSlots::for_range(36, 39);
        slots.fill(36, Candidate::with_priority("a.wav", 0));
        slots.fill(37, Candidate::with_priority("b.wav", -2));
        slots.fill(38, Candidate::with_priority("c.wav", -1));

        assert_eq!(Some(37), slots.lowest_priority_note());
    }

    #[test]
    fn priority_ties_select_the_lowest_note() {
        let mut slots = NoteSlots::for_range(36, 39);
        slots.fill(36, Candidate::with_priority("a.wav", -1));
        slots.fill(37, Candidate::with_priority("b.wav", -1));
        slots.fill(38, Candidate::with_priority("c.wav", 0));

        assert_eq!(Some(36), slots.lowest_priority_note());
    }

    #[test]
    fn assigned_skips_empty_slots() {
        let mut slots = NoteSlots::for_range(36, 40);
        slots.fill(37, Candidate::with_priority("a.wav", 0));
        slots.fill(39, Candidate::with_priority("b.wav", 0));

        let assigned: Vec<(u8, &str)> = slots
            .assigned()
            .map(|(note, candidate)| (note, candidate.path()))
            .collect();
        assert_eq!(vec![(37, "a.wav"), (39, "b.wav")], assigned);
    }
}
