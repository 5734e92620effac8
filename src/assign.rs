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

//! Assigns candidate sample files to MIDI note slots.
//!
//! Assignment runs in two passes over the same pool and slot table. The
//! first pass seeds the configured note rules and spills extra matches of
//! each rule onto the consecutive notes above it. The second pass hands the
//! remaining files to the neediest notes until no note would improve. Both
//! passes take the pool and table by value and hand them back, so a run
//! has no effect outside the values it returns.

pub mod candidate;
pub mod rules;
pub mod slots;

pub use candidate::CandidatePool;
pub use rules::NoteRules;
pub use slots::{NoteSlots, Slot};

#[cfg(test)]
pub use candidate::Candidate;

use tracing::debug;

/// Runs both assignment passes and returns the finished slot table. Any
/// candidates still in the pool afterwards simply go unused.
pub fn assign(rules: &NoteRules, pool: CandidatePool, slots: NoteSlots) -> NoteSlots {
    debug!(
        candidates = pool.len(),
        notes = slots.len(),
        "Assigning files to notes"
    );
    let (pool, slots) = seed_rules(rules, pool, slots);
    let (pool, slots) = distribute_unused(pool, slots);
    if !pool.is_empty() {
        debug!(unassigned = pool.len(), "Files left over after distribution");
    }
    slots
}

/// First pass: seeds the configured rules in ascending note order. Each
/// rule grabs the candidates it matched (in path order) and lays them out
/// starting at its own note, spilling onto consecutive notes until the
/// matches run out, the next note has a rule of its own, or the range
/// ends.
pub fn seed_rules(
    rules: &NoteRules,
    mut pool: CandidatePool,
    mut slots: NoteSlots,
) -> (CandidatePool, NoteSlots) {
    for rule in rules.by_note() {
        let mut note = rule.note();
        for path in pool.rule_matches(rule.source()) {
            place(&mut pool, &mut slots, note, &path);
            // Spill stops at a note another rule owns and at the end of
            // the range.
            match note.checked_add(1) {
                Some(next) if slots.contains(next) && !rules.has_rule(next) => note = next,
                _ => break,
            }
        }
    }
    (pool, slots)
}

/// Second pass: repeatedly offers the highest-priority remaining file to
/// the note most in need of one. An empty note takes whatever it is
/// offered; an occupied note only trades up, and the first offer that
/// would not improve its note ends the pass.
pub fn distribute_unused(
    mut pool: CandidatePool,
    mut slots: NoteSlots,
) -> (CandidatePool, NoteSlots) {
    loop {
        let note = match slots.lowest_priority_note() {
            Some(note) => note,
            None => break,
        };
        let (path, priority) = match pool.highest_priority() {
            Some(best) => (best.path().to_string(), best.priority()),
            None => break,
        };
        if let Some(Slot::Filled(occupant)) = slots.get(note) {
            if priority <= occupant.priority() {
                break;
            }
        }
        place(&mut pool, &mut slots, note, &path);
    }
    (pool, slots)
}

/// Assigns one candidate to one note: the candidate leaves the pool, the
/// rest of its pattern group is demoted, and the slot is filled (replacing
/// any previous occupant, which is gone for good).
fn place(pool: &mut CandidatePool, slots: &mut NoteSlots, note: u8, path: &str) {
    if let Some(candidate) = pool.take(path) {
        pool.demote_group(candidate.pattern());
        debug!(
            note,
            file = candidate.path(),
            priority = candidate.priority(),
            "Assigned file to note"
        );
        slots.fill(note, candidate);
    }
}
