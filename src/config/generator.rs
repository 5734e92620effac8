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

use std::collections::HashSet;

use serde::Deserialize;

use super::error::ConfigError;

/// The YAML representation of the generator configuration.
#[derive(Deserialize, Clone, Debug)]
pub struct Generator {
    /// The root directory to scan for samples.
    path: String,
    /// Whether each subfolder of the root is its own sample set. When
    /// false, the root itself is the one and only sample set.
    use_subfolders: bool,
    /// The half-open MIDI note range to fill.
    note_range: NoteRange,
    /// The note rules, in the order file names should be tested against
    /// them.
    mappings: Vec<NoteMapping>,
}

/// A YAML representation of the half-open note range `[first_note,
/// last_note)`.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct NoteRange {
    /// The first note in the range.
    first_note: u8,
    /// One past the last note in the range.
    last_note: u8,
}

/// A YAML representation of one note rule.
#[derive(Deserialize, Clone, Debug)]
pub struct NoteMapping {
    /// The note this rule seeds.
    note_number: u8,
    /// The regex searched for in file base names.
    file_name_regex: String,
}

impl Generator {
    /// Gets the root scan directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if subfolders of the root are the sample sets.
    pub fn use_subfolders(&self) -> bool {
        self.use_subfolders
    }

    /// Gets the note range.
    pub fn note_range(&self) -> &NoteRange {
        &self.note_range
    }

    /// Gets the note rules in configuration order.
    pub fn mappings(&self) -> &[NoteMapping] {
        &self.mappings
    }

    /// Checks the constraints that cut across fields: the range must not
    /// be inverted, and every mapping must name a distinct note inside the
    /// range.
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        let first_note = self.note_range.first_note;
        let last_note = self.note_range.last_note;
        if first_note > last_note {
            return Err(ConfigError::InvalidNoteRange {
                first_note,
                last_note,
            });
        }

        let mut seen = HashSet::new();
        for mapping in &self.mappings {
            let note = mapping.note_number;
            if note < first_note || note >= last_note {
                return Err(ConfigError::MappingOutOfRange {
                    note,
                    first_note,
                    last_note,
                });
            }
            if !seen.insert(note) {
                return Err(ConfigError::DuplicateMapping { note });
            }
        }

        Ok(())
    }
}

impl NoteRange {
    /// Gets the first note in the range.
    pub fn first_note(&self) -> u8 {
        self.first_note
    }

    /// Gets the note one past the end of the range.
    pub fn last_note(&self) -> u8 {
        self.last_note
    }
}

impl NoteMapping {
    /// Gets the note this rule seeds.
    pub fn note_number(&self) -> u8 {
        self.note_number
    }

    /// Gets the regex source searched for in file base names.
    pub fn file_name_regex(&self) -> &str {
        &self.file_name_regex
    }
}

#[cfg(test)]
impl Generator {
    /// Creates a new generator configuration (test only).
    pub fn new(
        path: &str,
        use_subfolders: bool,
        note_range: NoteRange,
        mappings: Vec<NoteMapping>,
    ) -> Generator {
        Generator {
            path: path.to_string(),
            use_subfolders,
            note_range,
            mappings,
        }
    }
}

#[cfg(test)]
impl NoteRange {
    /// Creates a new note range (test only).
    pub fn new(first_note: u8, last_note: u8) -> NoteRange {
        NoteRange {
            first_note,
            last_note,
        }
    }
}

#[cfg(test)]
impl NoteMapping {
    /// Creates a new note mapping (test only).
    pub fn new(note_number: u8, file_name_regex: &str) -> NoteMapping {
        NoteMapping {
            note_number,
            file_name_regex: file_name_regex.to_string(),
        }
    }
}
