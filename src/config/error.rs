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

/// Typed error for configuration load and validation failures so callers
/// can distinguish e.g. file-not-found from a bad note range without
/// string matching. All of these are fatal: nothing is generated from a
/// configuration that did not validate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read or parsed.
    #[error("Config load/parse error: {0}")]
    Load(#[from] config::ConfigError),

    /// The note range is inverted.
    #[error("Invalid note range: first_note {first_note} is above last_note {last_note}")]
    InvalidNoteRange { first_note: u8, last_note: u8 },

    /// A mapping names a note outside the configured range.
    #[error("Mapping for note {note} is outside the range [{first_note}, {last_note})")]
    MappingOutOfRange {
        note: u8,
        first_note: u8,
        last_note: u8,
    },

    /// Two mappings name the same note.
    #[error("Multiple mappings configured for note {note}")]
    DuplicateMapping { note: u8 },

    /// A mapping's file name pattern does not compile.
    #[error("Invalid file_name_regex for note {note}: {source}")]
    Pattern { note: u8, source: regex::Error },
}
