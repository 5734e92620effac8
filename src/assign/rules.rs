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

//! Compiled note rules from the configuration.

use std::collections::BTreeMap;

use regex::Regex;

use crate::config::{ConfigError, NoteMapping};

/// One configured note rule: the note it seeds and the compiled file name
/// regex. The source string doubles as the group key for files this rule
/// matched.
#[derive(Clone, Debug)]
pub struct NoteRule {
    note: u8,
    source: String,
    regex: Regex,
}

impl NoteRule {
    /// Gets the note this rule seeds.
    pub fn note(&self) -> u8 {
        self.note
    }

    /// Gets the regex source string.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// The configured note rules, kept in both the order the configuration
/// listed them (which drives candidate derivation) and ascending note
/// order (which drives rule seeding).
#[derive(Clone, Debug, Default)]
pub struct NoteRules {
    /// The rules in configuration order.
    rules: Vec<NoteRule>,
    /// Rule indexes keyed by note, so iteration ascends.
    by_note: BTreeMap<u8, usize>,
}

impl NoteRules {
    /// Compiles the configured note mappings, stopping at the first rule
    /// whose regex does not compile.
    pub fn compile(mappings: &[NoteMapping]) -> Result<NoteRules, ConfigError> {
        let mut rules = Vec::with_capacity(mappings.len());
        let mut by_note = BTreeMap::new();

        for mapping in mappings {
            let source = mapping.file_name_regex();
            let regex = Regex::new(source).map_err(|err| ConfigError::Pattern {
                note: mapping.note_number(),
                source: err,
            })?;
            by_note.insert(mapping.note_number(), rules.len());
            rules.push(NoteRule {
                note: mapping.note_number(),
                source: source.to_string(),
                regex,
            });
        }

        Ok(NoteRules { rules, by_note })
    }

    /// The source string of the first rule matching the file name, testing
    /// in configuration order. Matching is a search, not a full match, so
    /// the pattern may land anywhere in the name.
    pub fn first_match(&self, file_name: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(file_name))
            .map(|rule| rule.source.as_str())
    }

    /// Returns true if the given note has a configured rule of its own.
    pub fn has_rule(&self, note: u8) -> bool {
        self.by_note.contains_key(&note)
    }

    /// Iterates the rules in ascending note order.
    pub fn by_note(&self) -> impl Iterator<Item = &NoteRule> {
        self.by_note.values().map(|index| &self.rules[*index])
    }
}
