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

//! Candidate sample files and the patterns that group them.

use std::collections::BTreeMap;

use crate::assign::rules::NoteRules;

/// One structural piece of a generic pattern: a literal span of the file
/// name, or a run of one or more digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Digits,
}

/// The key that groups candidates which should count as variations of the
/// same logical sound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// The source string of the configured note rule the file name matched.
    Rule(String),
    /// A structural key derived from the file name. Digit runs collapse to
    /// a single marker, so numbered variants such as alternate takes or
    /// velocity layers of one sound share a group.
    Generic(Vec<Segment>),
}

impl Pattern {
    /// Derives the generic pattern for a file name by splitting it into
    /// literal spans and maximal digit runs. The digit-run markers stay in
    /// the key: `kick1.wav` and `kick22.wav` group together, while
    /// `kick.wav` and `1kick.wav` each form their own group.
    pub fn generic(file_name: &str) -> Pattern {
        let mut segments: Vec<Segment> = Vec::new();
        let mut literal = String::new();

        for ch in file_name.chars() {
            if ch.is_ascii_digit() {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                if !matches!(segments.last(), Some(Segment::Digits)) {
                    segments.push(Segment::Digits);
                }
            } else {
                literal.push(ch);
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Pattern::Generic(segments)
    }
}

/// A discovered sample file: its base name, the pattern grouping it, and
/// the priority consulted by the unused-file distribution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The file base name. Identifies the candidate within one directory.
    path: String,
    /// Starts at zero and only ever drops, one point per sibling of the
    /// same pattern group that gets assigned.
    priority: i32,
    /// The pattern grouping this candidate with its siblings.
    pattern: Pattern,
}

impl Candidate {
    fn new(path: &str, pattern: Pattern) -> Candidate {
        Candidate {
            path: path.to_string(),
            priority: 0,
            pattern,
        }
    }

    /// Gets the file base name.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Gets the current priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Gets the pattern grouping this candidate.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

#[cfg(test)]
impl Candidate {
    /// Creates a candidate with an explicit priority (test only).
    pub fn with_priority(path: &str, priority: i32) -> Candidate {
        Candidate {
            path: path.to_string(),
            priority,
            pattern: Pattern::generic(path),
        }
    }
}

/// The pool of not-yet-assigned candidates for one sample directory.
/// Keyed by file name, so every iteration runs in ascending path order and
/// tie-breaks come out the same on every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    candidates: BTreeMap<String, Candidate>,
}

impl CandidatePool {
    /// Builds the pool for a directory listing. Each file name is tested
    /// against the configured rules in configuration order and adopts the
    /// first matching rule's pattern; file names no rule matches get the
    /// generic pattern derived from their digit runs. An empty listing
    /// yields an empty pool, which is not an error.
    pub fn from_files<I, S>(files: I, rules: &NoteRules) -> CandidatePool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates = BTreeMap::new();
        for file in files {
            let file = file.as_ref();
            let pattern = match rules.first_match(file) {
                Some(source) => Pattern::Rule(source.to_string()),
                None => Pattern::generic(file),
            };
            candidates.insert(file.to_string(), Candidate::new(file, pattern));
        }
        CandidatePool { candidates }
    }

    /// Returns true if no candidates remain.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the number of remaining candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Removes and returns the candidate with the given file name.
    /// An assigned candidate leaves the pool and never comes back.
    pub fn take(&mut self, path: &str) -> Option<Candidate> {
        self.candidates.remove(path)
    }

    /// Drops the priority of every remaining candidate sharing the given
    /// pattern by one point. Called after a member of the group is
    /// assigned, so well-represented groups lose ground when leftover
    /// notes get filled later.
    pub fn demote_group(&mut self, pattern: &Pattern) {
        for candidate in self.candidates.values_mut() {
            if candidate.pattern == *pattern {
                candidate.priority -= 1;
            }
        }
    }

    /// File names of the remaining candidates whose pattern is the given
    /// rule source, in ascending order.
    pub fn rule_matches(&self, source: &str) -> Vec<String> {
        self.candidates
            .values()
            .filter(|candidate| matches!(&candidate.pattern, Pattern::Rule(rule) if rule == source))
            .map(|candidate| candidate.path.clone())
            .collect()
    }

    /// The remaining candidate with the highest priority, ties broken by
    /// ascending file name. Returns None once the pool is exhausted.
    pub fn highest_priority(&self) -> Option<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in self.candidates.values() {
            match best {
                Some(current) if candidate.priority <= current.priority => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

#[cfg(test)]
impl CandidatePool {
    /// Looks up a remaining candidate without removing it (test only).
    pub fn get(&self, path: &str) -> Option<&Candidate> {
        self.candidates.get(path)
    }
}
