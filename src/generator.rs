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

//! Drives kit generation across the discovered sample directories.

use std::error::Error;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::assign::{self, CandidatePool, NoteRules, NoteSlots};
use crate::config::{Generator, Kit, KitMapping};
use crate::samples;

/// Generates a kit definition for every discovered sample directory and
/// returns how many were written. Directories are independent: one
/// failing to list or write is logged and the rest still generate. Bad
/// configuration is different and fails the whole run before any
/// directory is touched.
pub fn generate_all(config: &Generator) -> Result<usize, Box<dyn Error>> {
    let rules = NoteRules::compile(config.mappings())?;
    let dirs = samples::find_sample_dirs(Path::new(config.path()), config.use_subfolders())?;
    debug!(
        path = config.path(),
        dirs = dirs.len(),
        "Discovered sample directories"
    );

    let mut generated = 0;
    for dir in dirs.iter() {
        match generate_kit(dir, config, &rules) {
            Ok(kit) => {
                generated += 1;
                info!(
                    kit = kit.name(),
                    mappings = kit.mappings().len(),
                    "Generated kit definition"
                );
            }
            Err(e) => error!(path = ?dir, err = e.as_ref(), "Error while generating kit definition"),
        }
    }

    Ok(generated)
}

/// Generates the kit definition for one sample directory: list its wav
/// files, derive candidates, run the assignment passes, and save the
/// result as `<directory name>.yaml` next to the samples.
pub fn generate_kit(
    dir: &Path,
    config: &Generator,
    rules: &NoteRules,
) -> Result<Kit, Box<dyn Error>> {
    let name = kit_name(dir)?;
    let files = samples::wav_file_names(dir)?;
    debug!(kit = name.as_str(), files = files.len(), "Deriving candidates");

    let range = config.note_range();
    let pool = CandidatePool::from_files(files, rules);
    let slots = NoteSlots::for_range(range.first_note(), range.last_note());
    if slots.is_empty() {
        warn!(kit = name.as_str(), "Note range is empty; no files will be assigned");
    }
    let slots = assign::assign(rules, pool, slots);

    let mappings = slots
        .assigned()
        .map(|(note, candidate)| KitMapping::new(note, candidate.path()))
        .collect();
    let kit = Kit::new(&name, mappings);
    kit.save(&dir.join(format!("{}.yaml", kit.name())))?;
    Ok(kit)
}

/// Derives the kit name from the directory's base name, canonicalizing
/// first so relative paths like `.` still name something.
fn kit_name(dir: &Path) -> Result<String, Box<dyn Error>> {
    let canonical = dir.canonicalize()?;
    match canonical.file_name() {
        Some(name) => Ok(name.to_string_lossy().to_string()),
        None => Err(format!("unable to derive a kit name from {}", dir.display()).into()),
    }
}
