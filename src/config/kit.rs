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

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

#[cfg(test)]
use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The YAML representation of a generated drum kit definition. This is the
/// file the sampler consumes.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Kit {
    /// The kit name, taken from the sample directory name.
    name: String,
    /// The note mappings in ascending note order.
    mappings: Vec<KitMapping>,
}

/// A YAML representation of one note to file assignment.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct KitMapping {
    /// The MIDI note number.
    note_number: u8,
    /// The base name of the sample file assigned to the note.
    file_name: String,
}

impl Kit {
    /// Creates a new kit definition.
    pub fn new(name: &str, mappings: Vec<KitMapping>) -> Kit {
        Kit {
            name: name.to_string(),
            mappings,
        }
    }

    /// Serializes the kit definition and writes it to the given path,
    /// replacing whatever was there.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        debug!(kit = self.name.as_str(), path = ?path, "Saving kit definition");
        let serialized = serde_yml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }

    /// Gets the kit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the note mappings.
    pub fn mappings(&self) -> &[KitMapping] {
        &self.mappings
    }
}

impl KitMapping {
    /// Creates a new note to file mapping.
    pub fn new(note_number: u8, file_name: &str) -> KitMapping {
        KitMapping {
            note_number,
            file_name: file_name.to_string(),
        }
    }
}

#[cfg(test)]
impl Kit {
    /// Deserializes a kit definition from the given path (test only; the
    /// generator itself never reads these back).
    pub fn deserialize(path: &Path) -> Result<Kit, Box<dyn Error>> {
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<Kit>()?)
    }
}

#[cfg(test)]
impl KitMapping {
    /// Gets the MIDI note number (test only).
    pub fn note_number(&self) -> u8 {
        self.note_number
    }

    /// Gets the assigned file base name (test only).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn save_and_deserialize() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("acoustic.yaml");

        let kit = Kit::new(
            "acoustic",
            vec![
                KitMapping::new(36, "kick.wav"),
                KitMapping::new(38, "snare.wav"),
            ],
        );
        kit.save(&path)?;

        let loaded = Kit::deserialize(&path)?;
        assert_eq!(kit, loaded);
        assert_eq!("acoustic", loaded.name());
        assert_eq!(2, loaded.mappings().len());
        assert_eq!(36, loaded.mappings()[0].note_number());
        assert_eq!("kick.wav", loaded.mappings()[0].file_name());
        Ok(())
    }

    #[test]
    fn save_replaces_an_existing_file() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("kit.yaml");

        Kit::new("old", vec![KitMapping::new(36, "a.wav")]).save(&path)?;
        Kit::new("new", vec![KitMapping::new(36, "b.wav")]).save(&path)?;

        let loaded = Kit::deserialize(&path)?;
        assert_eq!("new", loaded.name());
        assert_eq!("b.wav", loaded.mappings()[0].file_name());
        Ok(())
    }
}
