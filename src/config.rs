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

//! Configuration for the generator and the kit definitions it writes.

use std::path::Path;

use config::{Config, File};

mod error;
mod generator;
mod kit;

pub use error::ConfigError;
pub use generator::{Generator, NoteMapping};
pub use kit::{Kit, KitMapping};

#[cfg(test)]
pub use generator::NoteRange;

/// Loads and validates the generator configuration from the given path.
/// Failures here happen before any sample directory is touched.
pub fn load(path: &Path) -> Result<Generator, ConfigError> {
    let generator = Config::builder()
        .add_source(File::from(path))
        .build()?
        .try_deserialize::<Generator>()?;
    generator.validate()?;
    Ok(generator)
}
