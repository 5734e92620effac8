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
mod assign;
mod config;
mod generator;
mod samples;
mod testutil;

use std::error::Error;
use std::path::Path;

use clap::{crate_version, Parser};

/// The configuration file, read from the working directory.
const CONFIG_FILE: &str = "config.yaml";

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Generates MIDI note mappings for directories of drum samples."
)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    // No arguments beyond --help and --version; parsing still rejects
    // anything stray.
    let _ = Cli::parse();

    let config = config::load(Path::new(CONFIG_FILE))?;
    let generated = generator::generate_all(&config)?;

    if generated == 0 {
        println!("No kit definitions generated.");
    } else {
        println!("Generated {} kit definition(s).", generated);
    }

    Ok(())
}
