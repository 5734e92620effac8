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

#[cfg(test)]
use std::{error::Error, fs::File, path::Path};

#[cfg(test)]
use hound::{SampleFormat, WavSpec, WavWriter};

/// Writes a short mono 16-bit wav file for tests.
#[cfg(test)]
pub fn write_wav(path: &Path, samples: &[i16]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut writer = WavWriter::new(
        file,
        WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        },
    )?;

    for sample in samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Creates one small wav file per name inside the given directory.
#[cfg(test)]
pub fn write_wavs(dir: &Path, names: &[&str]) -> Result<(), Box<dyn Error>> {
    for name in names {
        write_wav(&dir.join(name), &[0, 512, -512, 0])?;
    }
    Ok(())
}
