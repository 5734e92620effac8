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

//! Discovery of sample directories and the wav files within them.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// The directories to generate kit definitions for. With subfolders
/// enabled, these are the immediate child directories of the root that
/// contain at least one wav file, sorted by name so every run processes
/// them in the same order; finding none is fine, and a subfolder that
/// cannot be listed is skipped rather than failing the run. With
/// subfolders disabled, the root itself is the one sample directory,
/// whatever it contains.
pub fn find_sample_dirs(root: &Path, use_subfolders: bool) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !use_subfolders {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        match wav_file_names(&path) {
            Ok(files) if files.is_empty() => {
                debug!(path = ?path, "Skipping subfolder with no wav files");
            }
            Ok(_) => dirs.push(path),
            Err(e) => warn!(path = ?path, err = e.as_ref(), "Skipping unlistable subfolder"),
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// The base names of the directory's wav files, sorted. The extension
/// match is exact and case sensitive; symlinks are followed, so a link
/// to a wav file elsewhere counts while a broken one is skipped.
/// Entries whose names are not UTF-8 cannot be matched against any
/// pattern, so they are skipped with a warning rather than failing the
/// directory.
pub fn wav_file_names(dir: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let mut files: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "wav") {
            continue;
        }

        // Metadata follows symlinks; only what resolves to a regular
        // file counts.
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!(path = ?path, err = e.to_string(), "Skipping unreadable entry");
                continue;
            }
        }
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => files.push(name.to_string()),
            None => warn!(path = ?path, "Skipping file without a UTF-8 name"),
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::fs;

    use crate::testutil;

    use super::*;

    #[test]
    fn lists_only_wav_files() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        testutil::write_wavs(temp.path(), &["kick.wav", "snare.wav"])?;
        fs::write(temp.path().join("notes.txt"), "not a sample")?;
        fs::write(temp.path().join("loop.WAV"), "wrong case")?;
        fs::create_dir(temp.path().join("nested.wav"))?;

        assert_eq!(
            vec!["kick.wav", "snare.wav"],
            wav_file_names(temp.path())?
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_wav_files_are_listed() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        testutil::write_wavs(temp.path(), &["kick.wav"])?;
        fs::create_dir(temp.path().join("sub"))?;
        std::os::unix::fs::symlink(temp.path().join("kick.wav"), temp.path().join("alias.wav"))?;
        std::os::unix::fs::symlink(temp.path().join("sub"), temp.path().join("dir.wav"))?;
        std::os::unix::fs::symlink(temp.path().join("gone.wav"), temp.path().join("broken.wav"))?;

        // Links to files count; links to directories and dead links do not.
        assert_eq!(
            vec!["alias.wav", "kick.wav"],
            wav_file_names(temp.path())?
        );
        Ok(())
    }

    #[test]
    fn listing_is_sorted() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        testutil::write_wavs(temp.path(), &["c.wav", "a.wav", "b.wav"])?;

        assert_eq!(vec!["a.wav", "b.wav", "c.wav"], wav_file_names(temp.path())?);
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(wav_file_names(Path::new("/nonexistent/samples")).is_err());
    }

    #[test]
    fn subfolders_with_wavs_are_discovered_sorted() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        let acoustic = temp.path().join("acoustic");
        let electric = temp.path().join("electric");
        let empty = temp.path().join("empty");
        fs::create_dir(&acoustic)?;
        fs::create_dir(&electric)?;
        fs::create_dir(&empty)?;
        testutil::write_wavs(&electric, &["kick.wav"])?;
        testutil::write_wavs(&acoustic, &["kick.wav"])?;
        fs::write(temp.path().join("stray.wav"), "not a directory")?;

        let dirs = find_sample_dirs(temp.path(), true)?;
        assert_eq!(vec![acoustic, electric], dirs);
        Ok(())
    }

    #[test]
    fn no_matching_subfolders_is_fine() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;
        fs::create_dir(temp.path().join("empty"))?;

        assert!(find_sample_dirs(temp.path(), true)?.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn an_unlistable_subfolder_does_not_stop_discovery() -> Result<(), Box<dyn Error>> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir()?;
        let good = temp.path().join("good");
        let locked = temp.path().join("locked");
        fs::create_dir(&good)?;
        fs::create_dir(&locked)?;
        testutil::write_wavs(&good, &["kick.wav"])?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        let dirs = find_sample_dirs(temp.path(), true)?;
        assert_eq!(vec![good], dirs);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    #[test]
    fn without_subfolders_the_root_is_the_sample_dir() -> Result<(), Box<dyn Error>> {
        let temp = tempfile::tempdir()?;

        // The root qualifies even before any wav files land in it.
        assert_eq!(
            vec![temp.path().to_path_buf()],
            find_sample_dirs(temp.path(), false)?
        );
        Ok(())
    }
}
