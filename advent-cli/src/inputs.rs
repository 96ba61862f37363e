//! Local puzzle input lookup
//!
//! Inputs live on disk only: `<dir>/day01.txt` through `<dir>/day25.txt`,
//! or one explicit file for a single day.

use std::path::PathBuf;
use thiserror::Error;

/// Input lookup errors
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error while reading an input file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Maps days to their input files
pub struct InputStore {
    dir: PathBuf,
    explicit: Option<(u8, PathBuf)>,
}

impl InputStore {
    /// Store reading `day<dd>.txt` files under `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            explicit: None,
        }
    }

    /// Use `path` for `day` instead of the directory layout
    pub fn with_explicit(dir: PathBuf, day: u8, path: PathBuf) -> Self {
        Self {
            dir,
            explicit: Some((day, path)),
        }
    }

    /// Path a day's input is expected at
    pub fn path_for(&self, day: u8) -> PathBuf {
        if let Some((explicit_day, path)) = &self.explicit
            && *explicit_day == day
        {
            return path.clone();
        }
        self.dir.join(format!("day{:02}.txt", day))
    }

    /// Whether the day's input file exists
    pub fn contains(&self, day: u8) -> bool {
        self.path_for(day).is_file()
    }

    /// Read the day's input, `Ok(None)` when the file does not exist
    pub fn get(&self, day: u8) -> Result<Option<String>, InputError> {
        let path = self.path_for(day);
        match std::fs::read_to_string(&path) {
            Ok(input) => Ok(Some(input)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_layout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("day03.txt"), "abc\n").unwrap();

        let store = InputStore::new(dir.path().to_path_buf());
        assert!(store.contains(3));
        assert!(!store.contains(4));
        assert_eq!(store.get(3).unwrap().as_deref(), Some("abc\n"));
        assert_eq!(store.get(4).unwrap(), None);
    }

    #[test]
    fn test_explicit_override() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("mine.txt");
        std::fs::write(&custom, "custom\n").unwrap();
        std::fs::write(dir.path().join("day05.txt"), "ambient\n").unwrap();

        let store = InputStore::with_explicit(dir.path().to_path_buf(), 7, custom.clone());
        assert_eq!(store.path_for(7), custom);
        assert_eq!(store.get(7).unwrap().as_deref(), Some("custom\n"));
        // Other days still resolve through the directory
        assert_eq!(store.get(5).unwrap().as_deref(), Some("ambient\n"));
    }

    #[test]
    fn test_zero_padded_names() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.path_for(9), PathBuf::from("inputs/day09.txt"));
        assert_eq!(store.path_for(25), PathBuf::from("inputs/day25.txt"));
    }
}
