//! The `input.txt` file kept next to each day's solution

use crate::error::InputStoreError;
use aoc_support::DEFAULT_INPUT;
use std::fs;
use std::path::{Path, PathBuf};

/// Input file of a single day directory
///
/// Layout: `{day_dir}/input.txt`
pub struct InputStore {
    day_dir: PathBuf,
}

impl InputStore {
    /// Input store for an explicit day directory
    pub fn new(day_dir: impl Into<PathBuf>) -> Self {
        Self {
            day_dir: day_dir.into(),
        }
    }

    /// Input store for `{root}/day{day:02}`
    pub fn for_day(root: &Path, day: u8) -> Self {
        Self::new(root.join(format!("day{:02}", day)))
    }

    /// Path of the input file
    pub fn path(&self) -> PathBuf {
        self.day_dir.join(DEFAULT_INPUT)
    }

    /// Check if the input has been downloaded
    pub fn contains(&self) -> bool {
        self.path().exists()
    }

    /// Store input, replacing any previous download
    pub fn put(&self, input: &str) -> Result<PathBuf, InputStoreError> {
        fs::create_dir_all(&self.day_dir).map_err(|e| {
            InputStoreError::DirCreation(format!(
                "Failed to create {}: {}",
                self.day_dir.display(),
                e
            ))
        })?;

        let path = self.path();
        fs::write(&path, input)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::for_day(Path::new("aoc2022"), 8);
        assert_eq!(store.path(), Path::new("aoc2022/day08/input.txt"));

        let store = InputStore::for_day(Path::new("."), 25);
        assert!(store.path().ends_with("day25/input.txt"));
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::for_day(temp.path(), 1);

        assert!(!store.contains());

        let input = "test input\nline 2\n";
        let written = store.put(input).unwrap();

        assert_eq!(written, store.path());
        assert!(store.contains());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), input);
    }
}
