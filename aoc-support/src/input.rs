//! Loading puzzle input files

use crate::error::InputError;
use std::fs;
use std::path::Path;

/// File name each puzzle directory keeps its input under
pub const DEFAULT_INPUT: &str = "input.txt";

/// Read a whole UTF-8 input file
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_INPUT);
        fs::write(&path, "1\n2\n").unwrap();
        assert_eq!(read_input(&path).unwrap(), "1\n2\n");
    }

    #[test]
    fn test_missing_file_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.txt");
        let err = read_input(&path).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
