//! File I/O utilities with atomic writes
//!
//! Line-oriented text file helpers. Writes go through a temp file and an
//! atomic rename so a store is either fully rewritten or untouched.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LibraryError;

/// Read a text file as a list of lines, returning an empty list if the
/// file doesn't exist yet
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LibraryError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| LibraryError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(contents.lines().map(str::to_string).collect())
}

/// Write a list of lines to a file atomically (write to temp, then rename)
///
/// The file's entire prior contents are replaced. Writing to a temp file in
/// the same directory and renaming over the target means a crash mid-write
/// leaves the previous contents intact.
pub fn write_lines_atomic<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), LibraryError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LibraryError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LibraryError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| LibraryError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LibraryError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LibraryError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        LibraryError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        let lines = read_lines(&path).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        let lines = vec!["one".to_string(), "two".to_string()];
        write_lines_atomic(&path, &lines).unwrap();

        let loaded = read_lines(&path).unwrap();
        assert_eq!(loaded, lines);
    }

    #[test]
    fn test_write_replaces_prior_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        write_lines_atomic(&path, &["old".to_string(), "stale".to_string()]).unwrap();
        write_lines_atomic(&path, &["new".to_string()]).unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["new".to_string()]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");
        let temp_path = temp_dir.path().join("test.txt.tmp");

        write_lines_atomic(&path, &["line".to_string()]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.txt");

        write_lines_atomic(&path, &["line".to_string()]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");

        write_lines_atomic(&path, &[]).unwrap();
        assert!(path.exists());
        assert!(read_lines(&path).unwrap().is_empty());
    }
}
