//! Storage initialization
//!
//! Handles first-run setup: the data directory and empty store files.

use crate::config::paths::LibraryPaths;
use crate::error::LibraryError;

use super::file_io::write_lines_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and empty store files where missing.
/// Existing stores are left untouched.
pub fn initialize_storage(paths: &LibraryPaths) -> Result<(), LibraryError> {
    paths.ensure_directories()?;

    if !paths.books_file().exists() {
        write_lines_atomic(paths.books_file(), &[])?;
    }

    if !paths.users_file().exists() {
        write_lines_atomic(paths.users_file(), &[])?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LibraryPaths) -> bool {
    !paths.books_file().exists() || !paths.users_file().exists()
}
