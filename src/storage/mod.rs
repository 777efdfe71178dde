//! Storage layer for library-cli
//!
//! The persistence gateway: two flat-text stores (books and users) are
//! loaded together and reconciled into one consistent in-memory state.
//! No other component touches the files.

pub mod books;
pub mod file_io;
pub mod init;
pub mod users;

pub use file_io::{read_lines, write_lines_atomic};
pub use init::initialize_storage;

use std::collections::HashSet;

use crate::config::paths::LibraryPaths;
use crate::error::LibraryResult;
use crate::models::{Catalog, Roster};

/// What the load pass tolerated or repaired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Malformed lines skipped in the books store
    pub skipped_book_lines: usize,
    /// Malformed lines skipped in the users store
    pub skipped_user_lines: usize,
    /// Borrowed-list entries dropped because another claim came first
    pub dropped_claims: usize,
    /// Books whose availability flag disagreed with the borrow records
    pub repaired_books: usize,
}

impl LoadReport {
    /// Whether the stores loaded without any tolerance or repair
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Persistence gateway for the catalog and roster
pub struct Storage {
    paths: LibraryPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LibraryPaths) -> LibraryResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    /// Load both stores and reconcile them into one consistent state
    pub fn load_all(&self) -> LibraryResult<(Catalog, Roster)> {
        let (catalog, roster, _) = self.load_all_with_report()?;
        Ok((catalog, roster))
    }

    /// Load both stores, reporting what was skipped or repaired
    ///
    /// Order matters: the books store hydrates the catalog first, then the
    /// users store resolves borrowed titles against it, then the
    /// reconciliation pass restores the availability invariant.
    pub fn load_all_with_report(&self) -> LibraryResult<(Catalog, Roster, LoadReport)> {
        let book_lines = read_lines(self.paths.books_file())?;
        let (mut catalog, skipped_book_lines) = books::decode(&book_lines);

        let user_lines = read_lines(self.paths.users_file())?;
        let (mut roster, skipped_user_lines) = users::decode(&user_lines, &catalog);

        let (dropped_claims, repaired_books) = reconcile(&mut catalog, &mut roster);

        let report = LoadReport {
            skipped_book_lines,
            skipped_user_lines,
            dropped_claims,
            repaired_books,
        };
        Ok((catalog, roster, report))
    }

    /// Rewrite both stores in full from the current state
    ///
    /// Each file is written atomically, but there is no cross-file
    /// transaction: a crash between the two writes can leave the stores
    /// divergent. The reconciliation pass on the next load is the recovery
    /// path.
    pub fn save_all(&self, catalog: &Catalog, roster: &Roster) -> LibraryResult<()> {
        write_lines_atomic(self.paths.books_file(), &books::encode(catalog))?;
        write_lines_atomic(self.paths.users_file(), &users::encode(roster, catalog))?;
        Ok(())
    }
}

/// Repair the availability invariant after loading the two stores
///
/// The stores carry availability twice: as the book's token and as the
/// users' borrowed lists. The borrow records win. Walking users in roster
/// order and lists in borrow order, the first claim on a book stands and
/// later claims are dropped; every claimed book becomes lent, every
/// unclaimed book becomes available.
///
/// Returns (dropped claims, books whose flag was repaired).
fn reconcile(catalog: &mut Catalog, roster: &mut Roster) -> (usize, usize) {
    let mut claimed = HashSet::new();
    let mut dropped = 0;

    for user in roster.users_mut() {
        user.retain_borrowed(|id| {
            if claimed.insert(*id) {
                true
            } else {
                dropped += 1;
                false
            }
        });
    }

    let mut repaired = 0;
    for book in catalog.books_mut() {
        let should_be_available = !claimed.contains(&book.id);
        if book.available != should_be_available {
            book.available = should_be_available;
            repaired += 1;
        }
    }

    (dropped, repaired)
}
