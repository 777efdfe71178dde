//! Librarian service
//!
//! The librarian behavior set: catalog administration and user
//! registration. Validation happens here, at the boundary where new
//! records enter the system.

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, BookId, Catalog, Roster, User, UserId};

/// Service for catalog and roster administration
pub struct LibrarianService<'a> {
    catalog: &'a mut Catalog,
    roster: &'a mut Roster,
}

impl<'a> LibrarianService<'a> {
    /// Create a new librarian service
    pub fn new(catalog: &'a mut Catalog, roster: &'a mut Roster) -> Self {
        Self { catalog, roster }
    }

    /// Add a new book to the catalog
    ///
    /// Duplicate titles are permitted; lookups resolve to the first match.
    pub fn add_book(&mut self, title: &str, author: &str) -> LibraryResult<BookId> {
        let book = Book::new(title.trim(), author.trim());
        book.validate()
            .map_err(|e| LibraryError::Validation(e.to_string()))?;

        Ok(self.catalog.insert(book))
    }

    /// Remove the first book whose title matches case-insensitively
    ///
    /// Removal of a currently-lent book is forbidden, so a user's borrowed
    /// list can never end up pointing at a book the catalog no longer holds.
    pub fn remove_book(&mut self, title: &str) -> LibraryResult<Book> {
        let book = self
            .catalog
            .find_by_title(title)
            .ok_or_else(|| LibraryError::book_not_found(title))?;

        if !book.available {
            return Err(LibraryError::Lent {
                title: book.title.clone(),
            });
        }

        Ok(self.catalog.remove(title).expect("found above"))
    }

    /// Register a new user
    pub fn register_user(&mut self, name: &str) -> LibraryResult<UserId> {
        let name = name.trim();

        let candidate = User::new(name);
        candidate
            .validate()
            .map_err(|e| LibraryError::Validation(e.to_string()))?;

        let user = self.roster.register(name)?;
        Ok(user.id)
    }
}
