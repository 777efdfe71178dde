//! Lending service
//!
//! The patron behavior set: borrowing and returning books. These two
//! operations are the only place a book's availability flag changes, which
//! keeps the invariant that a book is unavailable exactly when it sits in
//! one user's borrowed list.

use crate::error::{LibraryError, LibraryResult};
use crate::models::{BookId, Catalog, Roster};

/// Service enforcing borrow/return invariants across catalog and roster
pub struct LendingService<'a> {
    catalog: &'a mut Catalog,
    roster: &'a mut Roster,
}

impl<'a> LendingService<'a> {
    /// Create a new lending service
    pub fn new(catalog: &'a mut Catalog, roster: &'a mut Roster) -> Self {
        Self { catalog, roster }
    }

    /// Borrow a book for a user
    ///
    /// Fails with `NotAvailable` if the book is already lent out; no state
    /// changes on failure.
    pub fn borrow(&mut self, user_name: &str, book_id: BookId) -> LibraryResult<()> {
        if self.roster.find_by_name(user_name).is_none() {
            return Err(LibraryError::user_not_found(user_name));
        }

        let book = self
            .catalog
            .get_mut(book_id)
            .ok_or_else(|| LibraryError::book_not_found(book_id.to_string()))?;

        if !book.available {
            return Err(LibraryError::NotAvailable {
                title: book.title.clone(),
            });
        }

        book.available = false;
        self.roster
            .find_by_name_mut(user_name)
            .expect("user checked above")
            .record_borrow(book_id);

        Ok(())
    }

    /// Return a book for a user
    ///
    /// Fails with `NotBorrowed` if the book is not in that user's borrowed
    /// list. The failure deliberately does not distinguish "never borrowed"
    /// from "borrowed by someone else".
    pub fn return_book(&mut self, user_name: &str, book_id: BookId) -> LibraryResult<()> {
        let title = self
            .catalog
            .get(book_id)
            .map(|b| b.title.clone())
            .unwrap_or_else(|| book_id.to_string());

        let user = self
            .roster
            .find_by_name_mut(user_name)
            .ok_or_else(|| LibraryError::user_not_found(user_name))?;

        if !user.record_return(book_id) {
            return Err(LibraryError::NotBorrowed {
                user: user.name.clone(),
                title,
            });
        }

        if let Some(book) = self.catalog.get_mut(book_id) {
            book.available = true;
        }

        Ok(())
    }
}
