//! Borrow and return CLI handlers
//!
//! The patron-facing commands. The book argument resolves by title first,
//! then as a 1-based list number.

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Catalog, Roster};
use crate::services::LendingService;
use crate::storage::Storage;

/// Handle `library borrow <user> <book>`
pub fn handle_borrow(
    storage: &Storage,
    catalog: &mut Catalog,
    roster: &mut Roster,
    user: &str,
    book: &str,
) -> LibraryResult<()> {
    let found = catalog
        .resolve(book)
        .ok_or_else(|| LibraryError::book_not_found(book))?;
    let (book_id, title) = (found.id, found.title.clone());

    LendingService::new(catalog, roster).borrow(user, book_id)?;
    storage.save_all(catalog, roster)?;

    println!("'{}' borrowed by {}.", title, user);
    Ok(())
}

/// Handle `library return <user> <book>`
pub fn handle_return(
    storage: &Storage,
    catalog: &mut Catalog,
    roster: &mut Roster,
    user: &str,
    book: &str,
) -> LibraryResult<()> {
    let found = catalog
        .resolve(book)
        .ok_or_else(|| LibraryError::book_not_found(book))?;
    let (book_id, title) = (found.id, found.title.clone());

    LendingService::new(catalog, roster).return_book(user, book_id)?;
    storage.save_all(catalog, roster)?;

    println!("'{}' returned by {}.", title, user);
    Ok(())
}
