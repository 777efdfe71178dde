//! Book CLI commands
//!
//! Implements catalog administration commands, bridging clap argument
//! parsing with the librarian service.

use clap::Subcommand;

use crate::display::{format_book_details, format_book_list};
use crate::error::{LibraryError, LibraryResult};
use crate::models::{Catalog, Roster};
use crate::services::LibrarianService;
use crate::storage::Storage;

/// Book subcommands
#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a new book to the catalog
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
    },
    /// Remove a book from the catalog
    Remove {
        /// Book title (first case-insensitive match)
        title: String,
    },
    /// List all books
    List,
    /// Show a single book's details
    Show {
        /// Book title or 1-based list number
        book: String,
    },
}

/// Handle a book command
pub fn handle_book_command(
    storage: &Storage,
    catalog: &mut Catalog,
    roster: &mut Roster,
    cmd: BookCommands,
) -> LibraryResult<()> {
    match cmd {
        BookCommands::Add { title, author } => {
            LibrarianService::new(catalog, roster).add_book(&title, &author)?;
            storage.save_all(catalog, roster)?;
            println!("Added book '{}' by {}.", title.trim(), author.trim());
        }

        BookCommands::Remove { title } => {
            let removed = LibrarianService::new(catalog, roster).remove_book(&title)?;
            storage.save_all(catalog, roster)?;
            println!("Removed book '{}'.", removed.title);
        }

        BookCommands::List => {
            print!("{}", format_book_list(catalog));
        }

        BookCommands::Show { book } => {
            let found = catalog
                .resolve(&book)
                .ok_or_else(|| LibraryError::book_not_found(&book))?;
            print!("{}", format_book_details(catalog, found));
        }
    }

    Ok(())
}
