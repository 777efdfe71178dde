//! User CLI commands
//!
//! Implements roster administration commands.

use clap::Subcommand;

use crate::display::{format_borrowed_list, format_user_list};
use crate::error::{LibraryError, LibraryResult};
use crate::models::{Catalog, Roster};
use crate::services::LibrarianService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Register {
        /// User name (case-insensitively unique)
        name: String,
    },
    /// List all registered users
    List,
    /// Show a user's borrowed books
    Show {
        /// User name
        name: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    catalog: &mut Catalog,
    roster: &mut Roster,
    cmd: UserCommands,
) -> LibraryResult<()> {
    match cmd {
        UserCommands::Register { name } => {
            LibrarianService::new(catalog, roster).register_user(&name)?;
            storage.save_all(catalog, roster)?;
            println!("Registered user '{}'.", name.trim());
        }

        UserCommands::List => {
            print!("{}", format_user_list(roster));
        }

        UserCommands::Show { name } => {
            let user = roster
                .find_by_name(&name)
                .ok_or_else(|| LibraryError::user_not_found(&name))?;
            print!("{}", format_borrowed_list(user, catalog));
        }
    }

    Ok(())
}
