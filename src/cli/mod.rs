//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod book;
pub mod circulation;
pub mod user;

pub use book::{handle_book_command, BookCommands};
pub use circulation::{handle_borrow, handle_return};
pub use user::{handle_user_command, UserCommands};
