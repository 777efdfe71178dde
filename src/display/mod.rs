//! Display formatting for terminal output
//!
//! Pure formatting: everything returns a String, printing is left to the
//! CLI handlers.

pub mod book;
pub mod user;

pub use book::{format_book_details, format_book_list};
pub use user::{format_borrowed_list, format_user_list};
