//! Core data models for library-cli
//!
//! This module contains the data structures that represent the lending
//! domain: books, users, and the catalog/roster aggregates that own them.

pub mod book;
pub mod catalog;
pub mod ids;
pub mod person;
pub mod roster;
pub mod user;

pub use book::Book;
pub use catalog::Catalog;
pub use ids::{BookId, UserId};
pub use person::Person;
pub use roster::Roster;
pub use user::User;
