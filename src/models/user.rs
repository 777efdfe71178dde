//! User model
//!
//! A registered patron and the list of books they currently have out.
//! Borrowed books are tracked by `BookId` into the catalog arena rather
//! than by shared references, so removing a book can never leave a user
//! holding a dangling pointer.

use std::fmt;

use super::ids::{BookId, UserId};

/// A registered library patron
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier (in-memory only, regenerated on load)
    pub id: UserId,

    /// User name; the identity key, matched case-insensitively
    pub name: String,

    /// Books currently borrowed, in borrow order
    borrowed: Vec<BookId>,
}

impl User {
    /// Create a new user with an empty borrowed list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    /// Case-insensitive name match
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The books this user currently has out, in borrow order
    pub fn borrowed(&self) -> &[BookId] {
        &self.borrowed
    }

    /// Whether this user currently has the given book out
    pub fn has_borrowed(&self, id: BookId) -> bool {
        self.borrowed.contains(&id)
    }

    /// Append a book to the borrowed list
    pub(crate) fn record_borrow(&mut self, id: BookId) {
        self.borrowed.push(id);
    }

    /// Remove a book from the borrowed list; returns whether it was present
    pub(crate) fn record_return(&mut self, id: BookId) -> bool {
        if let Some(pos) = self.borrowed.iter().position(|&b| b == id) {
            self.borrowed.remove(pos);
            true
        } else {
            false
        }
    }

    /// Retain only the borrowed entries the predicate accepts
    ///
    /// Used by the load-time reconciliation pass to drop duplicate claims.
    pub(crate) fn retain_borrowed(&mut self, f: impl FnMut(&BookId) -> bool) {
        self.borrowed.retain(f);
    }

    /// Validate the user
    ///
    /// Colons and commas are rejected because the flat-text store uses them
    /// as separators; a name containing either would not survive a save/load
    /// round trip.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if let Some(c) = self.name.chars().find(|&c| c == ':' || c == ',') {
            return Err(UserValidationError::InvalidCharacter(c));
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    InvalidCharacter(char),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "User name cannot be empty"),
            Self::InvalidCharacter(c) => write!(f, "User name cannot contain '{}'", c),
        }
    }
}

impl std::error::Error for UserValidationError {}
