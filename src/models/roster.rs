//! Roster aggregate
//!
//! The set of registered users, keyed by case-insensitive name with
//! insertion order preserved for listing.

use crate::error::{LibraryError, LibraryResult};

use super::user::User;

/// The full set of registered patrons
#[derive(Debug, Clone, Default)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user
    ///
    /// Fails with `Duplicate` if a case-insensitive name match already
    /// exists. Users are never deleted once registered.
    pub fn register(&mut self, name: &str) -> LibraryResult<&User> {
        if self.find_by_name(name).is_some() {
            return Err(LibraryError::Duplicate {
                entity_type: "User",
                identifier: name.to_string(),
            });
        }
        self.users.push(User::new(name));
        Ok(self.users.last().expect("just pushed"))
    }

    /// Find a user by name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name_matches(name))
    }

    /// Find a user by name, case-insensitively, mutably
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.name_matches(name))
    }

    /// Find a user by name, creating them if absent (used by the loader:
    /// a user appearing only in the users store is implicitly registered)
    pub fn find_or_register(&mut self, name: &str) -> &mut User {
        let pos = match self.users.iter().position(|u| u.name_matches(name)) {
            Some(pos) => pos,
            None => {
                self.users.push(User::new(name));
                self.users.len() - 1
            }
        };
        &mut self.users[pos]
    }

    /// Read-only view of the users in registration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Mutable iteration over the users (used by reconciliation)
    pub(crate) fn users_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
