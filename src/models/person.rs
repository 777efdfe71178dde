//! Person identity value
//!
//! A plain name-carrying value identifying who is acting. There is no role
//! hierarchy: the librarian and patron behavior sets live in independent
//! services (`LibrarianService`, `LendingService`) that operate on the
//! catalog and roster, not on the person itself.

use std::fmt;

/// Someone interacting with the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Display name
    pub name: String,
}

impl Person {
    /// Create a new person
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let person = Person::new("Alice");
        assert_eq!(format!("{}", person), "Alice");
    }
}
