//! Custom error types for library-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for library-cli operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Borrow attempted on a book that is already lent out
    #[error("Book '{title}' is already lent out")]
    NotAvailable { title: String },

    /// Return attempted for a book absent from that user's borrowed list
    #[error("Book '{title}' is not among {user}'s borrowed books")]
    NotBorrowed { user: String, title: String },

    /// Removal attempted on a book that is currently lent out
    #[error("Book '{title}' is currently lent out and cannot be removed")]
    Lent { title: String },
}

impl LibraryError {
    /// Create a "not found" error for books
    pub fn book_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Book",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for library-cli operations
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LibraryError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LibraryError::book_not_found("Dune");
        assert_eq!(err.to_string(), "Book not found: Dune");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_available_error() {
        let err = LibraryError::NotAvailable {
            title: "Dune".into(),
        };
        assert_eq!(err.to_string(), "Book 'Dune' is already lent out");
    }

    #[test]
    fn test_not_borrowed_error() {
        let err = LibraryError::NotBorrowed {
            user: "Bob".into(),
            title: "Dune".into(),
        };
        assert_eq!(
            err.to_string(),
            "Book 'Dune' is not among Bob's borrowed books"
        );
    }

    #[test]
    fn test_duplicate_error() {
        let err = LibraryError::Duplicate {
            entity_type: "User",
            identifier: "alice".into(),
        };
        assert_eq!(err.to_string(), "User already exists: alice");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let lib_err: LibraryError = io_err.into();
        assert!(matches!(lib_err, LibraryError::Io(_)));
    }
}
