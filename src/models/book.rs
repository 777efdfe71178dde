//! Book model
//!
//! Represents a single catalog entry and its availability state.

use std::fmt;

use super::ids::BookId;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier (in-memory only, regenerated on load)
    pub id: BookId,

    /// Book title; the lookup key, matched case-insensitively
    pub title: String,

    /// Author name
    pub author: String,

    /// Whether the book can currently be borrowed
    pub available: bool,
}

impl Book {
    /// Create a new available book
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Create a book with an explicit availability state (used by the loader)
    pub fn with_availability(
        title: impl Into<String>,
        author: impl Into<String>,
        available: bool,
    ) -> Self {
        let mut book = Self::new(title, author);
        book.available = available;
        book
    }

    /// Case-insensitive title match
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }

    /// Validate the book
    ///
    /// Commas are rejected because the books store uses them as field
    /// separators. Titles additionally reject colons: borrowed titles are
    /// written into the colon-delimited users store, where one would split
    /// the record and lose the loan on reload. Authors never appear there.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if let Some(c) = self.title.chars().find(|&c| c == ',' || c == ':') {
            return Err(BookValidationError::InvalidCharacter(c, "title"));
        }
        if self.author.contains(',') {
            return Err(BookValidationError::InvalidCharacter(',', "author"));
        }
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.title,
            self.author,
            if self.available { "available" } else { "lent" }
        )
    }
}

/// Validation errors for books
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    InvalidCharacter(char, &'static str),
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Book title cannot be empty"),
            Self::EmptyAuthor => write!(f, "Book author cannot be empty"),
            Self::InvalidCharacter(c, field) => {
                write!(f, "Book {} cannot contain '{}'", field, c)
            }
        }
    }
}

impl std::error::Error for BookValidationError {}
