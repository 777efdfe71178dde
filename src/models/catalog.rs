//! Catalog aggregate
//!
//! An ordered arena of books. Insertion order is meaningful only for the
//! 1-based numbering shown to users: removing a book shifts the displayed
//! numbers of everything after it, so the number is positional, not a
//! stable ID. Stable identity is the `BookId`.

use super::book::Book;
use super::ids::BookId;

/// The full set of books known to the system
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new available book and return its id
    ///
    /// No uniqueness check: duplicate titles are permitted, and title-based
    /// lookup always resolves to the first match.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        let book = Book::new(title, author);
        let id = book.id;
        self.books.push(book);
        id
    }

    /// Append an already-constructed book (used by the loader)
    pub fn insert(&mut self, book: Book) -> BookId {
        let id = book.id;
        self.books.push(book);
        id
    }

    /// Remove the first book whose title matches case-insensitively
    pub fn remove(&mut self, title: &str) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.title_matches(title))?;
        Some(self.books.remove(pos))
    }

    /// Find the first book whose title matches case-insensitively
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title_matches(title))
    }

    /// Look up a book by its 1-based display position
    pub fn find_by_index(&self, index: usize) -> Option<&Book> {
        if index == 0 {
            return None;
        }
        self.books.get(index - 1)
    }

    /// Resolve a user-supplied key: title match first, then 1-based index
    pub fn resolve(&self, key: &str) -> Option<&Book> {
        if let Some(book) = self.find_by_title(key) {
            return Some(book);
        }
        key.trim().parse::<usize>().ok().and_then(|i| self.find_by_index(i))
    }

    /// Get a book by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Get a book by id, mutably
    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Read-only view of the books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Mutable iteration over the books (used by reconciliation)
    pub(crate) fn books_mut(&mut self) -> impl Iterator<Item = &mut Book> {
        self.books.iter_mut()
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
