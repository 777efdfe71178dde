//! Book display formatting
//!
//! Formats the catalog for terminal output. Books are numbered by their
//! 1-based catalog position; the number is positional, not a stable ID.

use crate::models::{Book, Catalog};
use crate::storage::books::{AVAILABLE_TOKEN, LENT_TOKEN};

/// Format the catalog as a numbered table
pub fn format_book_list(catalog: &Catalog) -> String {
    let books = catalog.books();
    if books.is_empty() {
        return "No books in the catalog.\n".to_string();
    }

    // Calculate column widths
    let title_width = books
        .iter()
        .map(|b| b.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let author_width = books
        .iter()
        .map(|b| b.author.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<title_width$}  {:<author_width$}  {}\n",
        "#",
        "Title",
        "Author",
        "Status",
        title_width = title_width,
        author_width = author_width,
    ));

    output.push_str(&format!(
        "{:->4}  {:-<title_width$}  {:-<author_width$}  {:-<9}\n",
        "",
        "",
        "",
        "",
        title_width = title_width,
        author_width = author_width,
    ));

    for (i, book) in books.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<title_width$}  {:<author_width$}  {}\n",
            i + 1,
            book.title,
            book.author,
            status(book),
            title_width = title_width,
            author_width = author_width,
        ));
    }

    output
}

/// Format a single book's details
pub fn format_book_details(catalog: &Catalog, book: &Book) -> String {
    let position = catalog
        .books()
        .iter()
        .position(|b| b.id == book.id)
        .map(|p| (p + 1).to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut output = String::new();
    output.push_str(&format!("Book: {}\n", book.title));
    output.push_str(&format!("  Author:   {}\n", book.author));
    output.push_str(&format!("  Status:   {}\n", status(book)));
    output.push_str(&format!("  Number:   {}\n", position));
    output.push_str(&format!("  ID:       {}\n", book.id));
    output
}

fn status(book: &Book) -> &'static str {
    if book.available {
        AVAILABLE_TOKEN
    } else {
        LENT_TOKEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert_eq!(format_book_list(&catalog), "No books in the catalog.\n");
    }

    #[test]
    fn test_list_is_one_based() {
        let mut catalog = Catalog::new();
        catalog.add("Dune", "Herbert");
        catalog.add("Hyperion", "Simmons");

        let output = format_book_list(&catalog);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[2].trim_start().starts_with('1'));
        assert!(lines[2].contains("Dune"));
        assert!(lines[3].trim_start().starts_with('2'));
        assert!(lines[3].contains("Hyperion"));
    }

    #[test]
    fn test_list_shows_status() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Dune", "Herbert");
        catalog.get_mut(id).unwrap().available = false;

        let output = format_book_list(&catalog);
        assert!(output.contains("lent"));
    }

    #[test]
    fn test_details() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Dune", "Herbert");
        let book = catalog.get(id).unwrap().clone();

        let output = format_book_details(&catalog, &book);
        assert!(output.contains("Book: Dune"));
        assert!(output.contains("Author:   Herbert"));
        assert!(output.contains("available"));
        assert!(output.contains("Number:   1"));
    }
}
