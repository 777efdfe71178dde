//! Books store codec
//!
//! One record per line: `<title>,<author>,<token>` where the token is one
//! of the two fixed availability literals. Lines with any other field
//! count are skipped; the skip count is surfaced in the load report.

use crate::models::{Book, Catalog};

/// On-disk marker for a book that can be borrowed
pub const AVAILABLE_TOKEN: &str = "available";

/// On-disk marker for a book that is currently lent out
pub const LENT_TOKEN: &str = "lent";

/// Decode the books store into a catalog
///
/// Returns the catalog and the number of malformed lines skipped. Fields
/// are trimmed; a record tagged with the lent token loads as unavailable,
/// any other token loads as available.
pub fn decode(lines: &[String]) -> (Catalog, usize) {
    let mut catalog = Catalog::new();
    let mut skipped = 0;

    for line in lines {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            skipped += 1;
            continue;
        }

        let title = parts[0].trim();
        let author = parts[1].trim();
        let available = parts[2].trim() != LENT_TOKEN;
        catalog.insert(Book::with_availability(title, author, available));
    }

    (catalog, skipped)
}

/// Encode the catalog for the books store, in catalog order
pub fn encode(catalog: &Catalog) -> Vec<String> {
    catalog
        .books()
        .iter()
        .map(|book| {
            format!(
                "{},{},{}",
                book.title,
                book.author,
                if book.available {
                    AVAILABLE_TOKEN
                } else {
                    LENT_TOKEN
                }
            )
        })
        .collect()
}
