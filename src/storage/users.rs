//! Users store codec
//!
//! One record per line: `<name>:<title1>,<title2>,...`. Lines without
//! exactly one separator are skipped. Borrowed titles resolve against the
//! catalog case-insensitively; among duplicate titles, an unclaimed copy
//! still tagged lent is preferred over the plain first match, so a loan on
//! the second copy stays on that copy across a save/load. Titles that
//! don't resolve are dropped. A user with nothing borrowed renders as
//! `name:` and the empty trailing segment loads back as an empty list.

use std::collections::HashSet;

use crate::models::{Book, BookId, Catalog, Roster};

/// Decode the users store into a roster
///
/// Users named only here and never registered are implicitly created, in
/// file order. Returns the roster and the number of malformed lines
/// skipped.
pub fn decode(lines: &[String], catalog: &Catalog) -> (Roster, usize) {
    let mut roster = Roster::new();
    let mut claimed = HashSet::new();
    let mut skipped = 0;

    for line in lines {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            skipped += 1;
            continue;
        }

        let name = parts[0].trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }

        let user = roster.find_or_register(name);
        for title in parts[1].split(',') {
            let title = title.trim();
            if title.is_empty() {
                continue;
            }
            if let Some(book) = resolve_title(catalog, title, &claimed) {
                user.record_borrow(book.id);
                claimed.insert(book.id);
            }
        }
    }

    (roster, skipped)
}

/// Resolve a borrowed title against the catalog
///
/// Preference order among case-insensitive matches: an unclaimed copy
/// tagged lent, then any unclaimed copy, then the first match (whose
/// duplicate claim the reconciliation pass will drop).
fn resolve_title<'a>(
    catalog: &'a Catalog,
    title: &str,
    claimed: &HashSet<BookId>,
) -> Option<&'a Book> {
    let candidates: Vec<&Book> = catalog
        .books()
        .iter()
        .filter(|b| b.title_matches(title))
        .collect();

    candidates
        .iter()
        .copied()
        .find(|b| !b.available && !claimed.contains(&b.id))
        .or_else(|| {
            candidates
                .iter()
                .copied()
                .find(|b| !claimed.contains(&b.id))
        })
        .or_else(|| candidates.first().copied())
}

/// Encode the roster for the users store, in registration order
///
/// Borrowed ids that no longer resolve against the catalog are not
/// written out.
pub fn encode(roster: &Roster, catalog: &Catalog) -> Vec<String> {
    roster
        .users()
        .iter()
        .map(|user| {
            let titles: Vec<&str> = user
                .borrowed()
                .iter()
                .filter_map(|&id| catalog.get(id).map(|b| b.title.as_str()))
                .collect();
            format!("{}:{}", user.name, titles.join(","))
        })
        .collect()
}
