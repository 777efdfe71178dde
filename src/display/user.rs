//! User display formatting
//!
//! Formats the roster and per-user borrowed lists for terminal output.

use crate::models::{Catalog, Roster, User};

/// Format the roster as a table with borrow counts
pub fn format_user_list(roster: &Roster) -> String {
    let users = roster.users();
    if users.is_empty() {
        return "No registered users.\n".to_string();
    }

    let name_width = users
        .iter()
        .map(|u| u.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {}\n",
        "Name",
        "Borrowed",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}\n",
        "",
        "",
        name_width = name_width,
    ));

    for user in users {
        output.push_str(&format!(
            "{:<name_width$}  {}\n",
            user.name,
            user.borrowed().len(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a user's borrowed list, resolving ids against the catalog
pub fn format_borrowed_list(user: &User, catalog: &Catalog) -> String {
    let mut output = format!("Borrowed books for '{}':\n", user.name);

    if user.borrowed().is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    for &id in user.borrowed() {
        match catalog.get(id) {
            Some(book) => output.push_str(&format!("  {}, {}\n", book.title, book.author)),
            None => output.push_str(&format!("  {} (no longer in catalog)\n", id)),
        }
    }

    output
}
