//! Service layer for library-cli
//!
//! The service layer provides business logic on top of the domain
//! aggregates: validation at the record-creation boundary and the
//! borrow/return rules that span catalog and roster.

pub mod lending;
pub mod librarian;

pub use lending::LendingService;
pub use librarian::LibrarianService;
