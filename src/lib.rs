//! library-cli - Terminal-based library catalog and lending manager
//!
//! This library provides the core functionality for library-cli: a catalog
//! of books, a roster of users, the borrow/return rules that tie them
//! together, and flat-text persistence that keeps the two stores
//! consistent across runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (books, users, catalog, roster)
//! - `services`: Business logic layer (lending, librarian administration)
//! - `storage`: Flat-text persistence gateway with load-time reconciliation
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use library_cli::config::{paths::LibraryPaths, settings::Settings};
//! use library_cli::storage::Storage;
//!
//! let paths = LibraryPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let (catalog, roster) = storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::LibraryError;
