//! JSON-file persistence layer for the library document
//!
//! This module owns the durable contract: one JSON document holding the
//! catalog (`books`), the registered members (`users`), and the loan history
//! (`issued`). The document is loaded whole at startup and rewritten whole
//! after every mutating operation.
//!
//! Load failure is never fatal: a missing or unparsable file yields the empty
//! document. Save failure surfaces to the caller as [`StoreError`] and leaves
//! the in-memory state untouched.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookbox::store::JsonStore;
//!
//! let store = JsonStore::new("library_data.json");
//! let mut data = store.load();
//! data.users.push("ines".to_string());
//! store.save(&data)?;
//! ```

pub mod error;
pub mod models;
pub mod store;

pub use error::{Result, StoreError};
pub use models::{Book, LibraryData, Loan};
pub use store::JsonStore;
