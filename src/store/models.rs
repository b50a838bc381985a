//! Document model for the persisted library file.
//!
//! The on-disk contract is a single JSON document:
//!
//! ```json
//! {
//!   "books": {
//!     "Dune": { "author": "Frank Herbert", "qty": 2, "reserved": ["ines"] }
//!   },
//!   "users": ["ines", "marco"],
//!   "issued": [
//!     {
//!       "user": "marco",
//!       "book": "Dune",
//!       "issued_on": "2026-08-01T10:12:44.031200",
//!       "due_date": "2026-08-15T10:12:44.031200",
//!       "returned": true,
//!       "returned_on": "2026-08-04T09:02:11.551903"
//!     }
//!   ]
//! }
//! ```
//!
//! Field presence matters: `returned_on` is written only once a loan has been
//! returned. Timestamps are zone-less ISO-8601 local wall-clock values, which
//! is what existing data files contain. Every field tolerates absence so that
//! partial or hand-edited documents still load.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One title in the catalog, keyed externally by its exact title string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub author: String,
    /// Currently available physical copies.
    #[serde(default)]
    pub qty: u32,
    /// Reservation names in insertion order; duplicates allowed.
    #[serde(default)]
    pub reserved: Vec<String>,
}

/// One issue event. Append-only; a return mutates `returned`/`returned_on`
/// in place, records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub user: String,
    pub book: String,
    pub issued_on: NaiveDateTime,
    pub due_date: NaiveDateTime,
    #[serde(default)]
    pub returned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_on: Option<NaiveDateTime>,
}

impl Loan {
    pub fn is_open(&self) -> bool {
        !self.returned
    }

    pub fn matches(&self, user: &str, book: &str) -> bool {
        self.user == user && self.book == book
    }
}

/// The aggregate document: everything the library knows, loaded whole and
/// rewritten whole on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryData {
    #[serde(default)]
    pub books: BTreeMap<String, Book>,
    /// Registered member names in registration order.
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub issued: Vec<Loan>,
}

impl LibraryData {
    /// True while any unreturned loan references the given title.
    pub fn title_on_loan(&self, title: &str) -> bool {
        self.issued.iter().any(|tx| tx.book == title && tx.is_open())
    }

    /// True while any unreturned loan references the given user.
    pub fn user_on_loan(&self, name: &str) -> bool {
        self.issued.iter().any(|tx| tx.user == name && tx.is_open())
    }
}
