//! Operation handlers over the library document
//!
//! [`Library`] is the single owner of the in-memory document and the store
//! handle; the twelve circulation-desk operations live on it as methods,
//! split by entity:
//!
//! - [`books`]: add, remove, update, search, list
//! - [`users`]: register, delete, rename, list (plus `ensure_registered`)
//! - [`circulation`]: issue, return, reserve, list issued
//!
//! Every mutating operation follows the same contract: validate and fail
//! fast, mutate in memory, then persist the whole document write-through.
//! Validation failures leave the document untouched; a failed save keeps the
//! in-memory mutation and surfaces [`OpError::Persistence`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookbox::config::Config;
//! use bookbox::ops::Library;
//!
//! let config = Config::load()?;
//! let mut library = Library::open(&config);
//! library.add_book("Dune", Some("Frank Herbert"), 2)?;
//! library.issue_book("ines", "Dune", None)?;
//! ```

pub mod books;
pub mod circulation;
pub mod error;
pub mod users;

pub use error::{OpError, Result};
pub use users::RenameReport;

use crate::config::Config;
use crate::humanize::LoanPeriod;
use crate::observability::Metrics;
use crate::store::{JsonStore, LibraryData};

/// The aggregate root: in-memory document, persistence handle, operation
/// counters, and the configured default loan period.
pub struct Library {
    data: LibraryData,
    store: JsonStore,
    metrics: Metrics,
    loan_period: LoanPeriod,
}

impl Library {
    /// Load the document named by the configuration and wrap it in a service
    /// handle. A missing or corrupt data file starts empty, never fails.
    pub fn open(config: &Config) -> Self {
        let store = JsonStore::new(&config.storage.data_file);
        Self::with_store(store, config.circulation.loan_period)
    }

    pub fn with_store(store: JsonStore, loan_period: LoanPeriod) -> Self {
        let data = store.load();
        Self {
            data,
            store,
            metrics: Metrics::new(),
            loan_period,
        }
    }

    pub fn data(&self) -> &LibraryData {
        &self.data
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn default_loan_period(&self) -> LoanPeriod {
        self.loan_period
    }

    /// Write-through: every successful mutation rewrites the full document.
    fn commit(&mut self) -> Result<()> {
        match self.store.save(&self.data) {
            Ok(()) => {
                self.metrics.op_committed();
                Ok(())
            }
            Err(err) => {
                self.metrics.save_failed();
                Err(OpError::Persistence(err))
            }
        }
    }
}

/// Trimmed, non-blank required field.
fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(OpError::Validation(format!("{field} required")));
    }
    Ok(value)
}
