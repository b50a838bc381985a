use bookbox::humanize::LoanPeriod;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookbox")]
#[command(about = "BookBox CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add copies of a book to the catalog
    AddBook {
        title: String,
        /// Author, recorded when the title is first created
        #[arg(long)]
        author: Option<String>,
        /// Number of copies to add
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a book from the catalog
    RemoveBook { title: String },
    /// Update a book's author and/or quantity
    UpdateBook {
        title: String,
        #[arg(long)]
        author: Option<String>,
        /// Replacement quantity (replaces the stored count)
        #[arg(long)]
        qty: Option<u32>,
    },
    /// Search books by title or author substring
    Search { query: String },
    /// List every book in the catalog
    ListBooks,
    /// Register a new member
    Register { name: String },
    /// Delete a member
    DeleteUser { name: String },
    /// Rename a member everywhere they appear
    RenameUser { old: String, new: String },
    /// List registered members
    ListUsers,
    /// Issue a book to a member
    Issue {
        user: String,
        title: String,
        /// Loan period, e.g. "14d" or "2w" (defaults to the configured period)
        #[arg(long)]
        period: Option<LoanPeriod>,
    },
    /// Return an issued book
    Return { user: String, title: String },
    /// Reserve a book for a member
    Reserve { user: String, title: String },
    /// List open loans
    ListIssued,
}
