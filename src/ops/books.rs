//! Catalog operations: add, remove, update, search, list.

use tracing::info;

use super::error::{OpError, Result};
use super::{Library, require};
use crate::store::Book;

impl Library {
    /// Add copies of a title, creating the record on first sight.
    ///
    /// Quantities accumulate across repeated adds, never reset. The author is
    /// only taken when the record is created; an absent or blank author
    /// defaults to "Unknown". Returns the new total quantity.
    pub fn add_book(&mut self, title: &str, author: Option<&str>, qty: u32) -> Result<u32> {
        let title = require("title", title)?;
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or("Unknown");

        let book = self
            .data
            .books
            .entry(title.to_string())
            .or_insert_with(|| Book {
                author: author.to_string(),
                qty: 0,
                reserved: Vec::new(),
            });
        book.qty += qty;
        let new_qty = book.qty;

        self.commit()?;
        info!(title, qty, "Book added");
        Ok(new_qty)
    }

    /// Delete a title outright, reservations included. Blocked while any
    /// unreturned loan references it.
    pub fn remove_book(&mut self, title: &str) -> Result<()> {
        let title = title.trim();
        if !self.data.books.contains_key(title) {
            return Err(OpError::NotFound(format!("book '{title}'")));
        }
        if self.data.title_on_loan(title) {
            return Err(OpError::Conflict(format!(
                "book '{title}' is currently issued"
            )));
        }

        self.data.books.remove(title);
        self.commit()?;
        info!(title, "Book removed");
        Ok(())
    }

    /// Update author and/or quantity. Unspecified fields retain their prior
    /// values; a given quantity replaces the stored one, it does not add.
    pub fn update_book(&mut self, title: &str, author: Option<&str>, qty: Option<u32>) -> Result<()> {
        let title = title.trim();
        let book = self
            .data
            .books
            .get_mut(title)
            .ok_or_else(|| OpError::NotFound(format!("book '{title}'")))?;

        if let Some(author) = author.map(str::trim).filter(|a| !a.is_empty()) {
            book.author = author.to_string();
        }
        if let Some(qty) = qty {
            book.qty = qty;
        }

        self.commit()?;
        info!(title, "Book updated");
        Ok(())
    }

    /// Case-insensitive substring search over titles and authors.
    ///
    /// A blank query is a validation failure; a query matching nothing
    /// returns an empty list, which is a distinct outcome, not an error.
    pub fn search_books(&self, query: &str) -> Result<Vec<String>> {
        let query = require("search query", query)?.to_lowercase();

        Ok(self
            .data
            .books
            .iter()
            .filter(|(title, book)| {
                title.to_lowercase().contains(&query)
                    || book.author.to_lowercase().contains(&query)
            })
            .map(|(title, book)| render_book_line(title, book, false))
            .collect())
    }

    /// Every book as one display line; an empty list means an empty catalog.
    pub fn list_books(&self) -> Vec<String> {
        self.data
            .books
            .iter()
            .map(|(title, book)| render_book_line(title, book, true))
            .collect()
    }
}

fn render_book_line(title: &str, book: &Book, with_reservations: bool) -> String {
    let mut line = format!("{} — {} | Qty: {}", title, book.author, book.qty);
    if with_reservations && !book.reserved.is_empty() {
        line.push_str(&format!(" | Reserved: {}", book.reserved.join(", ")));
    }
    line
}
