//! Circulation operations: issue, return, reserve, and the open-loan listing.

use chrono::{Local, NaiveDateTime};
use tracing::info;

use super::Library;
use super::error::{OpError, Result};
use crate::humanize::LoanPeriod;
use crate::store::Loan;

impl Library {
    /// Issue one copy to a member.
    ///
    /// The loan period defaults to the configured one when the caller names
    /// none. Checks run user first, then title, then availability; nothing is
    /// mutated until all three pass.
    pub fn issue_book(
        &mut self,
        user: &str,
        title: &str,
        period: Option<LoanPeriod>,
    ) -> Result<Loan> {
        let user = user.trim();
        let title = title.trim();
        let period = period.unwrap_or(self.loan_period);

        if !self.data.users.iter().any(|u| u == user) {
            return Err(OpError::NotFound(format!("user '{user}'")));
        }
        let Some(book) = self.data.books.get_mut(title) else {
            return Err(OpError::NotFound(format!("book '{title}'")));
        };
        if book.qty == 0 {
            return Err(OpError::Unavailable(format!(
                "no copies of '{title}' available"
            )));
        }

        book.qty -= 1;
        let issued_on = now();
        let loan = Loan {
            user: user.to_string(),
            book: title.to_string(),
            issued_on,
            due_date: issued_on + period.as_duration(),
            returned: false,
            returned_on: None,
        };
        self.data.issued.push(loan.clone());

        self.commit()?;
        self.metrics.loan_issued();
        info!(user, title, %period, "Book issued");
        Ok(loan)
    }

    /// Close the most recently issued open loan matching the user/book pair.
    ///
    /// The newest-first scan is the tie-break when the pair has several
    /// historical loans: returning always resolves the latest open one.
    /// "Already returned" and "never issued" are the same failure.
    pub fn return_book(&mut self, user: &str, title: &str) -> Result<Loan> {
        let user = user.trim();
        let title = title.trim();

        let Some(tx) = self
            .data
            .issued
            .iter_mut()
            .rev()
            .find(|tx| tx.is_open() && tx.matches(user, title))
        else {
            return Err(OpError::NotFound(format!(
                "no open loan of '{title}' to '{user}'"
            )));
        };

        tx.returned = true;
        tx.returned_on = Some(now());
        let loan = tx.clone();

        if let Some(book) = self.data.books.get_mut(title) {
            book.qty += 1;
        }

        self.commit()?;
        info!(user, title, "Book returned");
        Ok(loan)
    }

    /// Append an advisory reservation and report the queue length.
    ///
    /// No dedup, no capacity check; reservations are never consumed
    /// automatically when copies free up.
    pub fn reserve_book(&mut self, user: &str, title: &str) -> Result<usize> {
        let user = user.trim();
        let title = title.trim();

        if !self.data.users.iter().any(|u| u == user) {
            return Err(OpError::NotFound(format!("user '{user}'")));
        }
        let Some(book) = self.data.books.get_mut(title) else {
            return Err(OpError::NotFound(format!("book '{title}'")));
        };

        book.reserved.push(user.to_string());
        let position = book.reserved.len();

        self.commit()?;
        info!(user, title, position, "Book reserved");
        Ok(position)
    }

    /// Every unreturned loan, one display line per loan.
    pub fn list_issued(&self) -> Vec<String> {
        self.data
            .issued
            .iter()
            .filter(|tx| tx.is_open())
            .map(|tx| {
                format!(
                    "{} → {} | Issued: {} | Due: {}",
                    tx.book,
                    tx.user,
                    tx.issued_on.format("%Y-%m-%dT%H:%M:%S"),
                    tx.due_date.format("%Y-%m-%d"),
                )
            })
            .collect()
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
