//! Member operations: register, delete, rename, list.

use tracing::info;

use super::error::{OpError, Result};
use super::{Library, require};

/// How far a rename fanned out across the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub loans: usize,
    pub reservations: usize,
}

impl Library {
    pub fn register_user(&mut self, name: &str) -> Result<()> {
        let name = require("name", name)?;
        if self.data.users.iter().any(|u| u == name) {
            return Err(OpError::Conflict(format!(
                "user '{name}' already registered"
            )));
        }

        self.data.users.push(name.to_string());
        self.commit()?;
        info!(name, "User registered");
        Ok(())
    }

    /// Register the name only if it is new. Session-style front-ends accept
    /// any name at the door; an already-registered name is a no-op and does
    /// not touch the disk. Returns whether a registration happened.
    pub fn ensure_registered(&mut self, name: &str) -> Result<bool> {
        let name = require("name", name)?;
        if self.data.users.iter().any(|u| u == name) {
            return Ok(false);
        }

        self.data.users.push(name.to_string());
        self.commit()?;
        info!(name, "User auto-registered");
        Ok(true)
    }

    /// Remove a member. Blocked while the member holds any unreturned loan;
    /// on success the name is also purged from every reservation list.
    pub fn delete_user(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        let Some(idx) = self.data.users.iter().position(|u| u == name) else {
            return Err(OpError::NotFound(format!("user '{name}'")));
        };
        if self.data.user_on_loan(name) {
            return Err(OpError::Conflict(format!("user '{name}' has issued books")));
        }

        self.data.users.remove(idx);
        for book in self.data.books.values_mut() {
            book.reserved.retain(|r| r != name);
        }

        self.commit()?;
        info!(name, "User deleted");
        Ok(())
    }

    /// Rename a member, fanning the new name out to every loan record and
    /// every reservation list so nothing is left pointing at the old name.
    pub fn rename_user(&mut self, old: &str, new: &str) -> Result<RenameReport> {
        let old = old.trim();
        let Some(idx) = self.data.users.iter().position(|u| u == old) else {
            return Err(OpError::NotFound(format!("user '{old}'")));
        };
        let new = require("new name", new)?;

        self.data.users[idx] = new.to_string();

        let mut report = RenameReport::default();
        for tx in &mut self.data.issued {
            if tx.user == old {
                tx.user = new.to_string();
                report.loans += 1;
            }
        }
        for book in self.data.books.values_mut() {
            for slot in &mut book.reserved {
                if slot == old {
                    *slot = new.to_string();
                    report.reservations += 1;
                }
            }
        }

        self.commit()?;
        info!(old, new, "User renamed");
        Ok(report)
    }

    /// All registered names in registration order; an empty list means no
    /// members.
    pub fn list_users(&self) -> Vec<String> {
        self.data.users.clone()
    }
}
