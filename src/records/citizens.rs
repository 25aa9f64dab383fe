//! Citizen accounts registry

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::PageCursor;

/// Citizen account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CitizenStatus {
    Active,
    Suspended,
    Unverified,
}

impl fmt::Display for CitizenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitizenStatus::Active => write!(f, "Active"),
            CitizenStatus::Suspended => write!(f, "Suspended"),
            CitizenStatus::Unverified => write!(f, "Unverified"),
        }
    }
}

/// A registered citizen account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: CitizenStatus,
    pub joined_at: chrono::NaiveDate,
}

/// Registry of citizen accounts
#[derive(Debug, Default)]
pub struct CitizenRegistry {
    citizens: Vec<Citizen>,
}

impl CitizenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with fixture accounts
    pub fn seeded() -> Self {
        let mk = |id: &str, name: &str, email: &str, phone: &str, status, joined: &str| Citizen {
            id: id.to_string(),
            full_name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            status,
            joined_at: joined.parse().expect("fixture date"),
        };

        Self {
            citizens: vec![
                mk(
                    "USR-1001",
                    "Rahul Kumar",
                    "rahul.k@example.com",
                    "+91-9876543210",
                    CitizenStatus::Active,
                    "2025-10-12",
                ),
                mk(
                    "USR-1002",
                    "Priya Sharma",
                    "priya.sharma@example.com",
                    "+91-9876543211",
                    CitizenStatus::Active,
                    "2025-11-05",
                ),
                mk(
                    "USR-1003",
                    "Amit Singh",
                    "amit.singh99@example.com",
                    "+91-9123456789",
                    CitizenStatus::Suspended,
                    "2026-01-20",
                ),
                mk(
                    "USR-1004",
                    "Neha Gupta",
                    "neha.g@example.com",
                    "+91-9988776655",
                    CitizenStatus::Unverified,
                    "2026-02-15",
                ),
                mk(
                    "USR-1005",
                    "Vikram Patel",
                    "v.patel@example.com",
                    "+91-9000111222",
                    CitizenStatus::Active,
                    "2026-02-20",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.citizens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citizens.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Citizen> {
        self.citizens.iter().find(|c| c.id == id)
    }

    pub fn all(&self) -> &[Citizen] {
        &self.citizens
    }

    /// One page of accounts plus the cursor for the presenter
    pub fn page(&self, page: u32, per_page: usize) -> (Vec<Citizen>, PageCursor) {
        super::page_of(&self.citizens, page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_registry() {
        let registry = CitizenRegistry::seeded();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.get("USR-1001").map(|c| c.full_name.as_str()),
            Some("Rahul Kumar")
        );
    }

    #[test]
    fn test_paging() {
        let registry = CitizenRegistry::seeded();
        let (window, cursor) = registry.page(2, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(cursor.total_pages, 3);
        assert_eq!(window[0].id, "USR-1003");
    }
}
