//! In-memory data layer for the portal
//!
//! Every registry is seeded with fixture data and mutated under the server's
//! state lock. There is no persistence; a real backing API replaces this
//! layer wholesale.

pub mod applications;
pub mod audit;
pub mod chat;
pub mod citizens;
pub mod complaints;
pub mod notifications;

pub use applications::{ApplicationRegistry, ApplicationStatus, ServiceApplication};
pub use audit::{AuditEntry, AuditLog};
pub use chat::{ChatBoard, ChatMessage, ChatSession, Presence};
pub use citizens::{Citizen, CitizenRegistry, CitizenStatus};
pub use complaints::{ComplaintTicket, Sender, TicketDesk, TicketMessage, TicketStatus};
pub use notifications::{Notification, NotificationFeed, NotificationKind};

use serde::Serialize;

use crate::table::PageCursor;

/// Slice one page out of a full record list.
///
/// Pages are 1-based. An out-of-range page yields an empty window; the cursor
/// always reports at least one page so the presenter has sane edges. Both
/// parameters arrive from the query string, so zero is clamped rather than
/// trusted.
pub fn page_of<T: Clone>(records: &[T], page: u32, per_page: usize) -> (Vec<T>, PageCursor) {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let total_pages = (records.len().div_ceil(per_page)).max(1) as u32;
    let start = ((page - 1) as usize) * per_page;

    let window = if start >= records.len() {
        Vec::new()
    } else {
        records[start..(start + per_page).min(records.len())].to_vec()
    };

    (window, PageCursor::new(page, total_pages))
}

/// Headline numbers for the dashboard stat cards
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_citizens: usize,
    pub active_services: usize,
    pub pending_complaints: usize,
}

impl DashboardStats {
    pub fn gather(
        citizens: &CitizenRegistry,
        applications: &ApplicationRegistry,
        complaints: &TicketDesk,
    ) -> Self {
        Self {
            total_citizens: citizens.len(),
            active_services: applications.approved_count(),
            pending_complaints: complaints.open_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_of_first_page() {
        let records: Vec<u32> = (1..=7).collect();
        let (window, cursor) = page_of(&records, 1, 3);
        assert_eq!(window, vec![1, 2, 3]);
        assert_eq!(cursor, PageCursor::new(1, 3));
    }

    #[test]
    fn test_page_of_last_partial_page() {
        let records: Vec<u32> = (1..=7).collect();
        let (window, cursor) = page_of(&records, 3, 3);
        assert_eq!(window, vec![7]);
        assert_eq!(cursor.total_pages, 3);
    }

    #[test]
    fn test_page_of_out_of_range() {
        let records: Vec<u32> = (1..=7).collect();
        let (window, _) = page_of(&records, 9, 3);
        assert!(window.is_empty());
    }

    #[test]
    fn test_page_of_empty_records() {
        let records: Vec<u32> = Vec::new();
        let (window, cursor) = page_of(&records, 1, 3);
        assert!(window.is_empty());
        assert_eq!(cursor.total_pages, 1);
    }

    #[test]
    fn test_page_of_clamps_zero_per_page() {
        let records: Vec<u32> = (1..=7).collect();
        let (window, cursor) = page_of(&records, 1, 0);
        assert_eq!(window, vec![1]);
        assert_eq!(cursor.total_pages, 7);
    }

    #[test]
    fn test_page_of_clamps_zero_page() {
        let records: Vec<u32> = (1..=7).collect();
        let (window, cursor) = page_of(&records, 0, 3);
        assert_eq!(window, vec![1, 2, 3]);
        assert_eq!(cursor.current_page, 1);
        assert!(!cursor.prev_enabled());
    }
}
