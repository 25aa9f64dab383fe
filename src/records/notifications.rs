//! Admin notification feed

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    UserSignup,
    ServiceRequest,
    Complaint,
    SystemAlert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub is_read: bool,
    /// Where the admin lands when they click the notification
    pub link_to: String,
}

/// Feed of portal notifications shown in the header bell
#[derive(Debug, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mk = |id: &str, kind, title: &str, message: &str, time: &str, read, link: &str| {
            Notification {
                id: id.to_string(),
                kind,
                title: title.to_string(),
                message: message.to_string(),
                time: time.to_string(),
                is_read: read,
                link_to: link.to_string(),
            }
        };

        Self {
            notifications: vec![
                mk(
                    "notif-1",
                    NotificationKind::SystemAlert,
                    "High Server CPU Usage",
                    "The main database is experiencing high load.",
                    "2 mins ago",
                    false,
                    "/settings",
                ),
                mk(
                    "notif-2",
                    NotificationKind::ServiceRequest,
                    "New Passport Application",
                    "Rahul Kumar submitted a new Tatkal request.",
                    "15 mins ago",
                    false,
                    "/services",
                ),
                mk(
                    "notif-3",
                    NotificationKind::Complaint,
                    "Complaint Escalated",
                    "Ticket #CMP-1029 has been escalated to Super Admin.",
                    "1 hour ago",
                    false,
                    "/complaints",
                ),
                mk(
                    "notif-4",
                    NotificationKind::UserSignup,
                    "New Citizen Registered",
                    "Priya Sharma verified her account.",
                    "3 hours ago",
                    true,
                    "/users",
                ),
            ],
        }
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Mark a single notification read
    pub fn mark_read(&mut self, id: &str) -> Result<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotificationNotFound(id.to_string()))?;
        notification.is_read = true;
        Ok(())
    }

    /// Mark the entire feed read
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    /// Remove a notification from the feed
    pub fn dismiss(&mut self, id: &str) -> Result<()> {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() == before {
            return Err(Error::NotificationNotFound(id.to_string()));
        }
        Ok(())
    }
}
