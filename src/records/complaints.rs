//! Complaint tickets with their message threads and citizen context

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    Resolved,
    Escalated,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "OPEN"),
            TicketStatus::Resolved => write!(f, "RESOLVED"),
            TicketStatus::Escalated => write!(f, "ESCALATED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sender {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: String,
}

/// Citizen details bundled with the ticket so support admins see who they
/// are talking to without a second lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketContext {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub account_age: String,
    pub service_id: String,
    pub service_name: String,
    pub service_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintTicket {
    pub id: String,
    pub title: String,
    pub status: TicketStatus,
    pub messages: Vec<TicketMessage>,
    pub context: TicketContext,
}

/// Support desk holding all complaint tickets
#[derive(Debug, Default)]
pub struct TicketDesk {
    tickets: Vec<ComplaintTicket>,
}

impl TicketDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let msg = |id: &str, sender, text: &str, at: &str| TicketMessage {
            id: id.to_string(),
            sender,
            text: text.to_string(),
            timestamp: at.to_string(),
        };

        Self {
            tickets: vec![ComplaintTicket {
                id: "CMP-1029".to_string(),
                title: "Delay in Passport Renewal Verification".to_string(),
                status: TicketStatus::Open,
                messages: vec![
                    msg(
                        "m1",
                        Sender::User,
                        "Hello, I applied for my passport renewal 3 weeks ago but the status is still stuck on pending. Can you please check?",
                        "10:30 AM",
                    ),
                    msg(
                        "m2",
                        Sender::Admin,
                        "Dear Citizen, let me pull up your service record right away. Please give me a moment.",
                        "10:35 AM",
                    ),
                    msg(
                        "m3",
                        Sender::User,
                        "Thank you, I have an upcoming flight next month so it is quite urgent.",
                        "10:38 AM",
                    ),
                ],
                context: TicketContext {
                    user_id: "USR-445".to_string(),
                    name: "Rahul Kumar".to_string(),
                    email: "rahul.k@example.com".to_string(),
                    phone: "+91-9876543210".to_string(),
                    account_age: "2 years, 4 months".to_string(),
                    service_id: "SRV-99".to_string(),
                    service_name: "Passport Renewal (Tatkal)".to_string(),
                    service_status: "Pending Police Verification".to_string(),
                },
            }],
        }
    }

    pub fn get(&self, id: &str) -> Option<&ComplaintTicket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[ComplaintTicket] {
        &self.tickets
    }

    pub fn open_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.status != TicketStatus::Resolved)
            .count()
    }

    /// Append an admin reply to a ticket's thread
    pub fn reply(&mut self, id: &str, text: &str) -> Result<&TicketMessage> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;

        let message = TicketMessage {
            id: format!("m{}", ticket.messages.len() + 1),
            sender: Sender::Admin,
            text: text.to_string(),
            timestamp: chrono::Local::now().format("%I:%M %p").to_string(),
        };
        ticket.messages.push(message);
        Ok(ticket.messages.last().expect("just pushed"))
    }

    /// Mark a ticket resolved
    pub fn resolve(&mut self, id: &str) -> Result<&ComplaintTicket> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;

        ticket.status = TicketStatus::Resolved;
        Ok(ticket)
    }

    /// Escalate a ticket to the super admin
    pub fn escalate(&mut self, id: &str) -> Result<&ComplaintTicket> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;

        ticket.status = TicketStatus::Escalated;
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ticket_thread() {
        let desk = TicketDesk::seeded();
        let ticket = desk.get("CMP-1029").unwrap();
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.messages.len(), 3);
        assert_eq!(ticket.context.name, "Rahul Kumar");
    }

    #[test]
    fn test_reply_appends_admin_message() {
        let mut desk = TicketDesk::seeded();
        desk.reply("CMP-1029", "We have forwarded your case.").unwrap();

        let ticket = desk.get("CMP-1029").unwrap();
        assert_eq!(ticket.messages.len(), 4);
        let last = ticket.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Admin);
        assert_eq!(last.text, "We have forwarded your case.");
    }

    #[test]
    fn test_resolve_closes_ticket() {
        let mut desk = TicketDesk::seeded();
        desk.resolve("CMP-1029").unwrap();
        assert_eq!(desk.get("CMP-1029").unwrap().status, TicketStatus::Resolved);
        assert_eq!(desk.open_count(), 0);
    }

    #[test]
    fn test_reply_unknown_ticket() {
        let mut desk = TicketDesk::seeded();
        assert!(matches!(
            desk.reply("CMP-0000", "hello"),
            Err(Error::TicketNotFound(_))
        ));
    }
}
