//! Live chat sessions
//!
//! The transport is mock data held in memory; a push-messaging channel will
//! feed this board eventually.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::records::complaints::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub user_name: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub presence: Presence,
    pub messages: Vec<ChatMessage>,
}

/// All active chat sessions
#[derive(Debug, Default)]
pub struct ChatBoard {
    sessions: Vec<ChatSession>,
}

impl ChatBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let msg = |sender, text: &str, time: &str| ChatMessage {
            sender,
            text: text.to_string(),
            time: time.to_string(),
        };

        Self {
            sessions: vec![
                ChatSession {
                    id: "chat-1".to_string(),
                    user_name: "Rahul Kumar".to_string(),
                    last_message: "Is my passport ready?".to_string(),
                    time: "10:30 AM".to_string(),
                    unread: 2,
                    presence: Presence::Online,
                    messages: vec![
                        msg(
                            Sender::User,
                            "Hello, I applied for my passport renewal but it's stuck.",
                            "10:28 AM",
                        ),
                        msg(Sender::User, "Is my passport ready?", "10:30 AM"),
                    ],
                },
                ChatSession {
                    id: "chat-2".to_string(),
                    user_name: "Priya Sharma".to_string(),
                    last_message: "Thank you for the help.".to_string(),
                    time: "10:15 AM".to_string(),
                    unread: 0,
                    presence: Presence::Offline,
                    messages: vec![msg(Sender::User, "Thank you for the help.", "10:15 AM")],
                },
                ChatSession {
                    id: "chat-3".to_string(),
                    user_name: "Amit Singh".to_string(),
                    last_message: "I cannot upload my document.".to_string(),
                    time: "09:45 AM".to_string(),
                    unread: 0,
                    presence: Presence::Online,
                    messages: vec![msg(
                        Sender::User,
                        "I cannot upload my document.",
                        "09:45 AM",
                    )],
                },
            ],
        }
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn total_unread(&self) -> u32 {
        self.sessions.iter().map(|s| s.unread).sum()
    }

    /// Append an admin message to a session and clear its unread counter
    pub fn send(&mut self, session_id: &str, text: &str) -> Result<&ChatMessage> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| Error::ChatSessionNotFound(session_id.to_string()))?;

        let time = chrono::Local::now().format("%I:%M %p").to_string();
        session.messages.push(ChatMessage {
            sender: Sender::Admin,
            text: text.to_string(),
            time: time.clone(),
        });
        session.last_message = text.to_string();
        session.time = time;
        session.unread = 0;

        Ok(session.messages.last().expect("just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sessions() {
        let board = ChatBoard::seeded();
        assert_eq!(board.sessions().len(), 3);
        assert_eq!(board.total_unread(), 2);
    }

    #[test]
    fn test_send_appends_and_clears_unread() {
        let mut board = ChatBoard::seeded();
        board.send("chat-1", "Your passport is dispatched.").unwrap();

        let session = board.get("chat-1").unwrap();
        assert_eq!(session.messages.len(), 3);
        assert_eq!(session.last_message, "Your passport is dispatched.");
        assert_eq!(session.unread, 0);
        assert_eq!(session.messages.last().unwrap().sender, Sender::Admin);
    }

    #[test]
    fn test_send_unknown_session() {
        let mut board = ChatBoard::seeded();
        assert!(matches!(
            board.send("chat-9", "hello"),
            Err(Error::ChatSessionNotFound(_))
        ));
    }
}
