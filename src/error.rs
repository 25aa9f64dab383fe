//! Error types for Civicdesk

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Citizen '{0}' not found")]
    CitizenNotFound(String),

    #[error("Application '{0}' not found")]
    ApplicationNotFound(String),

    #[error("Application '{0}' is not pending")]
    ApplicationNotPending(String),

    #[error("Ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("Chat session '{0}' not found")]
    ChatSessionNotFound(String),

    #[error("Notification '{0}' not found")]
    NotificationNotFound(String),

    #[error("Config file not found. Run 'civicdesk init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidCredentials | Error::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            Error::CitizenNotFound(_)
            | Error::ApplicationNotFound(_)
            | Error::TicketNotFound(_)
            | Error::ChatSessionNotFound(_)
            | Error::NotificationNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            Error::ApplicationNotPending(_) => {
                (StatusCode::CONFLICT, self.to_string()).into_response()
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: Error) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_credential_errors_are_unauthorized() {
        assert_eq!(status_of(Error::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(Error::InvalidToken("expired".to_string())),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_missing_records_are_not_found() {
        assert_eq!(
            status_of(Error::ApplicationNotFound("APP-9999".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(Error::TicketNotFound("CMP-0000".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_decided_application_is_a_conflict() {
        assert_eq!(
            status_of(Error::ApplicationNotPending("APP-8002".to_string())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_everything_else_is_internal() {
        assert_eq!(
            status_of(Error::Config("bad".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
