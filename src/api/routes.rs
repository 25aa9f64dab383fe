//! API route handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::server::{AppState, SharedState};
use crate::auth::models::{LoginRequest, LoginResponse};
use crate::auth::{create_token, AdminUser};
use crate::config::{Config, PortalConfig, SecurityConfig};
use crate::error::{Error, Result};
use crate::records::DashboardStats;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub portal: Option<PortalConfig>,
    pub security: Option<SecurityConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

// Auth routes

/// Verify credentials against the provisioned admin accounts, mint a token
/// and store the session. Failed attempts land in the audit log.
pub fn authenticate(state: &mut AppState, email: &str, password: &str) -> Result<LoginResponse> {
    let account = state.config.get_admin(email).cloned();

    let verified = account
        .as_ref()
        .map(|a| bcrypt::verify(password, &a.password_hash).unwrap_or(false))
        .unwrap_or(false);

    let Some(account) = account.filter(|_| verified) else {
        state.audit.record(
            "SYSTEM",
            "system",
            &format!("Failed login attempt for {}", email),
            "-",
        );
        return Err(Error::InvalidCredentials);
    };

    let user = AdminUser::new(account.email.clone(), account.role);
    let access_token = create_token(&user)?;
    state
        .auth
        .set_credentials(user.clone(), access_token.clone());
    state.audit.record(
        &account.role.to_string(),
        &account.email,
        "signed in to the admin portal",
        "-",
    );

    tracing::info!("Admin {} signed in", account.email);

    Ok(LoginResponse { access_token, user })
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match authenticate(&mut state, &req.email, &req.password) {
        Ok(response) => (StatusCode::OK, Json(ApiResponse::ok(response))).into_response(),
        Err(e) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::err(e.to_string())),
        )
            .into_response(),
    }
}

pub async fn logout(State(state): State<SharedState>) -> impl IntoResponse {
    let mut state = state.write().await;

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            "signed out of the admin portal",
            "-",
        );
    }
    state.auth.clear();

    Json(ApiResponse::ok("signed out"))
}

pub async fn session_info(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(ApiResponse::ok(state.auth.snapshot().user))
}

// Dashboard

pub async fn dashboard_stats(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let stats = DashboardStats::gather(&state.citizens, &state.applications, &state.complaints);
    Json(ApiResponse::ok(stats))
}

// Citizen routes

pub async fn list_citizens(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    let (citizens, cursor) = state
        .citizens
        .page(query.page.unwrap_or(1), query.per_page.unwrap_or(10));

    Json(ApiResponse::ok(serde_json::json!({
        "citizens": citizens,
        "current_page": cursor.current_page,
        "total_pages": cursor.total_pages,
    })))
}

// Application routes

pub async fn list_applications(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    let (applications, cursor) = state
        .applications
        .page(query.page.unwrap_or(1), query.per_page.unwrap_or(10));

    Json(ApiResponse::ok(serde_json::json!({
        "applications": applications,
        "current_page": cursor.current_page,
        "total_pages": cursor.total_pages,
    })))
}

pub async fn approve_application(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut state = state.write().await;
    let application = state.applications.approve(&id)?.clone();

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            &format!("approved application {}", id),
            "-",
        );
    }

    Ok(Json(ApiResponse::ok(application)))
}

pub async fn reject_application(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut state = state.write().await;
    let application = state.applications.reject(&id)?.clone();

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            &format!("rejected application {}", id),
            "-",
        );
    }

    Ok(Json(ApiResponse::ok(application)))
}

// Complaint routes

pub async fn reply_to_ticket(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<impl IntoResponse> {
    if req.text.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::err("Reply text must not be empty")),
        )
            .into_response());
    }

    let mut state = state.write().await;
    let message = state.complaints.reply(&id, req.text.trim())?.clone();
    Ok(Json(ApiResponse::ok(message)).into_response())
}

pub async fn resolve_ticket(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut state = state.write().await;
    let ticket = state.complaints.resolve(&id)?.clone();

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            &format!("resolved Complaint ID {}", id),
            "-",
        );
    }

    Ok(Json(ApiResponse::ok(ticket)))
}

pub async fn escalate_ticket(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut state = state.write().await;
    let ticket = state.complaints.escalate(&id)?.clone();
    Ok(Json(ApiResponse::ok(ticket)))
}

// Chat routes

pub async fn send_chat_message(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<impl IntoResponse> {
    if req.text.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::err("Message text must not be empty")),
        )
            .into_response());
    }

    let mut state = state.write().await;
    let message = state.chat.send(&id, req.text.trim())?.clone();
    Ok(Json(ApiResponse::ok(message)).into_response())
}

// Notification routes

pub async fn list_notifications(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(ApiResponse::ok(serde_json::json!({
        "notifications": state.notifications.all(),
        "unread": state.notifications.unread_count(),
    })))
}

pub async fn mark_notification_read(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut state = state.write().await;
    state.notifications.mark_read(&id)?;
    Ok(Json(ApiResponse::ok("read")))
}

pub async fn mark_all_notifications_read(State(state): State<SharedState>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.notifications.mark_all_read();
    Json(ApiResponse::ok("read"))
}

pub async fn dismiss_notification(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let mut state = state.write().await;
    state.notifications.dismiss(&id)?;
    Ok(Json(ApiResponse::ok("dismissed")))
}

// Settings routes

pub async fn get_settings(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(ApiResponse::ok(serde_json::json!({
        "portal": state.config.portal,
        "security": state.config.security,
    })))
}

/// Merge a settings update into a copy of the current config.
///
/// The live config is untouched until the copy has been persisted, so a
/// failed save cannot leave memory and file disagreeing.
pub fn merged_settings(current: &Config, req: UpdateSettingsRequest) -> Config {
    let mut candidate = current.clone();
    if let Some(portal) = req.portal {
        candidate.portal = portal;
    }
    if let Some(security) = req.security {
        candidate.security = security;
    }
    candidate
}

pub async fn update_settings(
    State(state): State<SharedState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let candidate = merged_settings(&state.config, req);

    // Persist first; commit to the live config only on success
    if let Err(e) = crate::config::save_config(&candidate) {
        tracing::error!("Failed to save config: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::err("Failed to save configuration")),
        )
            .into_response();
    }
    state.config = candidate;

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            "updated system settings",
            "-",
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::ok("Settings updated and persisted")),
    )
        .into_response()
}

// Profile routes

pub async fn change_password(
    State(state): State<SharedState>,
    Json(req): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    if req.current_password.is_empty() || req.new_password.len() < 8 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::err(
                "New password must be at least 8 characters long",
            )),
        )
            .into_response();
    }

    // No account backend yet; acknowledge the request and leave a trace
    let mut state = state.write().await;
    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            "requested a password change",
            "-",
        );
    }

    Json(ApiResponse::ok("Password change requested")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_settings_leaves_live_config_untouched() {
        let current = Config::default();
        let mut portal = PortalConfig::default();
        portal.maintenance_mode = true;
        portal.support_email = "helpdesk@citizen.gov".to_string();

        let candidate = merged_settings(
            &current,
            UpdateSettingsRequest {
                portal: Some(portal),
                security: None,
            },
        );

        assert!(candidate.portal.maintenance_mode);
        assert_eq!(candidate.portal.support_email, "helpdesk@citizen.gov");
        // The source config only changes once the candidate is persisted
        assert!(!current.portal.maintenance_mode);
        assert_eq!(current.portal.support_email, "support@citizen.gov");
    }

    #[test]
    fn test_merged_settings_keeps_omitted_sections() {
        let mut current = Config::default();
        current.security.allowed_ips = vec!["192.168.1.12".to_string()];

        let candidate = merged_settings(
            &current,
            UpdateSettingsRequest {
                portal: None,
                security: None,
            },
        );

        assert_eq!(candidate.security.allowed_ips, current.security.allowed_ips);
        assert_eq!(candidate.portal.helpline, current.portal.helpline);
    }
}
