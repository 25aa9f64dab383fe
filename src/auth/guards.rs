//! Navigation guards
//!
//! Pure functions of a session snapshot, re-evaluated on every request. The
//! axum middleware wrappers below translate a `Redirect` outcome into an HTTP
//! redirect response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::api::server::SharedState;
use crate::auth::models::AdminRole;
use crate::auth::store::SessionSnapshot;

/// Result of evaluating a guard against the current session
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Render the requested page
    Allowed,
    /// Issue a navigation to `to`, optionally carrying the originating
    /// location for a post-login return
    Redirect { to: String, from: Option<String> },
}

/// Kick unauthenticated navigation to the login page.
///
/// The requested path travels along so the admin lands back on the page they
/// wanted after a successful login.
pub fn route_guard(snapshot: &SessionSnapshot, requested_path: &str) -> GuardOutcome {
    if !snapshot.is_authenticated
        || snapshot.access_token.is_none()
        || snapshot.user.is_none()
    {
        return GuardOutcome::Redirect {
            to: "/login".to_string(),
            from: Some(requested_path.to_string()),
        };
    }

    GuardOutcome::Allowed
}

/// Kick navigation back to the dashboard when the admin's role is not in the
/// allow-list.
pub fn role_guard(snapshot: &SessionSnapshot, allowed_roles: &[AdminRole]) -> GuardOutcome {
    let allowed = snapshot
        .user
        .as_ref()
        .map(|user| allowed_roles.contains(&user.role))
        .unwrap_or(false);

    if allowed {
        GuardOutcome::Allowed
    } else {
        GuardOutcome::Redirect {
            to: "/".to_string(),
            from: None,
        }
    }
}

fn redirect_response(to: &str, from: Option<&str>) -> Response {
    match from {
        Some(from) => {
            // The origin may itself carry a query string
            let encoded = urlencoding::encode(from);
            Redirect::to(&format!("{}?from={}", to, encoded)).into_response()
        }
        None => Redirect::to(to).into_response(),
    }
}

/// Middleware requiring an authenticated session
pub async fn require_auth(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    let snapshot = state.read().await.auth.snapshot();

    match route_guard(&snapshot, req.uri().path()) {
        GuardOutcome::Allowed => next.run(req).await,
        GuardOutcome::Redirect { to, from } => redirect_response(&to, from.as_deref()),
    }
}

/// Middleware requiring the SUPER_ADMIN role
pub async fn require_super_admin(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    let snapshot = state.read().await.auth.snapshot();

    match role_guard(&snapshot, &[AdminRole::SuperAdmin]) {
        GuardOutcome::Allowed => next.run(req).await,
        GuardOutcome::Redirect { to, from } => redirect_response(&to, from.as_deref()),
    }
}
