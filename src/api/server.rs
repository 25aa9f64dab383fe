//! HTTP portal server

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::guards::{require_auth, require_super_admin};
use crate::auth::AuthStore;
use crate::config::Config;
use crate::error::Result;
use crate::records::{
    ApplicationRegistry, AuditLog, ChatBoard, CitizenRegistry, NotificationFeed, TicketDesk,
};

use super::routes;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub auth: AuthStore,
    pub citizens: CitizenRegistry,
    pub applications: ApplicationRegistry,
    pub complaints: TicketDesk,
    pub chat: ChatBoard,
    pub notifications: NotificationFeed,
    pub audit: AuditLog,
}

impl AppState {
    /// State with all registries seeded with fixture data
    pub fn seeded(config: Config) -> Self {
        Self {
            config,
            auth: AuthStore::new(),
            citizens: CitizenRegistry::seeded(),
            applications: ApplicationRegistry::seeded(),
            complaints: TicketDesk::seeded(),
            chat: ChatBoard::seeded(),
            notifications: NotificationFeed::seeded(),
            audit: AuditLog::seeded(),
        }
    }
}

pub type SharedState = Arc<RwLock<AppState>>;

/// Run the HTTP portal server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let state = Arc::new(RwLock::new(AppState::seeded(config)));

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Portal listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    // Settings are restricted to SUPER_ADMIN on top of the auth guard
    let settings_pages = Router::new()
        .route("/settings", get(crate::ui::settings_page))
        .route("/settings/general", post(crate::ui::save_general_settings))
        .route(
            "/settings/security",
            post(crate::ui::save_security_settings),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_super_admin,
        ));

    let guarded_pages = Router::new()
        .route("/", get(crate::ui::dashboard))
        .route("/users", get(crate::ui::citizens_page))
        .route("/services", get(crate::ui::applications_page))
        .route(
            "/services/{id}/approve",
            post(crate::ui::approve_application_form),
        )
        .route(
            "/services/{id}/reject",
            post(crate::ui::reject_application_form),
        )
        .route("/complaints", get(crate::ui::complaints_page))
        .route(
            "/complaints/{id}/reply",
            post(crate::ui::complaint_reply_form),
        )
        .route(
            "/complaints/{id}/resolve",
            post(crate::ui::complaint_resolve_form),
        )
        .route("/chat", get(crate::ui::chat_page))
        .route("/chat/{id}/send", post(crate::ui::chat_send_form))
        .route(
            "/notifications/read-all",
            post(crate::ui::notifications_read_all_form),
        )
        .route("/profile", get(crate::ui::profile_page))
        .route("/profile/password", post(crate::ui::profile_password_form))
        .merge(settings_pages)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let guarded_api = Router::new()
        .route("/api/auth/session", get(routes::session_info))
        .route("/api/stats", get(routes::dashboard_stats))
        .route("/api/citizens", get(routes::list_citizens))
        .route("/api/applications", get(routes::list_applications))
        .route(
            "/api/applications/{id}/approve",
            post(routes::approve_application),
        )
        .route(
            "/api/applications/{id}/reject",
            post(routes::reject_application),
        )
        .route("/api/complaints/{id}/reply", post(routes::reply_to_ticket))
        .route("/api/complaints/{id}/resolve", post(routes::resolve_ticket))
        .route(
            "/api/complaints/{id}/escalate",
            post(routes::escalate_ticket),
        )
        .route("/api/chat/{id}/messages", post(routes::send_chat_message))
        .route("/api/notifications", get(routes::list_notifications))
        .route(
            "/api/notifications/read-all",
            post(routes::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{id}/read",
            post(routes::mark_notification_read),
        )
        .route(
            "/api/notifications/{id}",
            delete(routes::dismiss_notification),
        )
        .route("/api/settings", get(routes::get_settings))
        .route("/api/settings", put(routes::update_settings))
        .route("/api/profile/password", post(routes::change_password))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        // Open routes
        .route("/api/health", get(routes::health))
        .route("/api/auth/login", post(routes::login))
        .route("/api/auth/logout", post(routes::logout))
        .route("/login", get(crate::ui::login_page).post(crate::ui::login_submit))
        .route("/logout", post(crate::ui::logout_submit))
        // Guarded routes
        .merge(guarded_pages)
        .merge(guarded_api)
        // Anything else renders the portal's not-found page
        .fallback(crate::ui::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
