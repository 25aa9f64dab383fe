//! Web UI handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::api::server::SharedState;
use crate::records::{
    ApplicationStatus, ChatSession, Citizen, CitizenStatus, ComplaintTicket, DashboardStats,
    Presence, Sender, ServiceApplication,
};
use crate::table::{escape_html, present, render_table, Column};

use super::layout::{admin_page, bare_page};

const PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct PageParam {
    pub page: Option<u32>,
}

// Dashboard

/// Dashboard page - headline stat cards
pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let state = state.read().await;
    let stats = DashboardStats::gather(&state.citizens, &state.applications, &state.complaints);

    let card = |label: &str, value: String, accent: &str| {
        format!(
            r#"
            <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-6 flex items-center gap-4 border-l-4 {accent}">
                <div>
                    <h3 class="text-slate-500 text-sm font-medium">{label}</h3>
                    <p class="text-3xl font-bold text-slate-800 mt-1">{value}</p>
                </div>
            </div>
            "#,
            accent = accent,
            label = label,
            value = value
        )
    };

    let content = format!(
        r#"
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-slate-800">Dashboard Overview</h2>
            <p class="text-sm text-slate-500 mt-1">Welcome to the Citizen Portal Administration.</p>
        </div>
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            {citizens}
            {services}
            {complaints}
        </div>
        "#,
        citizens = card(
            "Total Citizens",
            stats.total_citizens.to_string(),
            "border-l-blue-500"
        ),
        services = card(
            "Active Services",
            stats.active_services.to_string(),
            "border-l-green-500"
        ),
        complaints = card(
            "Pending Complaints",
            stats.pending_complaints.to_string(),
            "border-l-red-500"
        ),
    );

    Html(admin_page(
        "Dashboard",
        "dashboard",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

// Citizens

fn citizen_status_badge(status: CitizenStatus) -> String {
    let classes = match status {
        CitizenStatus::Active => "bg-green-100 text-green-700 border-green-200",
        CitizenStatus::Suspended => "bg-red-100 text-red-700 border-red-200",
        CitizenStatus::Unverified => "bg-yellow-100 text-yellow-700 border-yellow-200",
    };
    format!(
        r#"<span class="px-3 py-1 text-xs font-bold rounded-full border {}">{}</span>"#,
        classes, status
    )
}

fn citizen_columns() -> Vec<Column<Citizen>> {
    vec![
        Column::field("Citizen ID", |c: &Citizen| c.id.clone()),
        Column::render("Citizen Details", |c: &Citizen| {
            format!(
                r#"<div><p class="font-bold text-slate-800">{}</p><p class="text-xs text-slate-500">{}</p></div>"#,
                escape_html(&c.full_name),
                escape_html(&c.email)
            )
        }),
        Column::field("Phone Number", |c: &Citizen| c.phone.clone()),
        Column::render("Account Status", |c: &Citizen| {
            citizen_status_badge(c.status)
        }),
        Column::field("Joined Date", |c: &Citizen| c.joined_at.to_string()),
        Column::blank("Actions"),
    ]
}

/// User management page - paginated citizen accounts table
pub async fn citizens_page(
    State(state): State<SharedState>,
    Query(params): Query<PageParam>,
) -> Html<String> {
    let state = state.read().await;
    let (citizens, cursor) = state.citizens.page(params.page.unwrap_or(1), PAGE_SIZE);

    let view = present(&citizens, &citizen_columns(), false, cursor);
    let table = render_table(&view, "/users");

    let content = format!(
        r#"
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-slate-800">User Management</h2>
            <p class="text-sm text-slate-500 mt-1">View, manage, and verify citizen accounts.</p>
        </div>
        {table}
        "#,
        table = table
    );

    Html(admin_page(
        "User Management",
        "users",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

// Service applications

fn application_status_badge(status: ApplicationStatus) -> String {
    let classes = match status {
        ApplicationStatus::Approved => "bg-green-100 text-green-700 border-green-200",
        ApplicationStatus::Rejected => "bg-red-100 text-red-700 border-red-200",
        ApplicationStatus::Pending => "bg-yellow-100 text-yellow-700 border-yellow-200",
    };
    format!(
        r#"<span class="px-3 py-1 text-xs font-bold rounded-full border {}">{}</span>"#,
        classes, status
    )
}

fn application_columns() -> Vec<Column<ServiceApplication>> {
    vec![
        Column::field("App ID", |a: &ServiceApplication| {
            a.application_id.clone()
        }),
        Column::render("Service Details", |a: &ServiceApplication| {
            format!(
                r#"<div><p class="font-bold text-slate-800">{}</p><p class="text-xs text-slate-500">Applicant: {}</p></div>"#,
                escape_html(&a.service_name),
                escape_html(&a.applicant_name)
            )
        }),
        Column::field("Date Applied", |a: &ServiceApplication| {
            a.applied_date.to_string()
        }),
        Column::render("Application Status", |a: &ServiceApplication| {
            application_status_badge(a.status)
        }),
        Column::render("Admin Actions", |a: &ServiceApplication| {
            if a.status == ApplicationStatus::Pending {
                format!(
                    r#"
                    <div class="flex items-center gap-2">
                        <form method="post" action="/services/{id}/approve">
                            <button type="submit" class="px-2 py-1 text-xs bg-green-600 hover:bg-green-700 text-white rounded">Approve</button>
                        </form>
                        <form method="post" action="/services/{id}/reject">
                            <button type="submit" class="px-2 py-1 text-xs bg-red-600 hover:bg-red-700 text-white rounded">Reject</button>
                        </form>
                    </div>
                    "#,
                    id = a.application_id
                )
            } else {
                String::new()
            }
        }),
    ]
}

/// Service applications page - review queue table
pub async fn applications_page(
    State(state): State<SharedState>,
    Query(params): Query<PageParam>,
) -> Html<String> {
    let state = state.read().await;
    let (applications, cursor) = state.applications.page(params.page.unwrap_or(1), PAGE_SIZE);

    let view = present(&applications, &application_columns(), false, cursor);
    let table = render_table(&view, "/services");

    let content = format!(
        r#"
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-slate-800">Service Applications</h2>
            <p class="text-sm text-slate-500 mt-1">Review, approve, or reject citizen service requests.</p>
        </div>
        {table}
        "#,
        table = table
    );

    Html(admin_page(
        "Service Applications",
        "services",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

pub async fn approve_application_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let mut state = state.write().await;
    match state.applications.approve(&id) {
        Ok(_) => Redirect::to("/services").into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn reject_application_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let mut state = state.write().await;
    match state.applications.reject(&id) {
        Ok(_) => Redirect::to("/services").into_response(),
        Err(e) => e.into_response(),
    }
}

// Complaints & support

fn ticket_status_badge(ticket: &ComplaintTicket) -> String {
    format!(
        r#"<span class="px-2 py-0.5 text-xs bg-yellow-100 text-yellow-700 rounded-full border border-yellow-200">{}</span>"#,
        ticket.status
    )
}

fn ticket_thread(ticket: &ComplaintTicket) -> String {
    ticket
        .messages
        .iter()
        .map(|m| {
            let (align, bubble) = match m.sender {
                Sender::User => ("justify-start", "bg-white border border-slate-200"),
                Sender::Admin => ("justify-end", "bg-blue-500 text-white"),
            };
            format!(
                r#"
                <div class="flex {align}">
                    <div class="{bubble} p-3 rounded-2xl max-w-[70%] shadow-sm">
                        <p class="text-sm">{text}</p>
                        <span class="text-[10px] opacity-70 mt-1 block">{time}</span>
                    </div>
                </div>
                "#,
                align = align,
                bubble = bubble,
                text = escape_html(&m.text),
                time = escape_html(&m.timestamp),
            )
        })
        .collect()
}

/// Complaints page - ticket thread plus citizen context pane
pub async fn complaints_page(State(state): State<SharedState>) -> Html<String> {
    let state = state.read().await;

    let Some(ticket) = state.complaints.all().first() else {
        let content = r#"<p class="text-slate-500">No open complaints.</p>"#.to_string();
        return Html(admin_page(
            "Complaints",
            "complaints",
            state.auth.user(),
            &state.notifications,
            &content,
        ));
    };

    let content = format!(
        r#"
        <div class="flex flex-col lg:flex-row gap-6">
            <div class="flex-1 bg-white rounded-xl border border-slate-200 shadow-sm flex flex-col">
                <div class="p-4 border-b border-slate-100 flex items-center justify-between">
                    <div>
                        <h2 class="text-lg font-bold text-slate-800 flex items-center gap-2">{title} {badge}</h2>
                        <p class="text-sm text-slate-500 mt-0.5">Ticket ID: {id}</p>
                    </div>
                    <form method="post" action="/complaints/{id}/resolve">
                        <button type="submit" class="px-3 py-1.5 text-sm bg-green-600 hover:bg-green-700 text-white rounded-md">Mark Resolved</button>
                    </form>
                </div>
                <div class="flex-1 p-6 space-y-4">{thread}</div>
                <div class="p-4 border-t border-slate-200">
                    <form method="post" action="/complaints/{id}/reply" class="flex items-center gap-2">
                        <input type="text" name="text" placeholder="Type your reply..." required
                               class="flex-1 bg-slate-50 border border-slate-200 rounded-full px-4 py-2.5 text-sm" />
                        <button type="submit" class="px-4 py-2.5 bg-blue-500 text-white rounded-full hover:bg-blue-600 text-sm">Send</button>
                    </form>
                </div>
            </div>
            <div class="w-full lg:w-80 space-y-4">
                <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-5">
                    <h4 class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-4">Citizen Context</h4>
                    <p class="font-bold text-slate-800">{name}</p>
                    <p class="text-sm text-slate-500">{email}</p>
                    <p class="text-sm text-slate-500">{phone}</p>
                    <p class="text-xs text-slate-400 mt-2">Account age: {age}</p>
                </div>
                <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-5">
                    <h4 class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-4">Related Service</h4>
                    <p class="font-bold text-slate-800">{service}</p>
                    <p class="text-sm text-slate-500">{service_status}</p>
                    <p class="text-xs text-slate-400 mt-2">{service_id}</p>
                </div>
            </div>
        </div>
        "#,
        title = escape_html(&ticket.title),
        badge = ticket_status_badge(ticket),
        id = ticket.id,
        thread = ticket_thread(ticket),
        name = escape_html(&ticket.context.name),
        email = escape_html(&ticket.context.email),
        phone = escape_html(&ticket.context.phone),
        age = escape_html(&ticket.context.account_age),
        service = escape_html(&ticket.context.service_name),
        service_status = escape_html(&ticket.context.service_status),
        service_id = ticket.context.service_id,
    );

    Html(admin_page(
        "Complaints & Support",
        "complaints",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

#[derive(Debug, Deserialize)]
pub struct MessageForm {
    pub text: String,
}

pub async fn complaint_reply_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<MessageForm>,
) -> Response {
    if form.text.trim().is_empty() {
        return Redirect::to("/complaints").into_response();
    }

    let mut state = state.write().await;
    match state.complaints.reply(&id, form.text.trim()) {
        Ok(_) => Redirect::to("/complaints").into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn complaint_resolve_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let mut state = state.write().await;
    let outcome = state.complaints.resolve(&id).map(|t| t.clone());
    match outcome {
        Ok(ticket) => {
            if let Some(user) = state.auth.user().cloned() {
                state.audit.record(
                    &user.role.to_string(),
                    &user.email,
                    &format!("resolved Complaint ID {}", ticket.id),
                    "-",
                );
            }
            Redirect::to("/complaints").into_response()
        }
        Err(e) => e.into_response(),
    }
}

// Live chat

#[derive(Debug, Deserialize)]
pub struct ChatParam {
    pub chat: Option<String>,
}

fn chat_session_list(sessions: &[ChatSession], active_id: &str) -> String {
    sessions
        .iter()
        .map(|s| {
            let active = if s.id == active_id {
                "bg-blue-50 border-l-4 border-l-blue-500"
            } else {
                "border-l-4 border-l-transparent"
            };
            let presence = match s.presence {
                Presence::Online => r#"<span class="text-green-500 text-xs">&#9679;</span>"#,
                Presence::Offline => "",
            };
            let unread = if s.unread > 0 {
                format!(
                    r#"<span class="w-5 h-5 bg-blue-500 text-white text-xs font-bold flex items-center justify-center rounded-full">{}</span>"#,
                    s.unread
                )
            } else {
                String::new()
            };
            format!(
                r#"
                <a href="/chat?chat={id}" class="block p-4 border-b border-slate-50 hover:bg-slate-50 {active}">
                    <div class="flex justify-between items-start mb-1">
                        <h3 class="font-bold text-slate-800">{name} {presence}</h3>
                        <span class="text-xs text-slate-400">{time}</span>
                    </div>
                    <div class="flex justify-between items-center">
                        <p class="text-sm text-slate-500 truncate pr-2">{last}</p>
                        {unread}
                    </div>
                </a>
                "#,
                id = s.id,
                active = active,
                name = escape_html(&s.user_name),
                presence = presence,
                time = escape_html(&s.time),
                last = escape_html(&s.last_message),
                unread = unread,
            )
        })
        .collect()
}

fn chat_thread(session: &ChatSession) -> String {
    session
        .messages
        .iter()
        .map(|m| {
            let (align, bubble) = match m.sender {
                Sender::User => ("justify-start", "bg-white border border-slate-200 text-slate-800"),
                Sender::Admin => ("justify-end", "bg-blue-500 text-white"),
            };
            format!(
                r#"
                <div class="flex {align}">
                    <div class="{bubble} p-3 rounded-2xl max-w-[70%] shadow-sm">
                        <p class="text-sm">{text}</p>
                        <span class="text-[10px] opacity-70 mt-1 block">{time}</span>
                    </div>
                </div>
                "#,
                align = align,
                bubble = bubble,
                text = escape_html(&m.text),
                time = escape_html(&m.time),
            )
        })
        .collect()
}

/// Live chat page - session list plus the active thread
pub async fn chat_page(
    State(state): State<SharedState>,
    Query(params): Query<ChatParam>,
) -> Html<String> {
    let state = state.read().await;
    let sessions = state.chat.sessions();

    let active_id = params
        .chat
        .filter(|id| state.chat.get(id).is_some())
        .or_else(|| sessions.first().map(|s| s.id.clone()))
        .unwrap_or_default();

    let active_pane = match state.chat.get(&active_id) {
        Some(session) => format!(
            r#"
            <div class="h-16 bg-white border-b border-slate-200 flex items-center px-6">
                <div>
                    <h2 class="font-bold text-slate-800">{name}</h2>
                    <p class="text-xs text-green-600 font-medium">{presence}</p>
                </div>
            </div>
            <div class="flex-1 overflow-y-auto p-6 space-y-4">{thread}</div>
            <div class="p-4 bg-white border-t border-slate-200">
                <form method="post" action="/chat/{id}/send" class="flex items-center gap-2">
                    <input type="text" name="text" placeholder="Type a message..." required
                           class="flex-1 bg-slate-50 border border-slate-200 rounded-full px-4 py-2.5 text-sm" />
                    <button type="submit" class="px-4 py-2.5 bg-blue-500 text-white rounded-full hover:bg-blue-600 text-sm">Send</button>
                </form>
            </div>
            "#,
            name = escape_html(&session.user_name),
            presence = match session.presence {
                Presence::Online => "Online",
                Presence::Offline => "Offline",
            },
            thread = chat_thread(session),
            id = session.id,
        ),
        None => r#"<div class="p-6 text-slate-500">No active chats.</div>"#.to_string(),
    };

    let content = format!(
        r#"
        <div class="flex h-[calc(100vh-8rem)] bg-slate-50 rounded-xl border border-slate-200 overflow-hidden">
            <div class="w-80 bg-white border-r border-slate-200 flex flex-col">
                <div class="p-4 border-b border-slate-100">
                    <h2 class="text-lg font-bold text-slate-800">Active Chats</h2>
                </div>
                <div class="flex-1 overflow-y-auto">{list}</div>
            </div>
            <div class="flex-1 flex flex-col min-w-0">{pane}</div>
        </div>
        "#,
        list = chat_session_list(sessions, &active_id),
        pane = active_pane,
    );

    Html(admin_page(
        "Live Chat",
        "chat",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

pub async fn chat_send_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<MessageForm>,
) -> Response {
    if form.text.trim().is_empty() {
        return Redirect::to("/chat").into_response();
    }

    let mut state = state.write().await;
    match state.chat.send(&id, form.text.trim()) {
        Ok(_) => Redirect::to(&format!("/chat?chat={}", id)).into_response(),
        Err(e) => e.into_response(),
    }
}

// System settings

#[derive(Debug, Deserialize)]
pub struct TabParam {
    pub tab: Option<String>,
}

fn settings_tab_nav(active: &str) -> String {
    let tabs = [
        ("general", "Global Config"),
        ("security", "Security &amp; Access"),
        ("api_keys", "Integrations &amp; APIs"),
        ("audit", "System Audit Logs"),
    ];

    tabs.iter()
        .map(|(key, label)| {
            let classes = if *key == active {
                "bg-blue-50 text-blue-600"
            } else {
                "text-slate-600 hover:bg-slate-50"
            };
            format!(
                r#"<a href="/settings?tab={}" class="flex items-center gap-3 p-3 text-sm font-medium rounded-lg transition-colors {}">{}</a>"#,
                key, classes, label
            )
        })
        .collect()
}

/// System settings page, SUPER_ADMIN only (enforced by the role guard)
pub async fn settings_page(
    State(state): State<SharedState>,
    Query(params): Query<TabParam>,
) -> Html<String> {
    let state = state.read().await;
    let tab = params.tab.as_deref().unwrap_or("general");

    let panel = match tab {
        "security" => format!(
            r#"
            <h3 class="text-lg font-bold text-slate-800 mb-6 border-b border-slate-100 pb-4">Security Policies</h3>
            <form method="post" action="/settings/security" class="space-y-6 max-w-2xl">
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">Admin Session Timeout (Minutes)</label>
                    <input type="number" name="session_timeout_minutes" value="{timeout}"
                           class="border border-slate-200 rounded-md px-3 py-2 max-w-xs w-full" />
                    <p class="text-xs text-slate-500 mt-1">Automatically log out inactive admins.</p>
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">Whitelisted Office IPs (Comma separated)</label>
                    <textarea name="allowed_ips" class="border border-slate-200 rounded-md px-3 py-2 w-full h-24">{ips}</textarea>
                </div>
                <button type="submit" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md text-sm">Update Security Policies</button>
            </form>
            "#,
            timeout = state.config.security.session_timeout_minutes,
            ips = escape_html(&state.config.security.allowed_ips.join(", ")),
        ),
        "audit" => {
            let entries: String = state
                .audit
                .recent()
                .iter()
                .map(|e| {
                    format!(
                        r#"
                        <div class="p-4 bg-slate-50 rounded-lg border border-slate-200 text-sm">
                            <span class="font-bold text-blue-600">[{role}]</span> {actor} {action}.
                            <span class="block text-xs text-slate-400 mt-1">{at} | IP: {ip}</span>
                        </div>
                        "#,
                        role = escape_html(&e.actor_role),
                        actor = escape_html(&e.actor),
                        action = escape_html(&e.action),
                        at = e.at.format("%Y-%m-%d %H:%M UTC"),
                        ip = escape_html(&e.ip),
                    )
                })
                .collect();
            format!(
                r#"
                <h3 class="text-lg font-bold text-slate-800 mb-6 border-b border-slate-100 pb-4">System Audit Logs</h3>
                <div class="space-y-4">{}</div>
                "#,
                entries
            )
        }
        "api_keys" => r#"
            <div class="text-center py-12">
                <h3 class="text-lg font-bold text-slate-800">API Gateway Integration</h3>
                <p class="text-slate-500 text-sm mt-2 max-w-sm mx-auto">
                    SMS and Email SMTP credentials will be managed here once the backend integration is complete.
                </p>
            </div>
            "#
        .to_string(),
        _ => format!(
            r#"
            <h3 class="text-lg font-bold text-slate-800 mb-6 border-b border-slate-100 pb-4">Global Configuration</h3>
            <form method="post" action="/settings/general" class="space-y-6 max-w-2xl">
                <div class="flex items-center justify-between p-4 bg-orange-50 rounded-lg border border-orange-100">
                    <div>
                        <h4 class="font-bold text-slate-800">Maintenance Mode</h4>
                        <p class="text-sm text-slate-500 mt-1">Turn off citizen access to the public portal.</p>
                    </div>
                    <input type="checkbox" name="maintenance_mode" {maintenance} class="w-5 h-5" />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">Official Support Email</label>
                    <input type="email" name="support_email" value="{email}"
                           class="border border-slate-200 rounded-md px-3 py-2 w-full" />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">Toll-Free Helpline Number</label>
                    <input type="text" name="helpline" value="{helpline}"
                           class="border border-slate-200 rounded-md px-3 py-2 w-full" />
                </div>
                <button type="submit" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md text-sm">Save Configuration</button>
            </form>
            "#,
            maintenance = if state.config.portal.maintenance_mode {
                "checked"
            } else {
                ""
            },
            email = escape_html(&state.config.portal.support_email),
            helpline = escape_html(&state.config.portal.helpline),
        ),
    };

    let content = format!(
        r#"
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-slate-800">System Settings</h2>
            <p class="text-sm text-slate-500 mt-1">Manage global platform configurations and security policies.</p>
        </div>
        <div class="flex flex-col md:flex-row gap-8 items-start">
            <div class="w-full md:w-64 flex flex-col gap-2 bg-white p-4 rounded-xl border border-slate-200 shadow-sm">{nav}</div>
            <div class="flex-1 w-full bg-white rounded-xl border border-slate-200 shadow-sm p-6 lg:p-8">{panel}</div>
        </div>
        "#,
        nav = settings_tab_nav(tab),
        panel = panel,
    );

    Html(admin_page(
        "System Settings",
        "settings",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

#[derive(Debug, Deserialize)]
pub struct GeneralSettingsForm {
    pub support_email: String,
    pub helpline: String,
    pub maintenance_mode: Option<String>,
}

pub async fn save_general_settings(
    State(state): State<SharedState>,
    Form(form): Form<GeneralSettingsForm>,
) -> Response {
    let mut state = state.write().await;

    let mut candidate = state.config.clone();
    candidate.portal.support_email = form.support_email;
    candidate.portal.helpline = form.helpline;
    candidate.portal.maintenance_mode = form.maintenance_mode.is_some();

    // Persist first; the live config keeps its old values if the save fails
    if let Err(e) = crate::config::save_config(&candidate) {
        tracing::error!("Failed to save config: {}", e);
        return Redirect::to("/settings?tab=general").into_response();
    }
    state.config = candidate;

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            "updated global configuration",
            "-",
        );
    }

    Redirect::to("/settings?tab=general").into_response()
}

#[derive(Debug, Deserialize)]
pub struct SecuritySettingsForm {
    pub session_timeout_minutes: i64,
    pub allowed_ips: String,
}

pub async fn save_security_settings(
    State(state): State<SharedState>,
    Form(form): Form<SecuritySettingsForm>,
) -> Response {
    let mut state = state.write().await;

    let mut candidate = state.config.clone();
    candidate.security.session_timeout_minutes = form.session_timeout_minutes;
    candidate.security.allowed_ips = form
        .allowed_ips
        .split(',')
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .collect();

    if let Err(e) = crate::config::save_config(&candidate) {
        tracing::error!("Failed to save config: {}", e);
        return Redirect::to("/settings?tab=security").into_response();
    }
    state.config = candidate;

    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            "updated security policies",
            "-",
        );
    }

    Redirect::to("/settings?tab=security").into_response()
}

// Notifications

pub async fn notifications_read_all_form(State(state): State<SharedState>) -> Response {
    let mut state = state.write().await;
    state.notifications.mark_all_read();
    Redirect::to("/").into_response()
}

// Admin profile

/// Profile page - identity card plus password change form
pub async fn profile_page(State(state): State<SharedState>) -> Html<String> {
    let state = state.read().await;
    let user = state.auth.user();

    let (admin_id, email, role) = user
        .map(|u| (u.admin_id.clone(), u.email.clone(), u.role.to_string()))
        .unwrap_or_else(|| {
            (
                "ADM-PENDING".to_string(),
                "Not provided".to_string(),
                "Administrator".to_string(),
            )
        });

    let content = format!(
        r#"
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-slate-800">My Profile</h2>
            <p class="text-sm text-slate-500 mt-1">Manage your administrative account settings and security.</p>
        </div>
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-1 space-y-6">
                <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-6 text-center border-t-4 border-t-blue-500">
                    <div class="w-24 h-24 mx-auto bg-blue-100 text-blue-700 rounded-full flex items-center justify-center font-bold text-4xl mb-4">{initial}</div>
                    <h3 class="text-xl font-bold text-slate-800">{role}</h3>
                    <p class="text-sm text-slate-500 mt-2">Authorized Personnel</p>
                </div>
                <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-5">
                    <h4 class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-4">Account Details</h4>
                    <div class="space-y-4 text-sm">
                        <div>
                            <p class="text-slate-500 mb-1">Admin ID</p>
                            <p class="font-bold text-slate-800">{admin_id}</p>
                        </div>
                        <div>
                            <p class="text-slate-500 mb-1">Email Address</p>
                            <p class="font-bold text-slate-800">{email}</p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="lg:col-span-2">
                <div class="bg-white rounded-xl border border-red-100 shadow-sm p-6">
                    <h3 class="text-lg font-bold text-slate-800 mb-4 border-b border-slate-100 pb-4">Security &amp; Password</h3>
                    <form method="post" action="/profile/password" class="space-y-4 max-w-md">
                        <div>
                            <label class="block text-sm font-medium text-slate-700 mb-1">Current Password</label>
                            <input type="password" name="current_password" required
                                   class="border border-slate-200 rounded-md px-3 py-2 w-full" />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-slate-700 mb-1">New Password</label>
                            <input type="password" name="new_password" required minlength="8"
                                   class="border border-slate-200 rounded-md px-3 py-2 w-full" />
                            <p class="text-xs text-slate-500 mt-2">Must be at least 8 characters long.</p>
                        </div>
                        <button type="submit" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md text-sm">Update Password</button>
                    </form>
                </div>
            </div>
        </div>
        "#,
        initial = role.chars().next().unwrap_or('A'),
        role = escape_html(&role),
        admin_id = escape_html(&admin_id),
        email = escape_html(&email),
    );

    Html(admin_page(
        "My Profile",
        "profile",
        state.auth.user(),
        &state.notifications,
        &content,
    ))
}

#[derive(Debug, Deserialize)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
}

pub async fn profile_password_form(
    State(state): State<SharedState>,
    Form(form): Form<PasswordForm>,
) -> Response {
    if form.current_password.is_empty() || form.new_password.len() < 8 {
        return Redirect::to("/profile").into_response();
    }

    let mut state = state.write().await;
    if let Some(user) = state.auth.user().cloned() {
        state.audit.record(
            &user.role.to_string(),
            &user.email,
            "requested a password change",
            "-",
        );
    }

    Redirect::to("/profile").into_response()
}

// Login / logout

#[derive(Debug, Deserialize)]
pub struct LoginPageParams {
    pub from: Option<String>,
}

fn login_form(from: Option<&str>, error: Option<&str>) -> String {
    let error_html = error
        .map(|e| {
            format!(
                r#"<p class="text-sm text-red-600 bg-red-50 border border-red-100 rounded-md p-3">{}</p>"#,
                escape_html(e)
            )
        })
        .unwrap_or_default();

    let from_field = from
        .map(|f| {
            format!(
                r#"<input type="hidden" name="from" value="{}" />"#,
                escape_html(f)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"
    <div class="min-h-screen flex items-center justify-center p-4">
        <div class="w-full max-w-md bg-white rounded-xl border border-slate-200 shadow-lg p-8 border-t-4 border-t-blue-500">
            <h1 class="text-2xl font-bold text-slate-800 mb-1">Citizen Portal Admin</h1>
            <p class="text-sm text-slate-500 mb-6">Sign in with your administrative account.</p>
            {error}
            <form method="post" action="/login" class="space-y-4 mt-4">
                {from_field}
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">Email</label>
                    <input type="email" name="email" required class="border border-slate-200 rounded-md px-3 py-2 w-full" />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">Password</label>
                    <input type="password" name="password" required class="border border-slate-200 rounded-md px-3 py-2 w-full" />
                </div>
                <button type="submit" class="w-full px-4 py-2.5 bg-blue-600 hover:bg-blue-700 text-white rounded-md font-medium">Sign In</button>
            </form>
        </div>
    </div>
    "#,
        error = error_html,
        from_field = from_field,
    );

    bare_page("Sign In", &body)
}

/// Login page
pub async fn login_page(Query(params): Query<LoginPageParams>) -> Html<String> {
    Html(login_form(params.from.as_deref(), None))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub from: Option<String>,
}

/// Form login; lands back on the originally requested page
pub async fn login_submit(
    State(state): State<SharedState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut state = state.write().await;

    match crate::api::routes::authenticate(&mut state, &form.email, &form.password) {
        Ok(_) => {
            let destination = form
                .from
                .filter(|f| f.starts_with('/'))
                .unwrap_or_else(|| "/".to_string());
            Redirect::to(&destination).into_response()
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Html(login_form(form.from.as_deref(), Some("Invalid credentials"))),
        )
            .into_response(),
    }
}

pub async fn logout_submit(State(state): State<SharedState>) -> Response {
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

    Redirect::to("/login").into_response()
}

// Fallback

/// 404 page with recovery actions
pub async fn not_found() -> Response {
    let body = r#"
    <div class="min-h-screen flex flex-col items-center justify-center p-4">
        <div class="text-center max-w-md bg-white rounded-xl border border-slate-200 shadow-lg p-8 border-t-4 border-t-blue-500">
            <h1 class="text-7xl font-extrabold text-slate-800 mb-2">404</h1>
            <h2 class="text-2xl font-semibold text-slate-700 mb-3">Page Not Found</h2>
            <p class="text-slate-500 text-sm mb-8 leading-relaxed">
                The portal page you are looking for does not exist, has been moved, or you might
                not have the correct administrative privileges to view it.
            </p>
            <a href="/" class="inline-block px-4 py-2.5 bg-blue-600 hover:bg-blue-700 text-white rounded-md font-medium">Back to Dashboard</a>
        </div>
    </div>
    "#;

    (StatusCode::NOT_FOUND, Html(bare_page("Page Not Found", body))).into_response()
}
