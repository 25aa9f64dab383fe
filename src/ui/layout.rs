//! Shared page chrome: document shell, sidebar and header

use crate::auth::AdminUser;
use crate::records::NotificationFeed;
use crate::table::escape_html;

/// Wrap a bare page (login, 404) in the document shell without the admin chrome
pub fn bare_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Civicdesk</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-slate-50 text-slate-800 min-h-screen">
{body}
</body>
</html>
"#,
        title = title,
        body = body
    )
}

/// Wrap page content in the admin layout: sidebar, header, content area
pub fn admin_page(
    title: &str,
    active_nav: &str,
    user: Option<&AdminUser>,
    notifications: &NotificationFeed,
    content: &str,
) -> String {
    let body = format!(
        r#"
    <div class="flex h-screen overflow-hidden">
        {sidebar}
        <div class="flex-1 flex flex-col relative min-w-0">
            {header}
            <main class="flex-1 overflow-auto bg-slate-50 p-6">
{content}
            </main>
        </div>
    </div>
    "#,
        sidebar = sidebar(active_nav),
        header = header(user, notifications),
        content = content
    );

    bare_page(title, &body)
}

fn sidebar(active_nav: &str) -> String {
    let links = [
        ("dashboard", "/", "Dashboard"),
        ("users", "/users", "User Management"),
        ("services", "/services", "Service Applications"),
        ("complaints", "/complaints", "Complaints &amp; Support"),
        ("chat", "/chat", "Live Chat"),
        ("settings", "/settings", "System Settings"),
        ("profile", "/profile", "My Profile"),
    ];

    let items: String = links
        .iter()
        .map(|(key, href, label)| {
            let classes = if *key == active_nav {
                "bg-blue-50 text-blue-600 font-semibold"
            } else {
                "text-slate-600 hover:bg-slate-50"
            };
            format!(
                r#"<a href="{}" class="flex items-center gap-3 px-4 py-3 text-sm rounded-lg transition-colors {}">{}</a>"#,
                href, classes, label
            )
        })
        .collect();

    format!(
        r#"
        <aside class="w-64 bg-white border-r border-slate-200 flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-slate-100">
                <span class="text-lg font-bold text-slate-800">Citizen Portal</span>
            </div>
            <nav class="flex-1 p-3 space-y-1">{}</nav>
        </aside>
        "#,
        items
    )
}

fn header(user: Option<&AdminUser>, notifications: &NotificationFeed) -> String {
    let identity = user
        .map(|u| format!("{} &middot; {}", escape_html(&u.email), u.role))
        .unwrap_or_else(|| "Administrator".to_string());

    format!(
        r#"
        <header class="h-16 bg-white border-b border-slate-200 flex items-center justify-between px-6 shadow-sm z-10">
            <div class="text-sm text-slate-500">Citizen Services Administration</div>
            <div class="flex items-center gap-4">
                {bell}
                <span class="text-sm text-slate-600">{identity}</span>
                <form method="post" action="/logout">
                    <button type="submit" class="text-sm text-slate-500 hover:text-red-600 transition-colors">Sign out</button>
                </form>
            </div>
        </header>
        "#,
        bell = notification_bell(notifications),
        identity = identity
    )
}

/// Notification bell with a dropdown listing the feed
fn notification_bell(feed: &NotificationFeed) -> String {
    let unread = feed.unread_count();
    let badge = if unread > 0 {
        format!(
            r#"<span class="absolute -top-1 -right-1 w-4 h-4 bg-red-500 text-white text-[10px] font-bold flex items-center justify-center rounded-full">{}</span>"#,
            unread
        )
    } else {
        String::new()
    };

    let items: String = feed
        .all()
        .iter()
        .map(|n| {
            let weight = if n.is_read { "text-slate-500" } else { "font-semibold text-slate-800" };
            format!(
                r#"
                <a href="{link}" class="block px-4 py-3 hover:bg-slate-50 border-b border-slate-100">
                    <p class="text-sm {weight}">{title}</p>
                    <p class="text-xs text-slate-500 mt-0.5">{message}</p>
                    <p class="text-[10px] text-slate-400 mt-1">{time}</p>
                </a>
                "#,
                link = n.link_to,
                weight = weight,
                title = escape_html(&n.title),
                message = escape_html(&n.message),
                time = escape_html(&n.time),
            )
        })
        .collect();

    format!(
        r#"
        <details class="relative">
            <summary class="list-none relative cursor-pointer text-slate-500 hover:text-slate-800 transition-colors">
                <span aria-label="Notifications">&#128276;</span>
                {badge}
            </summary>
            <div class="absolute right-0 mt-2 w-80 bg-white rounded-xl border border-slate-200 shadow-lg overflow-hidden z-20">
                <div class="px-4 py-3 border-b border-slate-100 flex items-center justify-between">
                    <span class="text-sm font-bold text-slate-800">Notifications</span>
                    <form method="post" action="/notifications/read-all">
                        <button type="submit" class="text-xs text-blue-600 hover:underline">Mark all read</button>
                    </form>
                </div>
                <div class="max-h-96 overflow-y-auto">{items}</div>
            </div>
        </details>
        "#,
        badge = badge,
        items = items
    )
}
