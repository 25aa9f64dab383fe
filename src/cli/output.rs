//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::config::AdminAccount;
use crate::records::{ApplicationStatus, ServiceApplication};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print a table of provisioned admin accounts
pub fn print_admin_table(admins: &[AdminAccount]) {
    if admins.is_empty() {
        info("No admin accounts provisioned. Add one with 'civicdesk admins add'");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Email").fg(Color::Cyan),
            Cell::new("Role").fg(Color::Cyan),
        ]);

    for admin in admins {
        let role_color = if admin.role.to_string() == "SUPER_ADMIN" {
            Color::Magenta
        } else {
            Color::Green
        };

        table.add_row(vec![
            Cell::new(&admin.email),
            Cell::new(admin.role.to_string()).fg(role_color),
        ]);
    }

    println!("{table}");
}

/// Print a table of seeded service applications
pub fn print_application_table(applications: &[ServiceApplication]) {
    if applications.is_empty() {
        info("No service applications on record");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("App ID").fg(Color::Cyan),
            Cell::new("Service").fg(Color::Cyan),
            Cell::new("Applicant").fg(Color::Cyan),
            Cell::new("Applied").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);

    for application in applications {
        let status_color = match application.status {
            ApplicationStatus::Approved => Color::Green,
            ApplicationStatus::Rejected => Color::Red,
            ApplicationStatus::Pending => Color::Yellow,
        };

        table.add_row(vec![
            Cell::new(&application.application_id),
            Cell::new(&application.service_name),
            Cell::new(&application.applicant_name),
            Cell::new(application.applied_date.to_string()),
            Cell::new(application.status.to_string()).fg(status_color),
        ]);
    }

    println!("{table}");
}
