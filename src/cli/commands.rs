//! CLI command implementations

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use std::fs;

use crate::api;
use crate::cli::{
    error, info, print_admin_table, print_application_table, success, warn, AdminsAction,
};
use crate::config::{self, AdminAccount};
use crate::records::{ApplicationRegistry, ChatBoard, CitizenRegistry, TicketDesk};

/// Initialize a new civicdesk.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new(config::CONFIG_FILENAME);

    if config_path.exists() {
        warn("civicdesk.toml already exists");
        return Ok(());
    }

    let content = config::default_config_content();
    fs::write(config_path, content)?;

    success("Created civicdesk.toml");
    info("Edit the configuration file and run 'civicdesk serve' to start the portal");

    Ok(())
}

/// Start the portal server
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let config = load_config()?;

    info(&format!("Starting portal on http://{}:{}", host, port));

    api::run_server(config, host, port).await?;

    Ok(())
}

/// Manage admin accounts
pub async fn admins(action: AdminsAction) -> Result<()> {
    match action {
        AdminsAction::List => {
            let config = load_config()?;
            print_admin_table(&config.admins);
            Ok(())
        }
        AdminsAction::Add => add_admin().await,
    }
}

/// Interactive prompt to add an admin account to the config file
async fn add_admin() -> Result<()> {
    let mut config = load_config()?;
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    let _ = term.write_line(&format!("{}", "Add Admin Account".bold()));

    let email: String = Input::with_theme(&theme)
        .with_prompt("Admin email")
        .validate_with(|input: &String| {
            if input.contains('@') {
                Ok(())
            } else {
                Err("Enter a valid email address")
            }
        })
        .interact_text()?;

    if config.get_admin(&email).is_some() {
        error(&format!("An admin with email {} already exists", email));
        return Ok(());
    }

    let roles = ["SUPER_ADMIN", "SUPPORT_ADMIN", "SERVICE_ADMIN"];
    let role_idx = Select::with_theme(&theme)
        .with_prompt("Role")
        .items(&roles)
        .default(1)
        .interact()?;
    let role = crate::auth::AdminRole::parse(roles[role_idx]);

    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

    config.admins.push(AdminAccount {
        email: email.clone(),
        password_hash,
        role,
    });
    config::save_config(&config)?;

    success(&format!("Added {} admin {}", role, email));

    Ok(())
}

/// Show portal configuration and seeded record counts
pub async fn status() -> Result<()> {
    let config = load_config()?;

    println!("{}", "Portal Status".bold().underline());
    println!();
    println!(
        "  {} {}:{}",
        "Bind address:".bold(),
        config.server.host,
        config.server.port
    );
    println!(
        "  {} {}",
        "Support email:".bold(),
        config.portal.support_email.cyan()
    );
    println!("  {} {}", "Helpline:".bold(), config.portal.helpline);
    println!(
        "  {} {}",
        "Maintenance mode:".bold(),
        if config.portal.maintenance_mode {
            "on".red().to_string()
        } else {
            "off".green().to_string()
        }
    );
    println!(
        "  {} {} minutes",
        "Session timeout:".bold(),
        config.security.session_timeout_minutes
    );
    println!("  {} {}", "Admin accounts:".bold(), config.admins.len());

    let citizens = CitizenRegistry::seeded();
    let applications = ApplicationRegistry::seeded();
    let complaints = TicketDesk::seeded();
    let chat = ChatBoard::seeded();

    println!();
    println!("  {}", "Seeded records:".bold());
    println!("    Citizens:             {}", citizens.len());
    println!(
        "    Pending applications: {}",
        applications.pending_count()
    );
    println!("    Open complaints:      {}", complaints.open_count());
    println!("    Unread chats:         {}", chat.total_unread());

    println!();
    println!("  {}", "Service applications:".bold());
    print_application_table(applications.all());

    Ok(())
}

fn load_config() -> Result<config::Config> {
    match config::load_config() {
        Ok(config) => Ok(config),
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            info("Run 'civicdesk init' to create a civicdesk.toml file");
            Err(e.into())
        }
    }
}
