//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::auth::AdminRole;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub portal: PortalConfig,

    #[serde(default)]
    pub security: SecurityConfig,

    /// Admin accounts allowed to sign in to the portal
    #[serde(default)]
    pub admins: Vec<AdminAccount>,
}

/// Server configuration for the HTTP portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4820
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Public-facing portal settings (the "General" settings tab)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_support_email")]
    pub support_email: String,

    #[serde(default = "default_helpline")]
    pub helpline: String,

    /// When enabled, citizen access to the public portal is suspended
    #[serde(default)]
    pub maintenance_mode: bool,
}

fn default_support_email() -> String {
    "support@citizen.gov".to_string()
}

fn default_helpline() -> String {
    "1800-123-4567".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            support_email: default_support_email(),
            helpline: default_helpline(),
            maintenance_mode: false,
        }
    }
}

/// Security policies (the "Security & Access" settings tab)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Automatically log out inactive admins after this many minutes
    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: i64,

    /// Whitelisted office IPs allowed to reach the admin portal
    #[serde(default)]
    pub allowed_ips: Vec<String>,
}

fn default_session_timeout() -> i64 {
    15
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            session_timeout_minutes: default_session_timeout(),
            allowed_ips: Vec::new(),
        }
    }
}

/// A provisioned administrator account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub email: String,

    /// bcrypt hash of the admin password
    pub password_hash: String,

    pub role: AdminRole,
}

impl Config {
    /// Look up an admin account by email
    pub fn get_admin(&self, email: &str) -> Option<&AdminAccount> {
        self.admins.iter().find(|a| a.email == email)
    }
}
