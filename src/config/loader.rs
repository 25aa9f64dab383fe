//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;

pub const CONFIG_FILENAME: &str = "civicdesk.toml";

/// Load configuration from civicdesk.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Persist the live configuration back to civicdesk.toml
pub fn save_config(config: &Config) -> Result<()> {
    let path = find_config_file().unwrap_or_else(|_| PathBuf::from(CONFIG_FILENAME));
    save_config_to_path(config, &path)
}

/// Persist configuration to a specific path
pub fn save_config_to_path(config: &Config, path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Civicdesk Configuration

[server]
host = "0.0.0.0"
port = 4820

[portal]
support_email = "support@citizen.gov"
helpline = "1800-123-4567"
maintenance_mode = false

[security]
session_timeout_minutes = 15
# allowed_ips = ["192.168.1.1", "10.0.0.5"]

# Admin accounts. Add more with 'civicdesk admins add'.
# The default password below is "changeme".
[[admins]]
email = "${CIVICDESK_ADMIN_EMAIL:-admin@citizen.gov}"
password_hash = "$2b$12$LJ3m4ZI0mVWYIdYb4gFIO.3RTcvyYKJUE7o0hbt7Ml1nAEAjeCIG6"
role = "SUPER_ADMIN"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_interpolation() {
        env::set_var("TEST_VAR", "hello");
        let content = "value = \"${TEST_VAR}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"hello\"");
        env::remove_var("TEST_VAR");
    }

    #[test]
    fn test_env_interpolation_with_default() {
        let content = "value = \"${NONEXISTENT_VAR:-default_value}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"default_value\"");
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config =
            toml::from_str(&interpolate_env_vars(default_config_content())).unwrap();
        assert_eq!(config.server.port, 4820);
        assert_eq!(config.admins.len(), 1);
        assert_eq!(config.admins[0].email, "admin@citizen.gov");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("civicdesk.toml");

        let mut config = Config::default();
        config.portal.maintenance_mode = true;
        config.security.allowed_ips = vec!["10.0.0.5".to_string()];

        save_config_to_path(&config, &path).unwrap();
        let reloaded = load_config_from_path(&path).unwrap();

        assert!(reloaded.portal.maintenance_mode);
        assert_eq!(reloaded.security.allowed_ips, vec!["10.0.0.5"]);
    }
}
