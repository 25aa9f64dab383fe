//! Configuration loading tests

use civicdesk::auth::AdminRole;
use civicdesk::config::{load_config_from_path, save_config_to_path, AdminAccount, Config};

#[test]
fn test_default_config_values() {
    let config = Config::default();
    assert_eq!(config.server.port, 4820);
    assert_eq!(config.portal.support_email, "support@citizen.gov");
    assert_eq!(config.portal.helpline, "1800-123-4567");
    assert!(!config.portal.maintenance_mode);
    assert_eq!(config.security.session_timeout_minutes, 15);
    assert!(config.admins.is_empty());
}

#[test]
fn test_parse_minimal_config() {
    let toml_str = r#"
[server]
host = "127.0.0.1"
port = 8080
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    // Omitted sections fall back to their defaults
    assert_eq!(config.portal.support_email, "support@citizen.gov");
}

#[test]
fn test_parse_admin_accounts() {
    let toml_str = r#"
[[admins]]
email = "admin@citizen.gov"
password_hash = "$2b$12$abcdefghijklmnopqrstuv"
role = "SUPER_ADMIN"

[[admins]]
email = "rahul.s@citizen.gov"
password_hash = "$2b$12$abcdefghijklmnopqrstuv"
role = "SUPPORT_ADMIN"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.admins.len(), 2);
    assert_eq!(config.admins[0].role, AdminRole::SuperAdmin);

    let support = config.get_admin("rahul.s@citizen.gov").unwrap();
    assert_eq!(support.role, AdminRole::SupportAdmin);
    assert!(config.get_admin("nobody@citizen.gov").is_none());
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("civicdesk.toml");

    let mut config = Config::default();
    config.portal.maintenance_mode = true;
    config.security.allowed_ips = vec!["192.168.1.12".to_string(), "10.0.0.24".to_string()];
    config.admins.push(AdminAccount {
        email: "admin@citizen.gov".to_string(),
        password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        role: AdminRole::SuperAdmin,
    });

    save_config_to_path(&config, &path).unwrap();
    let reloaded = load_config_from_path(&path).unwrap();

    assert!(reloaded.portal.maintenance_mode);
    assert_eq!(reloaded.security.allowed_ips.len(), 2);
    assert_eq!(reloaded.admins.len(), 1);
    assert!(reloaded.get_admin("admin@citizen.gov").is_some());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    assert!(load_config_from_path(&path).is_err());
}
