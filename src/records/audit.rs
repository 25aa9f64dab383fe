//! Append-only audit log of administrative actions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Role label shown in the log, e.g. SUPER_ADMIN or SYSTEM
    pub actor_role: String,
    /// Email of the acting admin, or the system
    pub actor: String,
    pub action: String,
    pub at: chrono::DateTime<chrono::Utc>,
    pub ip: String,
}

/// Audit trail kept for the settings page
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut log = Self::new();
        log.record(
            "SUPER_ADMIN",
            "admin@citizen.gov",
            "accessed System Settings",
            "192.168.1.12",
        );
        log.record(
            "SUPPORT_ADMIN",
            "rahul.s@citizen.gov",
            "resolved Complaint ID CMP-1029",
            "10.0.0.24",
        );
        log.record(
            "SYSTEM",
            "system",
            "Failed login attempt for admin@citizen.gov",
            "45.33.22.11",
        );
        log
    }

    pub fn record(&mut self, actor_role: &str, actor: &str, action: &str, ip: &str) {
        self.entries.push(AuditEntry {
            actor_role: actor_role.to_string(),
            actor: actor.to_string(),
            action: action.to_string(),
            at: chrono::Utc::now(),
            ip: ip.to_string(),
        });
    }

    /// Entries, newest first
    pub fn recent(&self) -> Vec<&AuditEntry> {
        self.entries.iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
