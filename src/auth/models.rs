//! Authentication models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Admin roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    /// Full access, including system settings
    SuperAdmin,
    /// Handles complaints and live chat
    SupportAdmin,
    /// Reviews citizen service applications
    ServiceAdmin,
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminRole::SuperAdmin => write!(f, "SUPER_ADMIN"),
            AdminRole::SupportAdmin => write!(f, "SUPPORT_ADMIN"),
            AdminRole::ServiceAdmin => write!(f, "SERVICE_ADMIN"),
        }
    }
}

impl AdminRole {
    /// Parse a role from its wire form, falling back to the least privileged
    pub fn parse(role: &str) -> Self {
        match role {
            "SUPER_ADMIN" => AdminRole::SuperAdmin,
            "SUPPORT_ADMIN" => AdminRole::SupportAdmin,
            _ => AdminRole::ServiceAdmin,
        }
    }
}

/// Signed-in administrator identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique admin identifier
    pub admin_id: String,
    /// Email used for login
    pub email: String,
    /// The admin's role
    pub role: AdminRole,
}

impl AdminUser {
    /// Create a new admin identity
    pub fn new(email: String, role: AdminRole) -> Self {
        Self {
            admin_id: format!("ADM-{}", uuid::Uuid::new_v4()),
            email,
            role,
        }
    }

    /// Check if this admin may change system settings
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }
}

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response with token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AdminUser,
}
