//! JWT token handling

use crate::auth::models::{AdminRole, AdminUser};
use crate::error::{Error, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const JWT_SECRET: &[u8] = b"civicdesk-secret-key-change-in-production";

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (admin ID)
    pub sub: String,
    /// Admin email
    pub email: String,
    /// Admin role
    pub role: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time (1 hour)
    pub exp: i64,
}

impl Claims {
    /// Create claims from an admin identity
    pub fn from_user(user: &AdminUser) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user.admin_id.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            iat: now,
            exp: now + 3600, // 1 hour expiration
        }
    }

    /// Get the admin role
    pub fn get_role(&self) -> AdminRole {
        AdminRole::parse(&self.role)
    }

    /// Rebuild the admin identity carried by this token
    pub fn to_user(&self) -> AdminUser {
        AdminUser {
            admin_id: self.sub.clone(),
            email: self.email.clone(),
            role: self.get_role(),
        }
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}

/// Create a JWT token
pub fn create_token(user: &AdminUser) -> Result<String> {
    let claims = Claims::from_user(user);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .map_err(|e| Error::InvalidToken(format!("Failed to create token: {}", e)))
}

/// Validate and decode a JWT token
pub fn validate_token(token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| Error::InvalidToken(e.to_string()))
}
