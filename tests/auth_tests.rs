//! Authentication and session store tests

use civicdesk::auth::{
    create_token, validate_token, AdminRole, AdminUser, AuthStore, Claims, SessionSnapshot,
};

#[test]
fn test_create_super_admin() {
    let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
    assert_eq!(user.email, "admin@citizen.gov");
    assert_eq!(user.role, AdminRole::SuperAdmin);
    assert!(user.is_super_admin());
    assert!(user.admin_id.starts_with("ADM-"));
}

#[test]
fn test_support_admin_is_not_super() {
    let user = AdminUser::new("rahul.s@citizen.gov".to_string(), AdminRole::SupportAdmin);
    assert!(!user.is_super_admin());
}

#[test]
fn test_role_wire_format() {
    assert_eq!(AdminRole::SuperAdmin.to_string(), "SUPER_ADMIN");
    assert_eq!(AdminRole::SupportAdmin.to_string(), "SUPPORT_ADMIN");
    assert_eq!(AdminRole::ServiceAdmin.to_string(), "SERVICE_ADMIN");

    assert_eq!(AdminRole::parse("SUPER_ADMIN"), AdminRole::SuperAdmin);
    assert_eq!(AdminRole::parse("SUPPORT_ADMIN"), AdminRole::SupportAdmin);
    // Unknown roles fall back to the least privileged
    assert_eq!(AdminRole::parse("ROOT"), AdminRole::ServiceAdmin);
}

#[test]
fn test_jwt_token_creation() {
    let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
    let token = create_token(&user).expect("Failed to create token");
    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3); // JWT format: header.payload.signature
}

#[test]
fn test_jwt_token_validation() {
    let user = AdminUser::new("priya.v@citizen.gov".to_string(), AdminRole::ServiceAdmin);
    let token = create_token(&user).expect("Failed to create token");
    let claims = validate_token(&token).expect("Failed to validate token");

    assert_eq!(claims.email, "priya.v@citizen.gov");
    assert_eq!(claims.role, "SERVICE_ADMIN");
    assert_eq!(claims.sub, user.admin_id);
}

#[test]
fn test_jwt_token_expiration_check() {
    let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
    let token = create_token(&user).expect("Failed to create token");
    let claims = validate_token(&token).expect("Failed to validate token");

    // Token should not be expired immediately
    assert!(!claims.is_expired());
}

#[test]
fn test_invalid_token_rejection() {
    assert!(validate_token("invalid.token.here").is_err());
    assert!(validate_token("not-a-jwt-token").is_err());
}

#[test]
fn test_claims_round_trip_identity() {
    let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
    let claims = Claims::from_user(&user);

    assert_eq!(claims.to_user(), user);
    assert!(claims.iat > 0);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_store_starts_signed_out() {
    let store = AuthStore::new();
    assert!(!store.is_authenticated());
    assert_eq!(store.snapshot(), SessionSnapshot::default());
}

#[test]
fn test_store_session_lifecycle() {
    let mut store = AuthStore::new();
    let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);

    store.set_credentials(user.clone(), "token-123".to_string());
    assert!(store.is_authenticated());
    assert_eq!(store.user(), Some(&user));
    assert_eq!(store.access_token(), Some("token-123"));

    store.clear();
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert!(store.access_token().is_none());
}

#[test]
fn test_snapshot_is_detached_from_store() {
    let mut store = AuthStore::new();
    let user = AdminUser::new("admin@citizen.gov".to_string(), AdminRole::SuperAdmin);
    store.set_credentials(user, "token-123".to_string());

    let snapshot = store.snapshot();
    store.clear();

    // The snapshot keeps the state it was taken with
    assert!(snapshot.is_authenticated);
    assert!(snapshot.user.is_some());
}
