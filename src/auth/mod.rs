//! Authentication, session store and navigation guards

pub mod guards;
pub mod jwt;
pub mod models;
pub mod store;

pub use guards::{role_guard, route_guard, GuardOutcome};
pub use jwt::{create_token, validate_token, Claims};
pub use models::{AdminRole, AdminUser};
pub use store::{AuthStore, SessionSnapshot};
