//! HTTP API for the admin portal

pub mod routes;
pub mod server;

pub use server::{run_server, AppState, SharedState};
