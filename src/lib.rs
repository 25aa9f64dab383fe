//! Civicdesk - Citizen services administration portal
//!
//! This is the library interface for Civicdesk, allowing programmatic
//! access to the portal's data layer, guards, and table presenter.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod records;
pub mod table;
pub mod ui;

pub use config::Config;
pub use error::Error;
pub use table::{Column, PageCursor, TableView};
