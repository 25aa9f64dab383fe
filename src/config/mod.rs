//! Configuration management for Civicdesk

pub mod loader;
mod schema;

pub use loader::{
    default_config_content, load_config, load_config_from_path, save_config, save_config_to_path,
    CONFIG_FILENAME,
};
pub use schema::*;
