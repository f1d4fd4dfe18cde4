//! Configuration loading and schema.
//!
//! Configuration is optional input that pre-selects the manager, bin
//! directory, or shell. Discovery order (later wins): user config, project
//! config, CLI flags. forepath only ever reads configuration; it never
//! persists anything.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, PROJECT_CONFIG_FILE};
pub use schema::ForepathConfig;
