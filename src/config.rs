//! Configuration module
//!
//! Loads `~/.config/qadesk/config.toml`. Every section is optional; a
//! missing default file means built-in defaults.

mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config};
pub use types::{BrandingConfig, Config, NavigationConfig, SuggestionEntry};
