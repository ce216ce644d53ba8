// Core configuration types
mod core;
mod loader;

pub use self::core::{default_extended_terms, default_terms, DemoSettings, FibConfig, OutputConfig};
pub use loader::{load_config, load_config_or_default, parse_config, DEFAULT_CONFIG_TEMPLATE};
