use std::fs;
use std::path::Path;

use super::core::FibConfig;
use crate::errors::{FibError, Result};

/// Starter file written by `fibseq init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# fibseq configuration

[demo]
# Terms printed by the sequence, recursion and iteration sections
terms = 10
# Terms printed by the closing sequence section
extended_terms = 20

[output]
# terminal or json
default_format = "terminal"
"#;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str, origin: &Path) -> Result<FibConfig> {
    toml::from_str::<FibConfig>(contents)
        .map_err(|e| FibError::config_parse(e.message().to_string(), origin))
}

/// Load configuration from an explicitly named file.
///
/// Unlike a search-path loader, a missing file is an error here: the caller
/// asked for this path by name.
pub fn load_config(path: &Path) -> Result<FibConfig> {
    let contents = fs::read_to_string(path).map_err(|e| FibError::config_read(e, path))?;
    let config = parse_config(&contents, path)?;
    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

/// Load from `path` when given, otherwise fall back to defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<FibConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(FibConfig::default()),
    }
}
