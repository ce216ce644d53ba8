use crate::config::DEFAULT_CONFIG_TEMPLATE;
use crate::errors::{FibError, Result};
use crate::io;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE_NAME: &str = ".fibseq.toml";

pub fn init_config(force: bool) -> Result<PathBuf> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(FibError::ConfigExists { path: config_path });
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    info!(path = %config_path.display(), "Wrote default configuration");

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, FibConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        assert_eq!(load_config(&path).unwrap(), FibConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[demo]\nterms = 3\n").unwrap();

        let err = init_config_in(dir.path(), false).unwrap_err();
        assert!(matches!(err, FibError::ConfigExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[demo]\nterms = 3\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "garbage").unwrap();

        init_config_in(dir.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);
    }
}
