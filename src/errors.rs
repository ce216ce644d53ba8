//! Error types for the ambient layers of fibseq.
//!
//! The numeric core never fails: non-positive inputs have defined results
//! and overflow wraps. Errors only arise around it, when reading settings,
//! writing the starter config, or emitting output.
//!
//! # Example
//!
//! ```rust
//! use fibseq::errors::FibError;
//!
//! let err = FibError::config_parse("demo.terms: invalid type", "fibseq.toml");
//! assert!(err.to_string().contains("fibseq.toml"));
//!
//! // Converts into anyhow at the binary edge
//! let _: anyhow::Error = err.into();
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the numeric core.
#[derive(Debug, Error)]
pub enum FibError {
    /// A configuration file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file was read but is not valid TOML for [`crate::config::FibConfig`]
    #[error("Failed to parse config file {}: {message}", .path.display())]
    ConfigParse { message: String, path: PathBuf },

    /// `init` would overwrite an existing file
    #[error("Configuration file {} already exists. Use --force to overwrite.", .path.display())]
    ConfigExists { path: PathBuf },

    /// Rendering a report failed
    #[error("Failed to render output: {0}")]
    Render(String),

    /// Writing to the output stream failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FibError {
    /// Create a parse error for the config file at `path`.
    pub fn config_parse(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a read error for the config file at `path`.
    pub fn config_read(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Short category name, logged when a command fails.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::ConfigExists { .. } => {
                "config"
            }
            Self::Render(_) => "render",
            Self::Io(_) => "io",
        }
    }
}

impl From<serde_json::Error> for FibError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result alias for fallible fibseq operations.
pub type Result<T> = std::result::Result<T, FibError>;
