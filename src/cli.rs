use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fibseq")]
#[command(
    about = "Fibonacci numbers by sequence build-up, recursion and iteration",
    long_about = "Without a subcommand, prints the built-in demonstration: the first 10 terms \
                  three ways, then the first 20 terms."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load demo and output settings from a TOML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored headers
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in demonstration (default)
    Demo,

    /// Print the first N Fibonacci numbers
    Sequence {
        /// Number of terms; zero or negative prints an empty list
        #[arg(allow_negative_numbers = true)]
        terms: i64,

        /// How the terms are produced
        #[arg(short, long, value_enum, default_value = "sequence")]
        method: Method,

        /// Output format (defaults to the config's output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the Fibonacci number at a 0-indexed position
    Nth {
        /// Position; negative positions pass through unchanged for recursive and iterative
        #[arg(allow_negative_numbers = true)]
        position: i64,

        #[arg(short, long, value_enum, default_value = "iterative")]
        method: Method,
    },

    /// Initialize a .fibseq.toml configuration file in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Sequence,
    Recursive,
    Iterative,
    Generator,
}

impl From<Method> for crate::core::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Sequence => crate::core::Method::Sequence,
            Method::Recursive => crate::core::Method::Recursive,
            Method::Iterative => crate::core::Method::Iterative,
            Method::Generator => crate::core::Method::Generator,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
