use anyhow::{Context, Result};
use clap::Parser;
use fibseq::cli::{Cli, Commands};
use fibseq::commands::sequence::SequenceConfig;
use fibseq::config::{load_config_or_default, FibConfig};
use fibseq::formatting::{create_formatter, FormattingConfig, OutputFormatter};
use fibseq::FibError;
use std::io::{self, Write};
use std::process::ExitCode;

// Main orchestrator function
fn main() -> ExitCode {
    let cli = Cli::parse();
    let formatter = create_formatter(create_formatting_config(cli.plain));

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, formatter.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    fibseq::observability::init_tracing(cli.verbosity)
        .context("Failed to initialize logging")?;

    let config = load_config_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => handle_demo(&config, formatter),
        Commands::Sequence {
            terms,
            method,
            format,
        } => {
            let sequence_config = build_sequence_config(&config, terms, method, format);
            let stdout = io::stdout();
            fibseq::commands::sequence::handle_sequence(stdout.lock(), sequence_config)?;
            Ok(())
        }
        Commands::Nth { position, method } => {
            let stdout = io::stdout();
            fibseq::commands::nth::handle_nth(stdout.lock(), position, method.into())
        }
        Commands::Init { force } => {
            let path = fibseq::commands::init::init_config(force)?;
            println!(
                "{}",
                formatter.success(&format!("Created {} configuration file", path.display()))
            );
            Ok(())
        }
    }
}

// Side effect handler for failures (I/O at edges)
fn report_failure(err: &anyhow::Error, formatter: &dyn OutputFormatter) {
    if let Some(fib_err) = err.downcast_ref::<FibError>() {
        tracing::debug!(category = fib_err.category(), "Command failed");
    }
    eprintln!("{}", formatter.error(&format!("Error: {:#}", err)));
}

// Side effect handler for the default demonstration
fn handle_demo(config: &FibConfig, formatter: &dyn OutputFormatter) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    fibseq::commands::demo::run_demo(&mut handle, &config.demo, formatter)?;
    handle.flush()?;
    Ok(())
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

// Pure function to build sequence configuration
fn build_sequence_config(
    config: &FibConfig,
    terms: i64,
    method: fibseq::cli::Method,
    format: Option<fibseq::cli::OutputFormat>,
) -> SequenceConfig {
    SequenceConfig {
        terms,
        method: method.into(),
        format: format
            .map(Into::into)
            .unwrap_or(config.output.default_format),
    }
}
