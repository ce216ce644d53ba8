use crate::core::{terms, Method, MAX_EXACT_POSITION};
use crate::errors::Result;
use crate::io::output::{create_writer, OutputFormat, SequenceReport};
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    pub terms: i64,
    pub method: Method,
    pub format: OutputFormat,
}

pub fn build_report(terms_requested: i64, method: Method) -> SequenceReport {
    SequenceReport::new(method, terms_requested, terms(method, terms_requested))
}

pub fn handle_sequence<W: Write>(writer: W, config: SequenceConfig) -> Result<()> {
    if config.terms > MAX_EXACT_POSITION + 1 {
        warn!(
            terms = config.terms,
            "Terms beyond position {} overflow i64 and will wrap", MAX_EXACT_POSITION
        );
    }
    info!(method = %config.method, terms = config.terms, "Building sequence");

    let report = build_report(config.terms, config.method);
    let mut output = create_writer(writer, config.format);
    output.write_report(&report)
}
