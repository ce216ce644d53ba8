use crate::core::Method;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// A list of terms together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub method: Method,
    pub terms: i64,
    pub values: Vec<i64>,
}

impl SequenceReport {
    pub fn new(method: Method, terms: i64, values: Vec<i64>) -> Self {
        Self {
            method,
            terms,
            values,
        }
    }
}

/// Render integers as a bracketed, comma-and-space separated list.
///
/// ```
/// use fibseq::io::output::format_sequence;
///
/// assert_eq!(format_sequence(&[]), "[]");
/// assert_eq!(format_sequence(&[0, 1, 1]), "[0, 1, 1]");
/// ```
pub fn format_sequence(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Write the formatted list followed by a line break.
pub fn write_sequence<W: Write + ?Sized>(writer: &mut W, values: &[i64]) -> io::Result<()> {
    writeln!(writer, "{}", format_sequence(values))
}

/// Print the formatted list to standard output.
///
/// ```
/// use fibseq::io::output::print_sequence;
///
/// print_sequence(&[0, 1, 1, 2]).unwrap();
/// ```
pub fn print_sequence(values: &[i64]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_sequence(&mut handle, values)
}

/// Render a report in the requested format, without a trailing newline.
pub fn render_report(report: &SequenceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(format_sequence(&report.values)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SequenceReport) -> Result<()>;
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SequenceReport) -> Result<()> {
        let rendered = render_report(report, OutputFormat::Terminal)?;
        writeln!(self.writer, "{}", rendered)?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SequenceReport) -> Result<()> {
        let json = render_report(report, OutputFormat::Json)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    writer: W,
    format: OutputFormat,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
