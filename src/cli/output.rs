/// Output formatting for the CLI
///
/// Supports multiple output formats for different consumers:
/// - JSON: Single value or array, pretty-printed (for humans and tools alike)
/// - NDJSON: Newline-delimited JSON, one record per line (for piping)
/// - Text: `Display` rendering, one record per line
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Standard JSON (pretty-printed)
    #[default]
    Json,

    /// Newline-delimited JSON (streaming)
    Ndjson,

    /// Plain text
    Text,
}

pub struct OutputWriter {
    format: OutputFormat,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a writer on stdout
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(format, Box::new(io::stdout()))
    }

    pub fn with_writer(format: OutputFormat, writer: Box<dyn Write>) -> Self {
        Self { format, writer }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write one value (a report, a single result)
    pub fn write_value<T: Serialize + Display>(&mut self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(self.writer, "{}", serde_json::to_string_pretty(value)?)?;
            }
            OutputFormat::Ndjson => {
                writeln!(self.writer, "{}", serde_json::to_string(value)?)?;
            }
            OutputFormat::Text => {
                // Display impls for reports end with their own newline
                write!(self.writer, "{}", value)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Write a batch of records
    pub fn write_batch<T: Serialize + Display>(&mut self, records: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                // Pretty-printed JSON array
                writeln!(self.writer, "{}", serde_json::to_string_pretty(records)?)?;
            }
            OutputFormat::Ndjson => {
                for record in records {
                    writeln!(self.writer, "{}", serde_json::to_string(record)?)?;
                }
            }
            OutputFormat::Text => {
                for record in records {
                    writeln!(self.writer, "{}", record)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
