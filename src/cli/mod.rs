/// CLI utilities for the litlens binary
///
/// Modules:
/// - output: Handles different output formats (JSON, NDJSON, text)
pub mod output;

pub use output::{OutputFormat, OutputWriter};
