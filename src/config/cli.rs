use crate::core::ReportSink;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the report to standard output. Diagnostics never go through
/// this sink, stdout carries report text only.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for StdoutSink {
    fn write_report(&self, text: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}
