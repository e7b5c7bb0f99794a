use crate::domain::model::{Record, RunSummary, ZeroStyle};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Where lines come from and where results go.
pub trait Storage {
    /// Opens an existing file for line-by-line reading.
    fn open_reader(&self, path: &str) -> Result<Box<dyn BufRead>>;
    /// Creates or truncates a file for writing.
    fn open_writer(&self, path: &str) -> Result<Box<dyn Write>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn summary_path(&self) -> Option<&str>;
    fn zero_style(&self) -> ZeroStyle;
    fn strict_numerals(&self) -> bool;
}

pub trait Pipeline {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Opens the line source. Runs before the sink is touched.
    fn extract(&self) -> Result<Box<dyn BufRead>>;
    fn open_sink(&self) -> Result<Box<dyn Write>>;
    /// Evaluates one raw line; `None` means the line was blank and produces no output.
    fn transform(&self, line_number: usize, raw_line: &str) -> Option<Record>;
    /// Persists the run summary when one was requested.
    fn load_summary(&self, summary: &RunSummary) -> Result<Option<String>>;
}
