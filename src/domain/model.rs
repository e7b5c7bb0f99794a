use crate::utils::error::LineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl TryFrom<char> for Operator {
    type Error = LineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(LineError::InvalidOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        };
        write!(f, "{}", symbol)
    }
}

/// Two decoded operands and the raw operator character from one input line.
///
/// The operator stays a `char` until dispatch so that numeral errors are
/// reported ahead of operator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRequest {
    pub left: u64,
    pub operator: char,
    pub right: u64,
}

/// How a result of zero is spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ZeroStyle {
    /// `"Zero"`.
    #[default]
    Word,
    /// An empty output line.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub value: u64,
    pub words: String,
}

/// The outcome of one non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub line_number: usize,
    pub input: String,
    pub outcome: Result<Evaluation, LineError>,
}

impl Record {
    /// Text written to the output line for this record.
    pub fn output(&self) -> String {
        match &self.outcome {
            Ok(evaluation) => evaluation.words.clone(),
            Err(e) => e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line_number: usize,
    pub input: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input_path: String,
    pub output_path: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u128,
    pub lines_read: usize,
    pub blank_lines: usize,
    pub evaluated: usize,
    pub diagnostic_counts: BTreeMap<String, usize>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunSummary {
    pub fn new(input_path: &str, output_path: &str) -> Self {
        Self {
            input_path: input_path.to_string(),
            output_path: output_path.to_string(),
            started_at: Utc::now(),
            elapsed_ms: 0,
            lines_read: 0,
            blank_lines: 0,
            evaluated: 0,
            diagnostic_counts: BTreeMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn record_blank(&mut self) {
        self.lines_read += 1;
        self.blank_lines += 1;
    }

    pub fn record(&mut self, record: &Record) {
        self.lines_read += 1;
        match &record.outcome {
            Ok(_) => self.evaluated += 1,
            Err(e) => {
                *self.diagnostic_counts.entry(e.kind().to_string()).or_insert(0) += 1;
                self.diagnostics.push(Diagnostic {
                    line_number: record.line_number,
                    input: record.input.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    pub fn diagnostic_total(&self) -> usize {
        self.diagnostics.len()
    }
}
