use crate::core::arithmetic;
use crate::core::parser::{self, NumeralMode};
use crate::core::reader::trim_line;
use crate::core::words::NumberSpeller;
use crate::core::{ConfigProvider, Pipeline, Record, RunSummary, Storage};
use crate::domain::model::Evaluation;
use crate::utils::error::{LineError, Result};
use std::io::{BufRead, Write};

/// Evaluates `<numeral> <op> <numeral>` lines and spells the results in English.
pub struct RomanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    speller: NumberSpeller,
    mode: NumeralMode,
}

impl<S: Storage, C: ConfigProvider> RomanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let speller = NumberSpeller::new(config.zero_style());
        let mode = if config.strict_numerals() {
            NumeralMode::Strict
        } else {
            NumeralMode::Permissive
        };
        Self {
            storage,
            config,
            speller,
            mode,
        }
    }

    /// Parse, dispatch and render one trimmed line. Each stage short-circuits the next.
    pub fn evaluate_line(&self, line: &str) -> std::result::Result<Evaluation, LineError> {
        let request = parser::parse_line(line, self.mode)?;
        let value = arithmetic::evaluate(&request)?;
        let words = self.speller.spell(value)?;
        Ok(Evaluation { value, words })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RomanPipeline<S, C> {
    fn input_path(&self) -> &str {
        self.config.input_path()
    }

    fn output_path(&self) -> &str {
        self.config.output_path()
    }

    fn extract(&self) -> Result<Box<dyn BufRead>> {
        tracing::debug!("Opening input: {}", self.config.input_path());
        self.storage.open_reader(self.config.input_path())
    }

    fn open_sink(&self) -> Result<Box<dyn Write>> {
        tracing::debug!("Opening output: {}", self.config.output_path());
        self.storage.open_writer(self.config.output_path())
    }

    fn transform(&self, line_number: usize, raw_line: &str) -> Option<Record> {
        let line = trim_line(raw_line);
        if line.is_empty() {
            return None;
        }

        let outcome = self.evaluate_line(line);
        if let Err(e) = &outcome {
            tracing::debug!("Line {}: '{}' -> {}", line_number, line, e);
        }

        Some(Record {
            line_number,
            input: line.to_string(),
            outcome,
        })
    }

    fn load_summary(&self, summary: &RunSummary) -> Result<Option<String>> {
        let Some(path) = self.config.summary_path() else {
            return Ok(None);
        };

        let json = serde_json::to_string_pretty(summary)?;
        tracing::debug!("Writing run summary ({} bytes) to {}", json.len(), path);
        self.storage.write_file(path, json.as_bytes())?;
        Ok(Some(path.to_string()))
    }
}
