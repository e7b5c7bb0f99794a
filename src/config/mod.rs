#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::ZeroStyle;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::Serialize;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Fully resolved run settings: defaults, then the TOML file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub input_path: String,
    pub output_path: String,
    pub summary_path: Option<String>,
    pub zero_style: ZeroStyle,
    pub strict_numerals: bool,
    pub monitor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            summary_path: None,
            zero_style: ZeroStyle::default(),
            strict_numerals: false,
            monitor: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input_path)?;
        validation::validate_path("output.path", &self.output_path)?;
        validation::validate_distinct_paths(&self.input_path, &self.output_path)?;
        if let Some(summary) = &self.summary_path {
            validation::validate_path("output.summary", summary)?;
            validation::validate_distinct_paths(&self.input_path, summary)?;
            validation::validate_distinct_paths(&self.output_path, summary)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn summary_path(&self) -> Option<&str> {
        self.summary_path.as_deref()
    }

    fn zero_style(&self) -> ZeroStyle {
        self.zero_style
    }

    fn strict_numerals(&self) -> bool {
        self.strict_numerals
    }
}
