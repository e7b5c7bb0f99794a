use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::ZeroStyle;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Evaluates Roman numeral arithmetic and spells the results in English")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input file, one `<numeral> <op> <numeral>` per line [default: input.txt]
    #[arg(long)]
    pub input: Option<String>,

    /// Output file, overwritten on every run [default: output.txt]
    #[arg(long)]
    pub output: Option<String>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<String>,

    /// How a zero result is written
    #[arg(long, value_enum)]
    pub zero: Option<ZeroStyle>,

    /// Only accept canonical numerals between I and MMMCMXCIX
    #[arg(long)]
    pub strict: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds validated settings; flags given on the command line win over the config file.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(input) = &self.input {
            settings.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if let Some(summary) = &self.summary {
            settings.summary_path = Some(summary.clone());
        }
        if let Some(zero) = self.zero {
            settings.zero_style = zero;
        }
        settings.strict_numerals |= self.strict;
        settings.monitor |= self.monitor;

        settings.validate()?;
        Ok(settings)
    }
}
