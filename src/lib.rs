pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::Settings;

pub use crate::core::{etl::EtlEngine, pipeline::RomanPipeline};
pub use utils::error::{EtlError, LineError, Result};
