use clap::Parser;
use roman_calc::utils::logger;
use roman_calc::{CliConfig, EtlEngine, LocalStorage, RomanPipeline};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let output_path = settings.output_path.clone();
    let monitor_enabled = settings.monitor;
    if monitor_enabled {
        tracing::info!("System monitoring enabled");
    }

    let pipeline = RomanPipeline::new(LocalStorage::default(), settings);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(summary) => {
            tracing::debug!("{} lines evaluated", summary.evaluated);
            println!("Processing complete. Check {} for results.", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
