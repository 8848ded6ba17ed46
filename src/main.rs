use clap::Parser;
use srp_calculator::app::demo::run_demo;
use srp_calculator::utils::{logger, validation::Validate};
use srp_calculator::{build_sink, CalcError, CliConfig, ConfigProvider, TomlConfig};

fn report(e: &CalcError) -> ! {
    tracing::error!(
        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let toml_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(toml_config) => Some(toml_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    logger::init_logger(
        config.verbose,
        toml_config.as_ref().and_then(|c| c.log_level()),
        toml_config.as_ref().is_some_and(|c| c.json_logging()),
    );

    tracing::info!("Starting srp-calculator demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let provider: &dyn ConfigProvider = match &toml_config {
        Some(toml_config) => {
            if let Err(e) = toml_config.validate() {
                report(&e);
            }
            toml_config
        }
        None => {
            if let Err(e) = config.validate() {
                report(&e);
            }
            &config
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = run_demo(&mut stdout, || build_sink(provider)) {
        report(&e);
    }

    Ok(())
}
