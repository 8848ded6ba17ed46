pub mod toml_config;

pub const DEFAULT_OUTPUT_PATH: &str = "./calculations.log";
pub const DEFAULT_CONSOLE_PREFIX: &str = "Saving to file: ";

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::{EntryFormat, SinkKind};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "srp-calculator")]
    #[command(about = "Walks through the Single Responsibility Principle with a calculator")]
    pub struct CliConfig {
        #[arg(long, value_enum, default_value_t = SinkKind::Console)]
        pub sink: SinkKind,

        #[arg(long, default_value = super::DEFAULT_OUTPUT_PATH)]
        pub output_path: String,

        #[arg(long, value_enum, default_value_t = EntryFormat::Plain)]
        pub format: EntryFormat,

        #[arg(long, default_value = super::DEFAULT_CONSOLE_PREFIX)]
        pub prefix: String,

        #[arg(short, long, help = "Load sink and logging settings from a TOML file")]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn sink_kind(&self) -> SinkKind {
            self.sink
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn entry_format(&self) -> EntryFormat {
            self.format
        }

        fn console_prefix(&self) -> Option<&str> {
            if self.prefix.is_empty() {
                None
            } else {
                Some(&self.prefix)
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if self.sink == SinkKind::File {
                validate_path("output_path", &self.output_path)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["srp-calculator"]);
            assert_eq!(config.sink_kind(), SinkKind::Console);
            assert_eq!(config.entry_format(), EntryFormat::Plain);
            assert_eq!(config.console_prefix(), Some("Saving to file: "));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_file_sink_flags() {
            let config = CliConfig::parse_from([
                "srp-calculator",
                "--sink",
                "file",
                "--output-path",
                "/tmp/calc.jsonl",
                "--format",
                "jsonl",
            ]);
            assert_eq!(config.sink_kind(), SinkKind::File);
            assert_eq!(config.output_path(), "/tmp/calc.jsonl");
            assert_eq!(config.entry_format(), EntryFormat::Jsonl);
        }

        #[test]
        fn test_empty_output_path_rejected_for_file_sink() {
            let config =
                CliConfig::parse_from(["srp-calculator", "--sink", "file", "--output-path", ""]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_only_persistent_sinks_are_selectable() {
            assert!(CliConfig::try_parse_from(["srp-calculator", "--sink", "memory"]).is_err());
            assert!(CliConfig::try_parse_from(["srp-calculator", "--sink", "file"]).is_ok());
        }
    }
}
