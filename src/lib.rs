pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{build_sink, ConsoleSink, FileSink, MemorySink};
pub use config::toml_config::TomlConfig;
pub use core::{
    calculator::Calculator, file_logger::FileLogger, service::CalculatorService,
    violation::CalculatorViolation,
};
pub use domain::model::{EntryFormat, LogEntry, Operation, SinkKind};
pub use domain::ports::{ConfigProvider, Sink};
pub use utils::error::{CalcError, Result};
