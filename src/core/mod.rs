pub mod calculator;
pub mod file_logger;
pub mod service;
pub mod violation;

pub use crate::domain::model::{EntryFormat, LogEntry, Operation, SinkKind};
pub use crate::domain::ports::{ConfigProvider, Sink};
pub use crate::utils::error::Result;
