use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An arithmetic action the calculator knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Multiplication,
    Subtraction,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Multiplication => "Multiplication",
            Operation::Subtraction => "Subtraction",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Multiplication => "*",
            Operation::Subtraction => "-",
        }
    }
}

/// Description of one completed operation, e.g. `Addition: 5 + 3 = 8`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
    pub result: i64,
}

impl LogEntry {
    pub fn new(operation: Operation, lhs: i64, rhs: i64, result: i64) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            result,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {} = {}",
            self.operation.name(),
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    File,
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "file" => Ok(SinkKind::File),
            other => Err(format!("unknown sink kind: {}", other)),
        }
    }
}

/// How a file sink lays out each recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EntryFormat {
    #[default]
    Plain,
    Jsonl,
}

impl FromStr for EntryFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(EntryFormat::Plain),
            "jsonl" => Ok(EntryFormat::Jsonl),
            other => Err(format!("unknown entry format: {}", other)),
        }
    }
}
