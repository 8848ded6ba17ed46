use crate::domain::model::{EntryFormat, SinkKind};
use crate::domain::ports::{ConfigProvider, Sink};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_path;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Writes each line to standard output, optionally behind a display prefix.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match &self.prefix {
            Some(prefix) => writeln!(out, "{}{}", prefix, line)?,
            None => writeln!(out, "{}", line)?,
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonlRecord<'a> {
    recorded_at: DateTime<Utc>,
    entry: &'a str,
}

/// Appends lines to a file. The file is opened and closed on every write.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: EntryFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: EntryFormat::Plain,
        }
    }

    pub fn with_format(mut self, format: EntryFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, err: std::io::Error) -> CalcError {
        CalcError::SinkUnavailable {
            sink: "file".to_string(),
            reason: format!("{}: {}", self.path.display(), err),
        }
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let rendered = match self.format {
            EntryFormat::Plain => line.to_string(),
            EntryFormat::Jsonl => serde_json::to_string(&JsonlRecord {
                recorded_at: Utc::now(),
                entry: line,
            })?,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        writeln!(file, "{}", rendered)?;
        file.flush()?;

        tracing::trace!("appended entry to {}", self.path.display());
        Ok(())
    }
}

/// Keeps lines in memory. Clones share the same buffer.
///
/// Not selectable from configuration; the binary would drop whatever it holds.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut lines = self.lines.lock().map_err(|e| CalcError::SinkUnavailable {
            sink: "memory".to_string(),
            reason: e.to_string(),
        })?;
        lines.push(line.to_string());
        Ok(())
    }
}

pub fn build_sink(config: &dyn ConfigProvider) -> Result<Box<dyn Sink>> {
    let sink: Box<dyn Sink> = match config.sink_kind() {
        SinkKind::Console => match config.console_prefix() {
            Some(prefix) => Box::new(ConsoleSink::with_prefix(prefix)),
            None => Box::new(ConsoleSink::new()),
        },
        SinkKind::File => {
            validate_path("output_path", config.output_path())?;
            Box::new(FileSink::new(config.output_path()).with_format(config.entry_format()))
        }
    };
    tracing::debug!("using {:?} sink", config.sink_kind());
    Ok(sink)
}
