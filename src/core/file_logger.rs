use crate::domain::ports::Sink;
use crate::utils::error::Result;

/// Records pre-formatted text to a sink. Knows nothing about arithmetic.
#[derive(Debug, Clone)]
pub struct FileLogger<S: Sink> {
    sink: S,
}

impl<S: Sink> FileLogger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn save_to_file(&self, data: &str) -> Result<()> {
        tracing::debug!("recording entry: {}", data);
        self.sink.write_line(data)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
