use crate::domain::model::{EntryFormat, SinkKind};
use crate::utils::error::Result;

/// A destination for recorded text lines.
pub trait Sink {
    fn write_line(&self, line: &str) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}

pub trait ConfigProvider {
    fn sink_kind(&self) -> SinkKind;
    fn output_path(&self) -> &str;
    fn entry_format(&self) -> EntryFormat;
    fn console_prefix(&self) -> Option<&str>;
}
