// Adapters layer: concrete sinks behind the domain `Sink` port.

pub mod sink;

pub use sink::{build_sink, ConsoleSink, FileSink, MemorySink};
