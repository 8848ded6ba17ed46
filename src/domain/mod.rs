// Domain layer: core models and ports. No knowledge of consoles, files or config formats.

pub mod model;
pub mod ports;
