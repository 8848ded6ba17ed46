use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. A configured level wins over `verbose`.
pub fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    match level {
        Some(level) => format!("srp_calculator={}", level),
        None if verbose => "srp_calculator=debug,info".to_string(),
        None => "srp_calculator=info".to_string(),
    }
}

// stdout carries the narration, so logs always go to stderr.
pub fn init_logger(verbose: bool, level: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
