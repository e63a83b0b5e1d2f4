use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Level used until configuration has been loaded.
const BOOTSTRAP_LEVEL: &str = "warn";

/// ## Summary
/// Installs the global subscriber, writing to stderr, and returns a handle for
/// swapping the filter once configuration is known.
pub fn init() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(BOOTSTRAP_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    filter_handle
}

/// Maps `-v` occurrences to a level; `None` keeps the configured one.
#[must_use]
pub const fn verbosity_level(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// ## Summary
/// Replaces the active filter with the CLI verbosity level if given, otherwise
/// with the configured level. Invalid levels are logged and ignored.
pub fn apply_level(handle: &FilterHandle, configured: &str, verbosity: u8) {
    let level = verbosity_level(verbosity).unwrap_or(configured);

    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level, keeping {BOOTSTRAP_LEVEL}");
    }
}
