//! Diagnostic logging for the `jsmsg` binary.
//!
//! Lint findings are printed by the reporter, not logged. Log events are
//! progress and per-definition decisions, written to stderr.

use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber: `WARN` by default, `DEBUG` when verbose.
///
/// Library code never calls this.
pub fn init(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .with_filter(filter);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = Registry::default().with(layer).try_init();
}
