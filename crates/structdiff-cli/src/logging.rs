//! Stderr diagnostics for the `structdiff` binary.
//!
//! The core library emits `tracing` events; this module installs the only
//! subscriber. Output is compact, without timestamps or targets, so that
//! diagnostics never mix with the diff written to stdout.
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted when no `-v` flag is given.
pub const LOG_ENV: &str = "STRUCTDIFF_LOG";

/// Chooses the stderr level.
///
/// `--quiet` wins, then `-v` repetitions, then a level name in `env_level`,
/// then `warn`. An unparseable `env_level` is ignored.
pub fn level_for(verbose: u8, quiet: bool, env_level: Option<&str>) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => env_level
            .and_then(|name| name.trim().parse().ok())
            .unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global stderr subscriber. Call once, before any command runs.
pub fn init(verbose: u8, quiet: bool) {
    let env_level = std::env::var(LOG_ENV).ok();
    let filter = level_for(verbose, quiet, env_level.as_deref());
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .with_filter(filter);
    Registry::default().with(layer).init();
}
