//! Logging setup (`tracing` + `tracing-subscriber`)
//!
//! `RUST_LOG` wins when set. Otherwise `--verbose` selects debug and the
//! default is warn, so progress lines on stdout stay uncluttered.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose).as_str().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
