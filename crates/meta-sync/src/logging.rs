//! Tracing setup shared by the reconciliation binaries
//!
//! Logs are written to stderr so stdout stays free for the documents a
//! command prints. Repairs made during reconciliation are logged at `debug`.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Filter used in verbose mode: every repair and registry miss, without the
/// debug noise of dependencies.
pub const VERBOSE_DIRECTIVE: &str = "info,meta_schema=debug,meta_sync=debug,content_meta=debug";

/// Install the global subscriber.
///
/// `verbose` takes precedence over `RUST_LOG`. Fails if a subscriber is
/// already installed.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter(verbose)?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter(verbose: bool) -> Result<EnvFilter, ParseError> {
    if verbose {
        return EnvFilter::try_new(VERBOSE_DIRECTIVE);
    }
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
}
