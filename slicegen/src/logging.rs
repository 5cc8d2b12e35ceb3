//! Diagnostic logging to stderr.

use std::io;

use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive (e.g. `slicegen=debug`).
pub const LOG_ENV: &str = "SLICEGEN_LOG";

/// Install the global subscriber.
///
/// `SLICEGEN_LOG` takes precedence; otherwise each `-v` raises the level
/// one step from `warn`. An unparsable `SLICEGEN_LOG` is reported once the
/// subscriber is up.
pub fn init(verbose: u8) -> Result<()> {
    let directive = std::env::var(LOG_ENV).ok();
    let (filter, rejected) = select_filter(directive.as_deref(), verbose)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()?;

    if let Some(problem) = rejected {
        tracing::warn!(
            directive = directive.as_deref().unwrap_or_default(),
            %problem,
            "ignoring invalid {}, falling back to level {}",
            LOG_ENV,
            level(verbose)
        );
    }
    Ok(())
}

/// The filter to install, plus the parse error when `directive` was rejected.
fn select_filter(directive: Option<&str>, verbose: u8) -> Result<(EnvFilter, Option<String>)> {
    let fallback = || EnvFilter::try_new(level(verbose));
    match directive.filter(|d| !d.trim().is_empty()) {
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => Ok((filter, None)),
            Err(err) => Ok((fallback()?, Some(err.to_string()))),
        },
        None => Ok((fallback()?, None)),
    }
}

fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
