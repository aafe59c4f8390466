//! Diagnostic output for the `netag` binary.
//!
//! Library crates emit `tracing` events; only the binary installs a
//! subscriber. Output goes to stderr so stdout carries nothing but text.

use netag_foundation::{Error, ErrorKind, Result};
use tracing::level_filters::LevelFilter;

/// How much diagnostic output to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Malformed markup and attribute diagnostics.
    Verbose,
    /// Per-line parse and substitution details.
    Debug,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// One step more verbose, saturating at [`Verbosity::Trace`].
    #[must_use]
    pub const fn louder(self) -> Self {
        match self {
            Self::Quiet => Self::Normal,
            Self::Normal => Self::Verbose,
            Self::Verbose => Self::Debug,
            Self::Debug | Self::Trace => Self::Trace,
        }
    }

    /// The matching `tracing` level filter.
    #[must_use]
    pub const fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: Verbosity) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(verbosity.level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to install logger: {e}"))))
}
