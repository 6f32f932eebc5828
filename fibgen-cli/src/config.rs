//! Configuration resolution from CLI args

use crate::cli::{Args, BackendKind, Demo};
use crate::error::CliError;
use fibgen::MAX_INDEX;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Demo selection
    pub demo: Demo,
    /// Number of values to generate (indices `0..count`)
    pub count: i64,
    /// Indices to report cache membership for
    pub checks: Vec<i64>,
    /// Caching generator storage
    pub backend: BackendKind,
    /// Quiet mode
    pub quiet: bool,
    /// Log level picked by `--quiet` / `--verbose`, if either was passed
    pub log_level: Option<&'static str>,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let limit = MAX_INDEX as i64 + 1;
        if args.count > limit {
            return Err(CliError::Config(format!(
                "count {} is too large: at most {} values fit in 128 bits",
                args.count, limit
            )));
        }

        Ok(Config {
            demo: args.demo,
            count: args.count,
            checks: args.check,
            backend: args.backend,
            quiet: args.quiet,
            log_level: log_level(args.quiet, args.verbose),
        })
    }

    /// Directives for this binary and the generator library.
    ///
    /// A `RUST_LOG` filter is left alone; otherwise the flag level (or
    /// [`DEFAULT_LOG_LEVEL`]) applies to both crates.
    pub fn log_directives(&self, env_filter_set: bool) -> Vec<String> {
        if env_filter_set {
            return Vec::new();
        }
        let level = self.log_level.unwrap_or(DEFAULT_LOG_LEVEL);
        LOG_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect()
    }

    /// Whether the Fibonacci demo is selected
    pub fn runs_fibonacci(&self) -> bool {
        matches!(self.demo, Demo::Fibonacci | Demo::All)
    }

    /// Whether the dictionaries demo is selected
    pub fn runs_dictionaries(&self) -> bool {
        matches!(self.demo, Demo::Dictionaries | Demo::All)
    }
}

/// Level used when neither a flag nor `RUST_LOG` says otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Tracing targets of the library and of this binary
const LOG_TARGETS: [&str; 2] = ["fibgen", "fibgen_demo"];

fn log_level(quiet: bool, verbose: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}
