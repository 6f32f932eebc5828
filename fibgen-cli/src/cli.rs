//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};

/// Which demo to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Demo {
    /// Generate values with both generators, then inspect the cache
    Fibonacci,
    /// Insert, look up and test keys in a string-keyed map
    Dictionaries,
    /// Run every demo in order (default)
    #[default]
    All,
}

/// Storage used by the caching generator
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum BackendKind {
    /// HashMap keyed by index (default)
    #[default]
    Hashmap,
    /// Dense Vec of slots
    Vec,
}

/// Fibonacci generator demo
#[derive(Parser, Debug)]
#[command(name = "fibgen-demo", about = "Compare caching and non-caching Fibonacci generators", version)]
pub struct Args {
    /// Demo to run: fibonacci, dictionaries, or all
    #[arg(long, value_enum, default_value = "all")]
    pub demo: Demo,

    /// How many values to generate, starting at index 0
    #[arg(short = 'n', long, default_value = "10", value_parser = clap::value_parser!(i64).range(0..))]
    pub count: i64,

    /// Indices to look up in the cache afterwards (comma-separated)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "7,14",
        allow_hyphen_values = true
    )]
    pub check: Vec<i64>,

    /// Storage backend for the caching generator
    #[arg(long, value_enum, default_value = "hashmap")]
    pub backend: BackendKind,

    /// Quiet mode - only output values
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log cache activity
    #[arg(short, long)]
    pub verbose: bool,
}
