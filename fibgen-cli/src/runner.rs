//! Fibonacci demo: drive both generators and inspect the cache

use crate::cli::BackendKind;
use crate::config::Config;
use crate::error::CliError;
use chrono::TimeDelta;
use fibgen::{
    Backend, CachingGenerator, Generator, HashMapBackend, NonCachingGenerator, Value, VecBackend,
};
use std::time::Instant;
use tracing::{debug, info_span};

/// Values produced by one generator
pub struct VariantRun {
    pub name: &'static str,
    pub values: Vec<(i64, Value)>,
    pub duration: TimeDelta,
}

/// Cache membership for one checked index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCheck {
    pub index: i64,
    pub cached: bool,
}

/// Everything the Fibonacci demo observed
pub struct FibonacciReport {
    pub runs: Vec<VariantRun>,
    pub checks: Vec<CacheCheck>,
    pub cached_indices: Vec<usize>,
}

/// Run the demo with the configured backend
pub fn run_fibonacci(config: &Config) -> Result<FibonacciReport, CliError> {
    match config.backend {
        BackendKind::Hashmap => {
            run_with(CachingGenerator::with_backend(HashMapBackend::new()), config)
        }
        BackendKind::Vec => run_with(CachingGenerator::with_backend(VecBackend::new()), config),
    }
}

/// Caching generator first, then the non-caching one, then the cache checks
fn run_with<B: Backend>(
    cached: CachingGenerator<B>,
    config: &Config,
) -> Result<FibonacciReport, CliError> {
    let uncached = NonCachingGenerator::new();

    let runs = vec![
        use_generator("caching", &cached, config.count)?,
        use_generator("non-caching", &uncached, config.count)?,
    ];

    let checks = config
        .checks
        .iter()
        .map(|&index| CacheCheck {
            index,
            cached: cached.is_cached(index),
        })
        .collect();

    Ok(FibonacciReport {
        runs,
        checks,
        cached_indices: cached.cached_indices(),
    })
}

/// Generate indices `0..count` through any generator
pub fn use_generator(
    name: &'static str,
    generator: &dyn Generator,
    count: i64,
) -> Result<VariantRun, CliError> {
    let _span = info_span!("generator", name).entered();
    let start = Instant::now();

    let values = (0..count)
        .map(|index| generator.generate(index).map(|value| (index, value)))
        .collect::<Result<Vec<_>, _>>()?;

    let duration = TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX);
    debug!(count, ?duration, "generated values");

    Ok(VariantRun {
        name,
        values,
        duration,
    })
}
