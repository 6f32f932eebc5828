//! Output formatting for demo results

use crate::runner::{CacheCheck, FibonacciReport, VariantRun};
use chrono::TimeDelta;
use fibgen::Value;
use itertools::Itertools;

/// Output formatter for demo results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print every line of the Fibonacci demo
    pub fn print_fibonacci(&self, report: &FibonacciReport) {
        for run in &report.runs {
            for &(index, value) in &run.values {
                if self.quiet {
                    println!("{}", value);
                } else {
                    println!("{}", value_line(index, value));
                }
            }
        }

        for check in &report.checks {
            if self.quiet {
                println!("{}", quiet_check_line(check));
            } else {
                println!("{}", check_line(check));
            }
        }
    }

    /// Print the dictionaries demo lines
    pub fn print_dictionaries(&self, lines: &[String]) {
        for line in lines {
            println!("{}", line);
        }
    }

    /// Print a summary after the Fibonacci demo
    pub fn print_summary(&self, report: &FibonacciReport) {
        if self.quiet {
            return;
        }

        println!();
        println!("--- Summary ---");
        for run in &report.runs {
            println!("{}", run_line(run));
        }
        let total: TimeDelta = report.runs.iter().map(|r| r.duration).sum();
        println!("Total generate time: {}", format_elapsed(total));
        println!(
            "Cached indices ({}): [{}]",
            report.cached_indices.len(),
            report.cached_indices.iter().join(", ")
        );
        let wall_clock = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);
        println!("Elapsed wall-clock time: {}", format_elapsed(wall_clock));
    }
}

/// English ordinal suffix for a non-negative integer
pub fn ordinal_suffix(n: i64) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `The 3rd Fibonacci number is 2`
pub fn value_line(index: i64, value: Value) -> String {
    format!(
        "The {}{} Fibonacci number is {}",
        index,
        ordinal_suffix(index),
        value
    )
}

/// `7 is cached.` / `14 is not cached.`
pub fn check_line(check: &CacheCheck) -> String {
    if check.cached {
        format!("{} is cached.", check.index)
    } else {
        format!("{} is not cached.", check.index)
    }
}

/// `7 true` / `14 false`
pub fn quiet_check_line(check: &CacheCheck) -> String {
    format!("{} {}", check.index, check.cached)
}

fn run_line(run: &VariantRun) -> String {
    format!(
        "{}: {} value(s) in {}",
        run.name,
        run.values.len(),
        format_elapsed(run.duration)
    )
}

/// Format a TimeDelta for display, scaling the unit from `ns` upwards
fn format_elapsed(d: TimeDelta) -> String {
    match d.num_nanoseconds() {
        None => "N/A".to_string(),
        Some(ns) if ns < 1_000 => format!("{}ns", ns),
        Some(ns) if ns < 1_000_000 => format!("{:.1}µs", ns as f64 / 1e3),
        Some(ns) if ns < 1_000_000_000 => format!("{:.2}ms", ns as f64 / 1e6),
        Some(ns) => format!("{:.2}s", ns as f64 / 1e9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_demo_labels() {
        let expected = [
            "The 0th Fibonacci number is 0",
            "The 1st Fibonacci number is 1",
            "The 2nd Fibonacci number is 1",
            "The 3rd Fibonacci number is 2",
            "The 4th Fibonacci number is 3",
        ];
        let values = [0, 1, 1, 2, 3];
        for (index, line) in expected.iter().enumerate() {
            assert_eq!(value_line(index as i64, values[index]), *line);
        }
    }

    #[test]
    fn test_teens_and_twenties() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(112), "th");
        assert_eq!(ordinal_suffix(122), "nd");
    }

    #[test]
    fn test_check_lines() {
        assert_eq!(
            check_line(&CacheCheck {
                index: 7,
                cached: true
            }),
            "7 is cached."
        );
        assert_eq!(
            check_line(&CacheCheck {
                index: 14,
                cached: false
            }),
            "14 is not cached."
        );
    }

    #[test]
    fn test_quiet_check_lines_keep_index() {
        assert_eq!(
            quiet_check_line(&CacheCheck {
                index: 7,
                cached: true
            }),
            "7 true"
        );
        assert_eq!(
            quiet_check_line(&CacheCheck {
                index: -1,
                cached: false
            }),
            "-1 false"
        );
    }

    #[test]
    fn test_format_elapsed_units() {
        assert_eq!(format_elapsed(TimeDelta::nanoseconds(640)), "640ns");
        assert_eq!(format_elapsed(TimeDelta::nanoseconds(2_460)), "2.5µs");
        assert_eq!(format_elapsed(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_elapsed(TimeDelta::milliseconds(2500)), "2.50s");
        // Too long to count in nanoseconds
        assert_eq!(format_elapsed(TimeDelta::MAX), "N/A");
    }

    proptest! {
        /// Suffix depends only on the last two digits
        #[test]
        fn prop_suffix_periodic(n in 0i64..1_000_000) {
            prop_assert_eq!(ordinal_suffix(n), ordinal_suffix(n % 100));
        }

        #[test]
        fn prop_suffix_known(n in 0i64..1_000_000) {
            prop_assert!(["st", "nd", "rd", "th"].contains(&ordinal_suffix(n)));
        }
    }
}
