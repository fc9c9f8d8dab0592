//! Output for finished runs: the two-line text report, its JSON twin, and
//! the side-by-side layout comparison table.

use crate::bench::RunOutcome;
use crate::config::BenchConfig;
use crate::store::Layout;
use crate::timer::format_seconds;
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub layout: Layout,
    pub array_size: usize,
    pub threads: usize,
    pub target: i32,
    pub seed: Option<u64>,
    pub total: u64,
    pub elapsed_seconds: f64,
    pub slot_stride_bytes: Option<usize>,
    pub per_worker: Vec<u64>,
}

impl RunReport {
    pub fn new(config: &BenchConfig, outcome: &RunOutcome) -> Self {
        Self {
            layout: outcome.layout,
            array_size: config.array_size,
            threads: outcome.workers(),
            target: config.target,
            seed: config.seed,
            total: outcome.total,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
            slot_stride_bytes: outcome.layout.slot_stride(),
            per_worker: outcome.per_worker.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of {}: {}", target_label(self.target), self.total)?;
        write!(
            f,
            "Time taken: {} seconds",
            format_seconds(Duration::from_secs_f64(self.elapsed_seconds))
        )
    }
}

fn target_label(target: i32) -> String {
    match target {
        1 => "ones".to_string(),
        other => format!("{}s", other),
    }
}

// =============================================================================
// Layout comparison
// =============================================================================

/// Renders one row per layout with its time relative to the fastest one.
pub fn comparison_table(config: &BenchConfig, outcomes: &[RunOutcome]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} elements, {} threads, {} logical CPUs, target {}\n\n",
        config.array_size,
        config.num_threads,
        num_cpus::get(),
        config.target
    ));
    out.push_str(&format!(
        "{:<10} {:>12} {:>14} {:>12} {:>10}\n",
        "layout", "slot stride", "total", "seconds", "relative"
    ));

    let fastest = outcomes.iter().map(|o| o.elapsed).min().unwrap_or_default();
    let slowest = outcomes.iter().map(|o| o.elapsed).max().unwrap_or_default();

    for outcome in outcomes {
        let stride = match outcome.layout.slot_stride() {
            Some(bytes) => format!("{} B", bytes),
            None => "-".to_string(),
        };
        let relative = relative_to(outcome.elapsed, fastest);
        let row = format!(
            "{:<10} {:>12} {:>14} {:>12} {:>9.2}x",
            outcome.layout.name(),
            stride,
            outcome.total,
            format_seconds(outcome.elapsed),
            relative
        );
        let row = if outcomes.len() > 1 && outcome.elapsed == fastest {
            row.green().to_string()
        } else if outcomes.len() > 1 && outcome.elapsed == slowest {
            row.red().to_string()
        } else {
            row
        };
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn relative_to(elapsed: Duration, fastest: Duration) -> f64 {
    if fastest.is_zero() {
        return 1.0;
    }
    elapsed.as_secs_f64() / fastest.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn config() -> BenchConfig {
        BenchConfig::new(10, NonZeroUsize::new(2).unwrap()).with_seed(5)
    }

    fn outcome(layout: Layout, millis: u64) -> RunOutcome {
        RunOutcome {
            layout,
            per_worker: vec![3, 2],
            total: 5,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_text_report_matches_classic_output() {
        let report = RunReport::new(&config(), &outcome(Layout::Padded, 1250));
        assert_eq!(
            report.to_string(),
            "Number of ones: 5\nTime taken: 1.250 seconds"
        );
    }

    #[test]
    fn test_text_report_names_other_targets() {
        let report = RunReport::new(&config().with_target(3), &outcome(Layout::Shared, 0));
        assert!(report.to_string().starts_with("Number of 3s: 5\n"));
    }

    #[test]
    fn test_json_report() {
        let report = RunReport::new(&config(), &outcome(Layout::Shared, 500));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["layout"], "shared");
        assert_eq!(value["threads"], 2);
        assert_eq!(value["total"], 5);
        assert_eq!(value["seed"], 5);
        assert_eq!(value["slot_stride_bytes"], 8);
        assert_eq!(value["per_worker"], serde_json::json!([3, 2]));
        assert_eq!(value["elapsed_seconds"], 0.5);
    }

    #[test]
    fn test_returned_layout_has_no_stride() {
        let report = RunReport::new(&config(), &outcome(Layout::Returned, 1));
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["slot_stride_bytes"].is_null());
    }

    #[test]
    fn test_comparison_table_rows() {
        colored::control::set_override(false);
        let outcomes = vec![
            outcome(Layout::Shared, 300),
            outcome(Layout::Padded, 100),
            outcome(Layout::Returned, 150),
        ];
        let table = comparison_table(&config(), &outcomes);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("10 elements, 2 threads"));
        assert!(lines[2].contains("slot stride"));
        assert!(lines[3].starts_with("shared"));
        assert!(lines[3].contains("8 B"));
        assert!(lines[3].contains("3.00x"));
        assert!(lines[4].contains("64 B"));
        assert!(lines[4].contains("1.00x"));
        assert!(lines[5].contains("1.50x"));
    }

    #[test]
    fn test_relative_to_zero_duration() {
        assert_eq!(relative_to(Duration::ZERO, Duration::ZERO), 1.0);
    }
}
