//! Duration ledger and timing report
//!
//! The ledger collects one measured duration per completed task while the
//! run is in flight; the report sorts and renders the ledger once every
//! task has succeeded.

use std::time::Duration;

/// Measured duration of a single completed task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTiming {
    pub name: String,
    pub duration: Duration,
}

/// Insertion-ordered mapping from task name to measured duration.
///
/// Task names are expected to be unique; a repeated name overwrites the
/// earlier measurement in place rather than adding a second entry.
#[derive(Debug, Default)]
pub struct DurationLedger {
    entries: Vec<TaskTiming>,
}

impl DurationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed task's duration
    pub fn record(&mut self, name: String, duration: Duration) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.duration = duration;
        } else {
            self.entries.push(TaskTiming { name, duration });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Timing summary of a fully successful run
#[derive(Debug)]
pub struct Report {
    ledger: DurationLedger,
    total: Duration,
}

impl Report {
    pub fn new(ledger: DurationLedger, total: Duration) -> Self {
        Self { ledger, total }
    }

    /// Per-task timings sorted ascending by duration. The sort is stable,
    /// so equal durations keep their completion order.
    pub fn timings(&self) -> Vec<TaskTiming> {
        let mut timings = self.ledger.entries.clone();
        timings.sort_by_key(|timing| timing.duration);
        timings
    }

    /// Wall-clock time of the whole run, from submission of the first task
    /// to the last completion observed
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Rendered report: one `"<seconds>s <name>"` line per task, fastest
    /// first, followed by a total line
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .timings()
            .iter()
            .map(|timing| format!("{:.2}s {}", timing.duration.as_secs_f64(), timing.name))
            .collect();
        lines.push(format!("{:.2}s total", self.total.as_secs_f64()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(entries: &[(&str, u64)]) -> DurationLedger {
        let mut ledger = DurationLedger::new();
        for (name, millis) in entries {
            ledger.record((*name).to_string(), Duration::from_millis(*millis));
        }
        ledger
    }

    #[test]
    fn timings_sort_ascending() {
        let report = Report::new(
            ledger(&[("b", 900), ("a", 100), ("c", 400)]),
            Duration::from_millis(950),
        );

        let names: Vec<_> = report.timings().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn equal_durations_keep_completion_order() {
        let report = Report::new(
            ledger(&[("second", 200), ("first", 100), ("third", 100)]),
            Duration::from_millis(300),
        );

        let names: Vec<_> = report.timings().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["first", "third", "second"]);
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let mut entries = ledger(&[("a", 100), ("b", 200)]);
        entries.record("a".to_string(), Duration::from_millis(900));

        assert_eq!(entries.len(), 2);
        let report = Report::new(entries, Duration::from_millis(900));
        let names: Vec<_> = report.timings().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn lines_use_two_decimal_places() {
        let report = Report::new(ledger(&[("bundle", 1234)]), Duration::from_millis(1500));

        assert_eq!(report.lines(), vec!["1.23s bundle", "1.50s total"]);
    }

    #[test]
    fn total_line_comes_last() {
        let report = Report::new(
            ledger(&[("a", 100), ("b", 50)]),
            Duration::from_millis(120),
        );

        let lines = report.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("s total"));
    }
}
