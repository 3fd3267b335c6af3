//! Bounded-parallel task runner
//!
//! This module fans a task set out over a fixed-size pool, times each task,
//! and drains completions in arrival order so a failure surfaces as early as
//! possible instead of behind a slow sibling.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::configs::tasks::TaskConfig;
use crate::execution::command::run_command;
use crate::report::{DurationLedger, Report};
use crate::types::{TuttiError, TuttiResult};

/// Default upper bound on concurrently running tasks
pub const DEFAULT_JOBS: usize = 20;

/// Runs a set of independent tasks concurrently and collects their timings
pub struct TaskRunner {
    jobs: usize,
}

impl TaskRunner {
    pub fn new(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }

    /// Run every task to completion, or return on the first failure.
    ///
    /// All tasks are submitted up front; the pool admits at most `jobs` of
    /// them at a time and queued tasks start in submission order. Each task
    /// is timed from the moment it gets a pool slot until its command
    /// returns, whether it succeeded or not.
    ///
    /// The first failure observed ends the run immediately. Siblings that
    /// are already running are not killed; the runner just stops waiting
    /// for them, and their results are never read.
    pub async fn run(&self, tasks: &[TaskConfig]) -> TuttiResult<Report> {
        if tasks.is_empty() {
            return Err(TuttiError::Config("no tasks to run".to_string()));
        }

        let started = Instant::now();
        let pool = Arc::new(Semaphore::new(self.jobs));
        let mut running = JoinSet::new();

        for task in tasks {
            let task = task.clone();
            let pool = Arc::clone(&pool);
            running.spawn(async move {
                let _slot = match pool.acquire_owned().await {
                    Ok(slot) => slot,
                    Err(_) => {
                        let failure = TuttiError::Task {
                            name: task.name.clone(),
                            cause: "task pool closed before the task could start".to_string(),
                        };
                        return (task.name, Duration::ZERO, Err(failure));
                    }
                };

                let clock = Instant::now();
                let outcome = run_command(&task).await;
                (task.name, clock.elapsed(), outcome)
            });
        }

        let mut ledger = DurationLedger::new();
        while let Some(joined) = running.join_next().await {
            let (name, duration, outcome) = joined
                .map_err(|e| TuttiError::Runner(format!("task worker failed: {}", e)))?;

            // Failed tasks are recorded too; their entries are simply never
            // reported because the run aborts below.
            ledger.record(name, duration);
            outcome?;
        }

        Ok(Report::new(ledger, started.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::tasks::Command;

    fn shell_task(name: &str, cmd: &str) -> TaskConfig {
        TaskConfig {
            name: name.to_string(),
            description: None,
            command: Command::Single(cmd.to_string()),
        }
    }

    #[tokio::test]
    async fn reports_every_task_sorted_by_duration() {
        let tasks = vec![
            shell_task("mid", "sleep 0.3"),
            shell_task("quick", "sleep 0.1"),
            shell_task("slow", "sleep 0.5"),
        ];

        let report = TaskRunner::new(DEFAULT_JOBS).run(&tasks).await.unwrap();
        let names: Vec<_> = report.timings().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["quick", "mid", "slow"]);
        assert!(report.total() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn first_failure_ends_the_run() {
        let tasks = vec![
            shell_task("survivor", "sleep 0.3"),
            shell_task("broken", "exit 3"),
        ];

        let result = TaskRunner::new(DEFAULT_JOBS).run(&tasks).await;
        match result {
            Err(TuttiError::Task { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("expected the failing task to end the run, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn single_task_on_a_single_slot_pool() {
        let tasks = vec![shell_task("only", "sleep 0.2")];

        let report = TaskRunner::new(1).run(&tasks).await.unwrap();
        let timings = report.timings();
        assert_eq!(timings.len(), 1);
        assert!(timings[0].duration >= Duration::from_millis(200));
        assert!(report.total() >= timings[0].duration);
    }

    #[tokio::test]
    async fn queues_tasks_beyond_the_pool_bound() {
        let tasks: Vec<_> = (0..25)
            .map(|i| shell_task(&format!("task-{:02}", i), "true"))
            .collect();

        let report = TaskRunner::new(4).run(&tasks).await.unwrap();
        let timings = report.timings();
        assert_eq!(timings.len(), 25);

        let mut names: Vec<_> = timings.iter().map(|t| t.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 25);
    }

    #[tokio::test]
    async fn total_covers_the_longest_task() {
        let tasks = vec![
            shell_task("short", "sleep 0.1"),
            shell_task("long", "sleep 0.4"),
        ];

        let report = TaskRunner::new(DEFAULT_JOBS).run(&tasks).await.unwrap();
        let longest = report
            .timings()
            .iter()
            .map(|t| t.duration)
            .max()
            .unwrap();
        assert!(report.total() >= longest);
    }

    #[tokio::test]
    async fn rejects_an_empty_task_set() {
        let result = TaskRunner::new(DEFAULT_JOBS).run(&[]).await;
        assert!(matches!(result, Err(TuttiError::Config(_))));
    }
}
