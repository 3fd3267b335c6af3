//! Task utilities and color management
//!
//! High-level task execution helpers and consistent task label colors for
//! terminal output.

use colored::Color;

use crate::configs::tasks::TaskConfig;
use crate::execution::runner::TaskRunner;
use crate::report::Report;
use crate::types::TuttiResult;

/// Get a consistent color for a task name
pub fn get_task_color(task_name: &str) -> Color {
    // Simple hash of the name bytes keeps the color stable across runs
    let hash = task_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label palette that stays clear of the conventional log colors
    // (red/yellow/green) so task names never read as statuses
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        }, // medium slate blue
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        }, // turquoise
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        }, // dark orange
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        }, // medium violet red
        Color::TrueColor {
            r: 72,
            g: 209,
            b: 204,
        }, // medium turquoise
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        }, // blue violet
    ];

    colors[(hash % colors.len() as u64) as usize]
}

/// Run a task set through a fresh runner with the given pool bound
pub async fn run_tasks(tasks: &[TaskConfig], jobs: usize) -> TuttiResult<Report> {
    let runner = TaskRunner::new(jobs);
    runner.run(tasks).await
}
