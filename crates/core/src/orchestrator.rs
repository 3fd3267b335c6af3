//! High-level orchestration interface
//!
//! This module provides the [`Orchestrator`] which serves as the primary
//! entry point for running a build's task set. It encapsulates:
//! - Loading the task-set file, or falling back to the built-in set
//! - Resolving the pool bound from flag, file, or default
//! - Selecting which tasks to run
//!
//! The CLI layer only handles presentation on top of it.

use std::path::{Path, PathBuf};

use crate::configs::tasks::{default_config, load_tasks_config, TaskConfig, TasksFileConfig};
use crate::execution::runner::DEFAULT_JOBS;
use crate::report::Report;
use crate::tasks::run_tasks;
use crate::types::{TuttiError, TuttiResult};

/// Name of the task-set file looked up in the working directory
pub const CONFIG_FILE: &str = "tutti.yml";

/// High-level orchestrator that owns the resolved task set
pub struct Orchestrator {
    pub config: TasksFileConfig,
    jobs: usize,
}

/// Configuration for initializing an orchestrator
pub struct OrchestratorConfig {
    /// Explicit path to a task-set file. When `None`, `tutti.yml` in the
    /// working directory is used if present, otherwise the built-in set.
    pub config_path: Option<PathBuf>,
    /// Overrides the task-set file's `jobs` key when set
    pub jobs: Option<usize>,
}

impl Orchestrator {
    /// Initialize a new orchestrator from the given options
    pub fn new(options: OrchestratorConfig) -> TuttiResult<Self> {
        let config = match &options.config_path {
            Some(path) => load_tasks_config(path)?,
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    load_tasks_config(local)?
                } else {
                    default_config()
                }
            }
        };

        if config.tasks.is_empty() {
            return Err(TuttiError::Config("task set is empty".to_string()));
        }

        let jobs = options.jobs.or(config.jobs).unwrap_or(DEFAULT_JOBS);
        Ok(Self { config, jobs })
    }

    /// Tasks that would run, in file order
    pub fn list_tasks(&self) -> &[TaskConfig] {
        &self.config.tasks
    }

    /// Run the whole task set, or only the named tasks when `filter` is
    /// non-empty
    pub async fn run(&self, filter: &[String]) -> TuttiResult<Report> {
        let selected = self.select_tasks(filter)?;
        run_tasks(&selected, self.jobs).await
    }

    fn select_tasks(&self, filter: &[String]) -> TuttiResult<Vec<TaskConfig>> {
        if filter.is_empty() {
            return Ok(self.config.tasks.clone());
        }

        let mut selected = Vec::new();
        for name in filter {
            let task = self
                .config
                .tasks
                .iter()
                .find(|task| &task.name == name)
                .ok_or_else(|| TuttiError::Config(format!("Task '{}' not found", name)))?;
            selected.push(task.clone());
        }
        Ok(selected)
    }
}
