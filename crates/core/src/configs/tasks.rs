use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::platform::PlatformInfo;
use crate::types::TuttiResult;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Command {
    /// A shell command line, run through `sh -c`
    Single(String),
    /// A program followed by its arguments, invoked directly
    Multiple(Vec<String>),
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    pub description: Option<String>,
    pub command: Command,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TasksFileConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Upper bound on concurrently running tasks. Falls back to the runner
    /// default when not specified.
    pub jobs: Option<usize>,
    pub tasks: Vec<TaskConfig>,
}

pub fn parse_tasks_config(yaml_str: &str) -> TuttiResult<TasksFileConfig> {
    let config: TasksFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Load a task-set file from disk
pub fn load_tasks_config(path: &Path) -> TuttiResult<TasksFileConfig> {
    let content = fs::read_to_string(path)?;
    parse_tasks_config(&content)
}

/// The built-in task set: one task per distribution artifact, each produced
/// by a package-manager script.
pub fn default_config() -> TasksFileConfig {
    let package_manager = PlatformInfo::current().package_manager;
    let scripts = [
        "build-types",
        "build-internal-types",
        "check-cli-types",
        "build-cjs",
        "build-esm",
        "build-browser-script-tag",
        "build-react-script-tag",
        "build-standalone-cli",
    ];

    TasksFileConfig {
        name: None,
        description: None,
        jobs: None,
        tasks: scripts
            .iter()
            .map(|script| TaskConfig {
                name: (*script).to_string(),
                description: None,
                command: Command::Multiple(vec![
                    package_manager.to_string(),
                    "run".to_string(),
                    (*script).to_string(),
                ]),
            })
            .collect(),
    }
}
