//! Command invocation
//!
//! This module resolves a configured task command into a spawnable process
//! and runs it to completion. Children inherit the parent's standard output
//! and error streams, so a task's diagnostics reach the terminal directly.

use tokio::process::Command as ProcessCommand;

use crate::configs::tasks::{Command, TaskConfig};
use crate::types::{TuttiError, TuttiResult};

/// Run a task's command to completion and report its exit status.
///
/// A command that cannot be started and a command that exits non-zero both
/// surface as a task failure.
pub async fn run_command(task: &TaskConfig) -> TuttiResult<()> {
    let mut command = match &task.command {
        Command::Single(cmd) => shell_command(cmd),
        Command::Multiple(argv) => argv_command(&task.name, argv)?,
    };

    let status = command.status().await.map_err(|e| TuttiError::Task {
        name: task.name.clone(),
        cause: format!("failed to execute: {}", e),
    })?;

    if !status.success() {
        return Err(TuttiError::Task {
            name: task.name.clone(),
            cause: format!("exited with code {}", status.code().unwrap_or(-1)),
        });
    }

    Ok(())
}

/// Build a child process for a single shell command
fn shell_command(cmd: &str) -> ProcessCommand {
    let mut command = ProcessCommand::new("sh");
    command.arg("-c").arg(cmd);
    command
}

/// Build a child process for a program with arguments
fn argv_command(task_name: &str, argv: &[String]) -> TuttiResult<ProcessCommand> {
    let (program, args) = argv.split_first().ok_or_else(|| TuttiError::Task {
        name: task_name.to_string(),
        cause: "task has an empty command list".to_string(),
    })?;

    let mut command = ProcessCommand::new(program);
    command.args(args);
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, command: Command) -> TaskConfig {
        TaskConfig {
            name: name.to_string(),
            description: None,
            command,
        }
    }

    #[tokio::test]
    async fn shell_command_success() {
        let result = run_command(&task("ok", Command::Single("exit 0".to_string()))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn nonzero_exit_is_a_task_failure() {
        let result = run_command(&task("broken", Command::Single("exit 7".to_string()))).await;
        match result {
            Err(TuttiError::Task { name, cause }) => {
                assert_eq!(name, "broken");
                assert!(cause.contains('7'));
            }
            other => panic!("expected a task failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_program_is_a_task_failure() {
        let argv = vec!["tutti-no-such-program".to_string()];
        let result = run_command(&task("ghost", Command::Multiple(argv))).await;
        assert!(matches!(result, Err(TuttiError::Task { .. })));
    }

    #[tokio::test]
    async fn empty_argv_is_a_task_failure() {
        let result = run_command(&task("blank", Command::Multiple(Vec::new()))).await;
        assert!(matches!(result, Err(TuttiError::Task { .. })));
    }
}
