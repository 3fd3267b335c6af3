use anyhow::Result;
use colored::*;
use tutti_core::configs::tasks::Command;
use tutti_core::orchestrator::Orchestrator;
use tutti_core::tasks::get_task_color;

pub fn execute(orchestrator: &Orchestrator) -> Result<()> {
    println!("{}", "Tasks".bold().underline());

    let mut tasks: Vec<_> = orchestrator.list_tasks().iter().collect();
    tasks.sort_by(|a, b| a.name.cmp(&b.name));

    for task in tasks {
        let color = get_task_color(&task.name);
        let command = match &task.command {
            Command::Single(cmd) => cmd.clone(),
            Command::Multiple(argv) => argv.join(" "),
        };

        match &task.description {
            Some(description) => println!(
                "{} {} {}",
                task.name.color(color).bold(),
                description,
                format!("({})", command).dimmed()
            ),
            None => println!(
                "{} {}",
                task.name.color(color).bold(),
                format!("({})", command).dimmed()
            ),
        }
    }

    Ok(())
}
