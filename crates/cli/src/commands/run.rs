use anyhow::Result;
use tutti_core::orchestrator::Orchestrator;
use tutti_core::types::TuttiError;

pub async fn execute(orchestrator: &Orchestrator, tasks: &[String]) -> Result<()> {
    match orchestrator.run(tasks).await {
        Ok(report) => {
            for line in report.lines() {
                println!("{}", line);
            }
            Ok(())
        }
        // The failing child has already written its diagnostics to the
        // inherited streams
        Err(TuttiError::Task { .. }) => std::process::exit(1),
        Err(e) => Err(anyhow::anyhow!("Failed to run tasks: {}", e)),
    }
}
