//! Tutti Core Library
//!
//! This is the core library for the tutti build orchestrator. It runs a
//! package's build tasks concurrently over a bounded pool, times every task,
//! and produces a sorted duration report.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`orchestrator`] - High-level orchestration interface
//! - [`execution`] - Command invocation and the bounded-parallel runner
//! - [`configs`] - Task-set configuration parsing
//! - [`report`] - Duration ledger and timing report
//! - [`tasks`] - Task utilities and color management
//! - [`platform`] - Package-manager resolution per host OS
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`Orchestrator`] which resolves the task
//! set and runs it:
//!
//! ```rust,no_run
//! use tutti_core::orchestrator::{Orchestrator, OrchestratorConfig};
//!
//! # async fn example() -> tutti_core::types::TuttiResult<()> {
//! let orchestrator = Orchestrator::new(OrchestratorConfig {
//!     config_path: None,
//!     jobs: None,
//! })?;
//!
//! let report = orchestrator.run(&[]).await?;
//! for line in report.lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod orchestrator;
pub mod platform;
pub mod report;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use orchestrator::{Orchestrator, OrchestratorConfig};
pub use report::Report;
pub use types::{TuttiError, TuttiResult};
