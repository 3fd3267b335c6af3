//! Task execution module
//!
//! This module turns configured tasks into child processes and runs the
//! whole set through a bounded-parallel runner.

pub mod command;
pub mod runner;

pub use command::run_command;
pub use runner::{TaskRunner, DEFAULT_JOBS};
