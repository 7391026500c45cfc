//! Browser-driven end-to-end harness for the student CRUD page
//!
//! A fixed chain of six scenarios runs against one shared browser session:
//! login, register, negative validation, search boundary, update, delete.
//! Screenshots and a JSON report land in the evidence directory.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod common;
pub mod evidence;
pub mod page;
pub mod report;
pub mod runner;
pub mod scenarios;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use report::{RunReport, ScenarioStatus};
pub use runner::Runner;
