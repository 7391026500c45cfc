//! CLI command definitions
//!
//! Defines the clap commands for the harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full scenario chain
    Run {
        /// Config file (default: historias.toml in the working directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the scenarios in execution order
    Scenarios,

    /// Check the environment a run would use
    Doctor {
        /// Config file (default: historias.toml in the working directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
