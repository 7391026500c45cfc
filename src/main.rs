//! Browser-driven scenario harness for the student CRUD page
//!
//! Drives a real browser through the fixed user-story chain (login, register,
//! negative validation, search boundary, update, delete) and collects
//! screenshot evidence plus a JSON report.

use clap::Parser;

use historias_e2e::commands::Commands;
use historias_e2e::{cli, common};

#[derive(Parser)]
#[command(name = "historias", about = "Browser-driven scenario harness for the student CRUD page")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
