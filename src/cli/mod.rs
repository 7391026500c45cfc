//! CLI command handling
//!
//! Dispatches CLI commands and formats output.

use std::path::PathBuf;

use colored::Colorize;

use crate::browser::process;
use crate::commands::Commands;
use crate::common::{Config, Error, Result};
use crate::runner::Runner;
use crate::scenarios::ScenarioId;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run { config } => {
            let root = std::env::current_dir()?;
            let config = Config::load(config.as_deref(), &root)?;
            let report = Runner::new(config, root).run().await?;

            if report.all_passed() {
                Ok(())
            } else {
                Err(Error::assertion(format!(
                    "{} of {} scenarios did not pass",
                    report.failed + report.skipped,
                    report.scenarios.len()
                )))
            }
        }

        Commands::Scenarios => {
            println!("{}", "Scenario chain (fixed order):".blue().bold());
            for (i, id) in ScenarioId::CHAIN.iter().enumerate() {
                println!("  {}. {:<20} {}", i + 1, id.name(), id.label());
                if let Some(name) = id.evidence_name() {
                    println!("     {}", format!("evidence: {name}.png").dimmed());
                }
            }
            Ok(())
        }

        Commands::Doctor { config } => doctor(config),
    }
}

/// Report what a run would use and whether it can start
fn doctor(config_path: Option<PathBuf>) -> Result<()> {
    let root = std::env::current_dir()?;
    let config = Config::load(config_path.as_deref(), &root)?;

    println!("{}", "Environment check".blue().bold());

    let mut healthy = true;

    match process::resolve_binary(&config.driver.binary) {
        Ok(path) => println!("  {} driver binary: {}", "✓".green(), path.display()),
        Err(e) => {
            healthy = false;
            println!("  {} driver binary: {}", "✗".red(), e);
        }
    }

    let page = config.page_path(&root);
    if page.exists() {
        println!("  {} page under test: {}", "✓".green(), page.display());
    } else {
        healthy = false;
        println!(
            "  {} page under test: {} (missing)",
            "✗".red(),
            page.display()
        );
    }

    let port = match config.driver.port {
        Some(port) => port.to_string(),
        None => "auto".to_string(),
    };
    println!("  {} driver port: {}", "✓".green(), port);
    println!(
        "  {} browser mode: {}",
        "✓".green(),
        if config.driver.headless {
            "headless"
        } else {
            "headed (--start-maximized)"
        }
    );

    if healthy {
        println!("\n{}", "Ready to run.".green().bold());
        Ok(())
    } else {
        Err(Error::Config("environment not ready".to_string()))
    }
}
