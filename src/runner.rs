//! Scenario chain runner
//!
//! Owns the whole run: driver process up, one shared session, the six
//! scenarios in their fixed order, teardown on every path. A scenario
//! failure aborts the rest of the chain; the remaining scenarios are
//! recorded as skipped, never executed.

use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;

use crate::browser::{DriverProcess, Session};
use crate::common::{Config, Error, Result};
use crate::evidence::Evidence;
use crate::page;
use crate::report::{RunReport, ScenarioReport, ScenarioStatus};
use crate::scenarios::ScenarioId;

/// Executes the fixed scenario chain
pub struct Runner {
    config: Config,
    root: PathBuf,
}

impl Runner {
    /// Runner rooted at `root`: the page and all artifacts resolve under it
    pub fn new(config: Config, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Run the chain end to end and write the report
    ///
    /// The driver process and the session are released on every path,
    /// including mid-chain failure.
    pub async fn run(&self) -> Result<RunReport> {
        let page_path = self.config.page_path(&self.root);
        if !page_path.exists() {
            return Err(Error::Config(format!(
                "page not found: {}",
                page_path.display()
            )));
        }
        let url = page::file_url(&page_path)?;
        let evidence = Evidence::prepare(&self.root)?;

        let driver = DriverProcess::start(&self.config.driver).await?;
        tracing::info!(endpoint = %driver.endpoint(), "webdriver up");

        let session = match Session::open(&driver.endpoint(), &self.config.driver).await {
            Ok(session) => session,
            Err(e) => {
                driver.stop().await;
                return Err(e);
            }
        };

        println!(
            "\n{} {}",
            "Running scenarios against:".blue().bold(),
            url.as_str().white().bold()
        );

        // Fresh page load is the first scenario's precondition
        if let Err(e) = session.goto(&url).await {
            let _ = session.quit().await;
            driver.stop().await;
            return Err(e);
        }

        let started = Instant::now();
        let mut entries: Vec<ScenarioReport> = Vec::new();
        let mut aborted = false;

        for id in ScenarioId::CHAIN {
            if aborted {
                println!("  {} {}", "-".dimmed(), id.label().dimmed());
                entries.push(ScenarioReport {
                    name: id.name().to_string(),
                    label: id.label().to_string(),
                    status: ScenarioStatus::Skipped,
                    duration_ms: 0,
                    error: None,
                    evidence: None,
                });
                continue;
            }

            let scenario_started = Instant::now();
            match id.run(&session, &evidence).await {
                Ok(()) => {
                    println!("  {} {}", "✓".green(), id.label());
                    entries.push(ScenarioReport {
                        name: id.name().to_string(),
                        label: id.label().to_string(),
                        status: ScenarioStatus::Passed,
                        duration_ms: scenario_started.elapsed().as_millis() as u64,
                        error: None,
                        evidence: id.evidence_name().map(|n| format!("{n}.png")),
                    });
                }
                Err(e) => {
                    println!("  {} {}: {}", "✗".red(), id.label(), e);
                    entries.push(ScenarioReport {
                        name: id.name().to_string(),
                        label: id.label().to_string(),
                        status: ScenarioStatus::Failed,
                        duration_ms: scenario_started.elapsed().as_millis() as u64,
                        error: Some(e.to_string()),
                        evidence: None,
                    });
                    aborted = true;
                }
            }
        }

        // Scoped teardown, pass or fail
        if let Err(e) = session.quit().await {
            tracing::warn!(error = %e, "session quit failed");
        }
        driver.stop().await;

        let report = RunReport::from_scenarios(entries, started.elapsed().as_millis() as u64);
        let report_path = report.write(evidence.dir())?;
        tracing::info!(path = %report_path.display(), "report written");

        if report.all_passed() {
            println!(
                "\n{} {}\n",
                "✓".green().bold(),
                format!(
                    "{} scenarios passed in {} ms",
                    report.passed, report.duration_ms
                )
                .green()
                .bold()
            );
        } else {
            println!(
                "\n{} {}\n",
                "✗".red().bold(),
                format!(
                    "{} passed, {} failed, {} skipped",
                    report.passed, report.failed, report.skipped
                )
                .red()
                .bold()
            );
        }

        Ok(report)
    }
}
