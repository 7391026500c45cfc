//! Run report
//!
//! Serializable record of one chain execution, written next to the
//! screenshots so a run leaves machine-readable evidence as well.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::Result;

/// File name of the serialized report inside the evidence directory
pub const REPORT_FILE: &str = "run_report.json";

/// Outcome of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Passed,
    Failed,
    Skipped,
}

/// Record of one scenario in the chain
#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub label: String,
    pub status: ScenarioStatus,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Record of one full chain run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    /// Assemble a report from scenario records
    pub fn from_scenarios(scenarios: Vec<ScenarioReport>, duration_ms: u64) -> Self {
        let passed = scenarios
            .iter()
            .filter(|s| s.status == ScenarioStatus::Passed)
            .count();
        let failed = scenarios
            .iter()
            .filter(|s| s.status == ScenarioStatus::Failed)
            .count();
        let skipped = scenarios
            .iter()
            .filter(|s| s.status == ScenarioStatus::Skipped)
            .count();
        Self {
            passed,
            failed,
            skipped,
            duration_ms,
            scenarios,
        }
    }

    /// True when every scenario passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }

    /// Write the report as pretty JSON into `dir`, returning the file path
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(REPORT_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, status: ScenarioStatus) -> ScenarioReport {
        ScenarioReport {
            name: name.to_string(),
            label: name.to_uppercase(),
            status,
            duration_ms: 10,
            error: None,
            evidence: None,
        }
    }

    #[test]
    fn counts_come_from_entries() {
        let report = RunReport::from_scenarios(
            vec![
                entry("a", ScenarioStatus::Passed),
                entry("b", ScenarioStatus::Failed),
                entry("c", ScenarioStatus::Skipped),
                entry("d", ScenarioStatus::Skipped),
            ],
            123,
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skipped, 2);
        assert!(!report.all_passed());
    }

    #[test]
    fn passing_report_omits_optional_fields() {
        let report = RunReport::from_scenarios(vec![entry("a", ScenarioStatus::Passed)], 5);
        assert!(report.all_passed());

        let value = serde_json::to_value(&report).unwrap();
        let scenario = &value["scenarios"][0];
        assert_eq!(scenario["status"], "passed");
        assert!(scenario.get("error").is_none());
        assert!(scenario.get("evidence").is_none());
    }

    #[test]
    fn report_round_trips() {
        let report = RunReport::from_scenarios(
            vec![
                entry("a", ScenarioStatus::Passed),
                entry("b", ScenarioStatus::Failed),
            ],
            77,
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.passed, 1);
        assert_eq!(back.failed, 1);
        assert_eq!(back.scenarios.len(), 2);
    }

    #[test]
    fn write_places_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = RunReport::from_scenarios(vec![entry("a", ScenarioStatus::Passed)], 5);
        let path = report.write(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(REPORT_FILE));
        assert!(path.is_file());
    }
}
