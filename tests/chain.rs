//! End-to-end tests for the scenario chain
//!
//! These tests run the real `historias` binary against the mock WebDriver,
//! so they cover the whole path: config loading, driver process lifecycle,
//! session setup, the six scenarios, evidence files and the run report.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use historias_e2e::{RunReport, ScenarioStatus};

/// Test context with a throwaway root directory per test
struct TestContext {
    /// Root the harness runs in; page, config and evidence live here
    root: PathBuf,
}

impl TestContext {
    fn new(test_name: &str) -> Self {
        let root = env::temp_dir().join("historias-e2e-tests").join(test_name);

        // Clean up any previous test artifacts
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).expect("Failed to create test root");

        Self { root }
    }

    /// Copy the fixture page into the test root
    fn install_page(&self) {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("index.html");
        fs::copy(fixture, self.root.join("index.html")).expect("Failed to copy fixture page");
    }

    /// Write a config pointing the harness at the mock WebDriver
    fn create_config(&self, driver_args: &[&str]) {
        let args = driver_args
            .iter()
            .map(|a| format!("\"{a}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let config = format!(
            r#"
[driver]
binary = "{mock}"
args = [{args}]
startup_timeout_secs = 5

[page]
path = "index.html"
"#,
            mock = env!("CARGO_BIN_EXE_mock-webdriver"),
        );
        fs::write(self.root.join("historias.toml"), config).expect("Failed to write config");
    }

    /// Run the harness binary with the test root as working directory
    fn run(&self, args: &[&str]) -> HarnessOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_historias"))
            .args(args)
            .current_dir(&self.root)
            .output()
            .expect("Failed to run harness");

        HarnessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        }
    }

    fn evidence_dir(&self) -> PathBuf {
        self.root.join("evidencias_historias")
    }

    fn read_report(&self) -> RunReport {
        let path = self.evidence_dir().join("run_report.json");
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
        serde_json::from_str(&raw).expect("Report is not valid JSON")
    }

    fn evidence_pngs(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.evidence_dir())
            .expect("Evidence dir missing")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".png"))
            .collect();
        names.sort();
        names
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Preserve artifacts by default for debugging test failures.
        // Set PRESERVE_HARNESS_TEST_ARTIFACTS=0 (or "false"/"no") to clean up.
        let preserve = env::var("PRESERVE_HARNESS_TEST_ARTIFACTS")
            .unwrap_or_else(|_| "1".to_string())
            .to_ascii_lowercase();

        if preserve == "0" || preserve == "false" || preserve == "no" {
            let _ = fs::remove_dir_all(&self.root);
        }
    }
}

/// Output from a harness command
struct HarnessOutput {
    stdout: String,
    stderr: String,
    success: bool,
}

// ============== Tests ==============

#[test]
fn full_chain_passes_with_all_evidence() {
    let ctx = TestContext::new("full_chain");
    ctx.install_page();
    ctx.create_config(&[]);

    let output = ctx.run(&["run"]);
    assert!(
        output.success,
        "Run failed:\nstdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
    assert!(
        output.stdout.contains("6 scenarios passed"),
        "Expected passing summary, got: {}",
        output.stdout
    );
    assert!(
        output.stdout.contains("HU-01: Autenticación de administrador"),
        "Expected scenario labels in output: {}",
        output.stdout
    );

    // Five screenshots, one per scenario except the negative validation
    assert_eq!(
        ctx.evidence_pngs(),
        [
            "HU01_Login_Exitoso.png",
            "HU02_Registro_Exitoso.png",
            "HU03_Busqueda_Limite.png",
            "HU04_Edicion_Completa.png",
            "HU05_Eliminacion_Exitosa.png",
        ]
    );
    for name in ctx.evidence_pngs() {
        let bytes = fs::read(ctx.evidence_dir().join(&name)).expect("Failed to read screenshot");
        assert!(
            bytes.starts_with(b"\x89PNG"),
            "{name} is not a PNG file"
        );
    }

    let report = ctx.read_report();
    assert_eq!(report.passed, 6);
    assert_eq!(report.failed, 0);
    assert_eq!(report.skipped, 0);

    let names: Vec<_> = report.scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "login",
            "register",
            "negative_validation",
            "search_boundary",
            "update",
            "delete"
        ]
    );
    for entry in &report.scenarios {
        assert_eq!(entry.status, ScenarioStatus::Passed, "{} not passed", entry.name);
        assert!(entry.error.is_none());
        assert_eq!(entry.evidence.is_none(), entry.name == "negative_validation");
    }
    assert_eq!(
        report.scenarios[0].evidence.as_deref(),
        Some("HU01_Login_Exitoso.png")
    );
}

#[test]
fn failed_login_aborts_and_skips_the_rest() {
    let ctx = TestContext::new("failed_login");
    ctx.install_page();
    ctx.create_config(&["--fail-auth"]);

    let output = ctx.run(&["run"]);
    assert!(!output.success, "Run should fail when login fails");
    assert!(
        output.stdout.contains("dashboard visible after login"),
        "Expected the timed-out condition in output: {}",
        output.stdout
    );
    assert!(
        output.stdout.contains("0 passed, 1 failed, 5 skipped"),
        "Expected failing summary, got: {}",
        output.stdout
    );

    // The report is still written, with the rest of the chain skipped
    let report = ctx.read_report();
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 5);
    assert_eq!(report.scenarios[0].status, ScenarioStatus::Failed);
    assert!(
        report.scenarios[0]
            .error
            .as_deref()
            .unwrap_or("")
            .contains("dashboard visible after login"),
        "Expected timeout error in report: {:?}",
        report.scenarios[0].error
    );
    for entry in &report.scenarios[1..] {
        assert_eq!(entry.status, ScenarioStatus::Skipped, "{} not skipped", entry.name);
    }

    // Login never reached its screenshot
    assert!(ctx.evidence_pngs().is_empty());
}

#[test]
fn run_requires_the_page_file() {
    let ctx = TestContext::new("missing_page");
    ctx.create_config(&[]);
    // No page installed

    let output = ctx.run(&["run"]);
    assert!(!output.success);
    assert!(
        output.stderr.contains("page not found"),
        "Expected missing-page error, got: {}",
        output.stderr
    );
}

#[test]
fn scenarios_lists_the_fixed_chain() {
    let ctx = TestContext::new("scenarios_list");

    let output = ctx.run(&["scenarios"]);
    assert!(output.success);
    assert!(output.stdout.contains("Scenario chain (fixed order):"));
    assert!(output.stdout.contains("negative_validation"));
    assert!(
        output.stdout.contains("HU-04: Editar información del estudiante"),
        "Expected labels in listing: {}",
        output.stdout
    );
    assert!(output.stdout.contains("evidence: HU05_Eliminacion_Exitosa.png"));
}

#[test]
fn doctor_reports_ready() {
    let ctx = TestContext::new("doctor_ready");
    ctx.install_page();
    ctx.create_config(&[]);

    let output = ctx.run(&["doctor"]);
    assert!(
        output.success,
        "Doctor failed:\nstdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
    assert!(output.stdout.contains("Ready to run."));
}

#[test]
fn doctor_flags_missing_page() {
    let ctx = TestContext::new("doctor_no_page");
    ctx.create_config(&[]);
    // No page installed

    let output = ctx.run(&["doctor"]);
    assert!(!output.success);
    assert!(
        output.stdout.contains("(missing)"),
        "Expected missing page marker: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains("environment not ready"),
        "Expected doctor failure on stderr: {}",
        output.stderr
    );
}
