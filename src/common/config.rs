//! Configuration file handling
//!
//! Infrastructure settings only (driver binary, port, page location). The
//! scenario data itself is fixed and lives in the scenario modules.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::{Error, Result};

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "historias.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// WebDriver process settings
    #[serde(default)]
    pub driver: DriverConfig,

    /// Page under test
    #[serde(default)]
    pub page: PageConfig,
}

/// WebDriver process settings
#[derive(Debug, Deserialize, Clone)]
pub struct DriverConfig {
    /// Driver binary: a path used as given, or a name resolved on PATH
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Fixed driver port; a free port is picked when unset
    #[serde(default)]
    pub port: Option<u16>,

    /// Extra arguments appended to the driver command line
    #[serde(default)]
    pub args: Vec<String>,

    /// How long to wait for the driver to answer status checks
    #[serde(default = "default_startup_timeout")]
    pub startup_timeout_secs: u64,

    /// Run the browser headless
    #[serde(default)]
    pub headless: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            port: None,
            args: Vec::new(),
            startup_timeout_secs: default_startup_timeout(),
            headless: false,
        }
    }
}

fn default_binary() -> String {
    "chromedriver".to_string()
}

fn default_startup_timeout() -> u64 {
    5
}

/// Page under test
#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    /// Page file, relative to the working directory unless absolute
    #[serde(default = "default_page")]
    pub path: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            path: default_page(),
        }
    }
}

fn default_page() -> PathBuf {
    PathBuf::from("index.html")
}

impl Config {
    /// Load configuration
    ///
    /// An explicitly given path must exist. Otherwise `historias.toml` in
    /// `root` is used when present, and defaults apply when it is not.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let candidate = root.join(CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Absolute location of the page under test
    pub fn page_path(&self, root: &Path) -> PathBuf {
        if self.page.path.is_absolute() {
            self.page.path.clone()
        } else {
            root.join(&self.page.path)
        }
    }
}
