//! Screenshot evidence artifacts
//!
//! One PNG per captured scenario, in a fixed directory under the working
//! directory, created on first use.

use std::path::{Path, PathBuf};

use crate::browser::Session;
use crate::common::Result;

/// Directory collecting one screenshot per captured scenario
pub const EVIDENCE_DIR: &str = "evidencias_historias";

/// Handle to the evidence directory
pub struct Evidence {
    dir: PathBuf,
}

impl Evidence {
    /// Create the evidence directory under `root` if missing
    pub fn prepare(root: &Path) -> Result<Self> {
        let dir = root.join(EVIDENCE_DIR);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    /// The directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a viewport screenshot as `<name>.png`
    pub async fn capture(&self, session: &Session, name: &str) -> Result<PathBuf> {
        let png = session.screenshot_png().await?;
        let path = self.dir.join(format!("{name}.png"));
        std::fs::write(&path, png)?;
        tracing::debug!(path = %path.display(), "saved screenshot");
        Ok(path)
    }
}
