//! Empty-form validation (negative path)

use std::time::Duration;

use tokio::time::sleep;

use crate::browser::Session;
use crate::common::{Error, Result};
use crate::evidence::Evidence;
use crate::page;

/// Settle pause before the empty submit; the page exposes no condition to
/// poll for this, so a fixed delay is the only option
const SETTLE_MS: u64 = 2000;

/// Submit the form empty and check the inline error shows immediately
pub async fn run(session: &Session, _evidence: &Evidence) -> Result<()> {
    sleep(Duration::from_millis(SETTLE_MS)).await;

    session.find_id(page::SAVE_BUTTON).await?.click().await?;

    // No wait here: the validation error must show synchronously
    let error = session.find_id(page::FORM_ERROR).await?;
    if !error.is_displayed().await? {
        return Err(Error::assertion(
            "form error should be visible after submitting empty fields",
        ));
    }
    Ok(())
}
