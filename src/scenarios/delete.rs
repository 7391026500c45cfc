//! Delete the updated student

use thirtyfour::By;

use crate::browser::{wait, Session};
use crate::common::Result;
use crate::evidence::Evidence;
use crate::page;

use super::{EVIDENCE_DELETE, UPDATED_NAME};

/// Click the row's delete control, accept the confirmation dialog, and
/// verify the row is gone
pub async fn run(session: &Session, evidence: &Evidence) -> Result<()> {
    let delete_btn = wait::until_clickable(
        session,
        By::XPath(page::row_delete_xpath(UPDATED_NAME)),
        5,
        "delete button for the updated student",
    )
    .await?;
    delete_btn.click().await?;

    let confirmation = wait::until_alert(session, 5, "delete confirmation dialog").await?;
    tracing::debug!(text = %confirmation, "accepting confirmation dialog");
    session.accept_alert().await?;

    wait::until_table_text(session, 5, "table to drop the deleted student", |text| {
        !text.contains(UPDATED_NAME)
    })
    .await?;

    evidence.capture(session, EVIDENCE_DELETE).await?;
    Ok(())
}
