//! Edit the registered student

use thirtyfour::By;

use crate::browser::{wait, Session};
use crate::common::{Error, Result};
use crate::evidence::Evidence;
use crate::page;

use super::{EVIDENCE_UPDATE, STUDENT_NAME, UPDATED_NAME};

/// Open the row's edit form, verify edit mode, rename the student, and
/// verify the table swapped the names
pub async fn run(session: &Session, evidence: &Evidence) -> Result<()> {
    let edit_btn = wait::until_clickable(
        session,
        By::XPath(page::row_edit_xpath(STUDENT_NAME)),
        10,
        "edit button for the registered student",
    )
    .await?;
    edit_btn.click().await?;

    let title = session.find_id(page::FORM_TITLE).await?.text().await?;
    if !title.contains(page::EDIT_FORM_TITLE) {
        return Err(Error::assertion(format!(
            "form title should announce edit mode, got '{title}'"
        )));
    }
    let save_label = session.find_id(page::SAVE_BUTTON).await?.text().await?;
    if !save_label.contains(page::EDIT_SAVE_LABEL) {
        return Err(Error::assertion(format!(
            "save button should announce edit mode, got '{save_label}'"
        )));
    }

    let name_field = session.find_id(page::STUDENT_NAME).await?;
    name_field.clear().await?;
    name_field.send_keys(UPDATED_NAME).await?;
    session.find_id(page::SAVE_BUTTON).await?.click().await?;

    // The old name is a prefix of the new one, so strip the new name before
    // checking that the old one is gone
    wait::until_table_text(session, 5, "table to show the updated name", |text| {
        text.contains(UPDATED_NAME) && !text.replace(UPDATED_NAME, "").contains(STUDENT_NAME)
    })
    .await?;

    evidence.capture(session, EVIDENCE_UPDATE).await?;
    Ok(())
}
