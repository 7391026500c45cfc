//! Register a new student (happy path)

use thirtyfour::By;

use crate::browser::{wait, Session};
use crate::common::{Error, Result};
use crate::evidence::Evidence;
use crate::page;

use super::{EVIDENCE_REGISTER, STUDENT_CODE, STUDENT_GRADE, STUDENT_NAME};

/// Fill the form, pick the grade, save, and verify the new table row
pub async fn run(session: &Session, evidence: &Evidence) -> Result<()> {
    session
        .find_id(page::STUDENT_NAME)
        .await?
        .send_keys(STUDENT_NAME)
        .await?;
    session
        .find_id(page::STUDENT_CODE)
        .await?
        .send_keys(STUDENT_CODE)
        .await?;

    // Open the grade select, then pick the option by value
    session.find_id(page::STUDENT_GRADE).await?.click().await?;
    session
        .find(By::XPath(page::grade_option_xpath(STUDENT_GRADE)))
        .await?
        .click()
        .await?;

    session.find_id(page::SAVE_BUTTON).await?.click().await?;

    wait::until_visible(
        session,
        By::Id(page::SUCCESS_MESSAGE),
        5,
        "success message after save",
    )
    .await?;

    let table = session.table_text().await?;
    if !table.contains(STUDENT_NAME) {
        return Err(Error::assertion(format!(
            "student '{STUDENT_NAME}' missing from the table after save"
        )));
    }

    evidence.capture(session, EVIDENCE_REGISTER).await?;
    Ok(())
}
