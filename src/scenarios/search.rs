//! Search boundary and mandatory table reset

use thirtyfour::{By, Key};

use crate::browser::{wait, Session};
use crate::common::Result;
use crate::evidence::Evidence;
use crate::page;

use super::EVIDENCE_SEARCH;

/// Length of the over-long search query
const QUERY_LEN: usize = 150;

/// Search for an over-long query, then reset the table before handing the
/// session to the next scenario
pub async fn run(session: &Session, evidence: &Evidence) -> Result<()> {
    let query = "X".repeat(QUERY_LEN);

    let search = session.find_id(page::SEARCH_INPUT).await?;
    search.clear().await?;
    search.send_keys(&query).await?;

    wait::until_visible(
        session,
        By::Id(page::NO_RECORDS),
        3,
        "no-records notice for the boundary query",
    )
    .await?;
    evidence.capture(session, EVIDENCE_SEARCH).await?;

    // Mandatory reset: clear() fires no key event on this page, so type one
    // character and delete it, then wait for the table to come back
    search.clear().await?;
    search.send_keys(" ").await?;
    search.send_keys(Key::Backspace + "").await?;

    wait::until_invisible(
        session,
        By::Id(page::NO_RECORDS),
        5,
        "no-records notice to clear after the reset",
    )
    .await?;
    Ok(())
}
