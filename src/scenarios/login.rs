//! Administrator login

use thirtyfour::By;

use crate::browser::{wait, Session};
use crate::common::Result;
use crate::evidence::Evidence;
use crate::page;

use super::{ADMIN_PASS, ADMIN_USER, EVIDENCE_LOGIN};

/// Log in with the fixed credentials and wait for the dashboard
pub async fn run(session: &Session, evidence: &Evidence) -> Result<()> {
    let username = wait::until_visible(session, By::Id(page::USERNAME), 5, "login form").await?;
    username.send_keys(ADMIN_USER).await?;
    session.find_id(page::PASSWORD).await?.send_keys(ADMIN_PASS).await?;
    session.find_id(page::LOGIN_BUTTON).await?.click().await?;

    wait::until_visible(
        session,
        By::Id(page::DASHBOARD),
        5,
        "dashboard visible after login",
    )
    .await?;

    evidence.capture(session, EVIDENCE_LOGIN).await?;
    Ok(())
}
