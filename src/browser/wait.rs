//! Bounded condition waits
//!
//! Explicit polling with a deadline, never a blind sleep. A failed element
//! lookup counts as "not yet" while the deadline is open; only the deadline
//! expiring turns it into an error naming the condition that never held.

use std::time::Duration;

use thirtyfour::{By, WebElement};
use tokio::time::{sleep, Instant};

use crate::browser::Session;
use crate::common::{Error, Result};

/// Poll interval between condition checks
const POLL_MS: u64 = 100;

/// Wait until the element is present and displayed, returning it
pub async fn until_visible(
    session: &Session,
    by: By,
    timeout_secs: u64,
    what: &str,
) -> Result<WebElement> {
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        if let Ok(elem) = session.find(by.clone()).await {
            if elem.is_displayed().await.unwrap_or(false) {
                return Ok(elem);
            }
        }
        if Instant::now() >= deadline {
            return Err(Error::wait_timeout(what, timeout_secs));
        }
        sleep(Duration::from_millis(POLL_MS)).await;
    }
}

/// Wait until the element is absent or no longer displayed
pub async fn until_invisible(
    session: &Session,
    by: By,
    timeout_secs: u64,
    what: &str,
) -> Result<()> {
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        match session.find(by.clone()).await {
            Ok(elem) => {
                if !elem.is_displayed().await.unwrap_or(true) {
                    return Ok(());
                }
            }
            // Gone from the DOM counts as invisible
            Err(_) => return Ok(()),
        }
        if Instant::now() >= deadline {
            return Err(Error::wait_timeout(what, timeout_secs));
        }
        sleep(Duration::from_millis(POLL_MS)).await;
    }
}

/// Wait until the element is displayed and enabled, returning it
pub async fn until_clickable(
    session: &Session,
    by: By,
    timeout_secs: u64,
    what: &str,
) -> Result<WebElement> {
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        if let Ok(elem) = session.find(by.clone()).await {
            if elem.is_clickable().await.unwrap_or(false) {
                return Ok(elem);
            }
        }
        if Instant::now() >= deadline {
            return Err(Error::wait_timeout(what, timeout_secs));
        }
        sleep(Duration::from_millis(POLL_MS)).await;
    }
}

/// Wait until a native dialog is open, returning its text
pub async fn until_alert(session: &Session, timeout_secs: u64, what: &str) -> Result<String> {
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        if let Ok(text) = session.alert_text().await {
            return Ok(text);
        }
        if Instant::now() >= deadline {
            return Err(Error::wait_timeout(what, timeout_secs));
        }
        sleep(Duration::from_millis(POLL_MS)).await;
    }
}

/// Wait until the rendered table text satisfies `pred`, returning the text
pub async fn until_table_text(
    session: &Session,
    timeout_secs: u64,
    what: &str,
    pred: impl Fn(&str) -> bool,
) -> Result<String> {
    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        if let Ok(text) = session.table_text().await {
            if pred(&text) {
                return Ok(text);
            }
        }
        if Instant::now() >= deadline {
            return Err(Error::wait_timeout(what, timeout_secs));
        }
        sleep(Duration::from_millis(POLL_MS)).await;
    }
}
