//! Shared browser session
//!
//! One session lives for the whole scenario chain. Every scenario drives the
//! page through this handle; it is opened before the first scenario and quit
//! after the last, pass or fail.

use thirtyfour::{
    By, ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement,
};
use url::Url;

use crate::common::config::DriverConfig;
use crate::common::Result;
use crate::page;

/// Handle to the one browser session shared by the chain
pub struct Session {
    driver: WebDriver,
}

impl Session {
    /// Open a session against a running driver
    pub async fn open(endpoint: &str, config: &DriverConfig) -> Result<Self> {
        let caps = build_capabilities(config)?;
        let driver = WebDriver::new(endpoint, caps).await?;
        Ok(Self { driver })
    }

    /// Navigate to the page under test
    pub async fn goto(&self, url: &Url) -> Result<()> {
        self.driver.goto(url.as_str()).await?;
        Ok(())
    }

    /// Locate a single element
    pub async fn find(&self, by: By) -> Result<WebElement> {
        Ok(self.driver.find(by).await?)
    }

    /// Locate a single element by its id attribute
    pub async fn find_id(&self, id: &str) -> Result<WebElement> {
        self.find(By::Id(id)).await
    }

    /// Rendered text of the student table body
    pub async fn table_text(&self) -> Result<String> {
        let body = self.find_id(page::TABLE_BODY).await?;
        Ok(body.text().await?)
    }

    /// PNG screenshot of the current viewport
    pub async fn screenshot_png(&self) -> Result<Vec<u8>> {
        Ok(self.driver.screenshot_as_png().await?)
    }

    /// Text of the currently open native dialog, if any
    pub async fn alert_text(&self) -> Result<String> {
        Ok(self.driver.get_alert_text().await?)
    }

    /// Accept the currently open native dialog
    pub async fn accept_alert(&self) -> Result<()> {
        self.driver.accept_alert().await?;
        Ok(())
    }

    /// End the session and close the browser
    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

fn build_capabilities(config: &DriverConfig) -> Result<ChromeCapabilities> {
    let mut caps = DesiredCapabilities::chrome();
    if config.headless {
        caps.set_headless()?;
    } else {
        caps.add_arg("--start-maximized")?;
    }
    Ok(caps)
}
