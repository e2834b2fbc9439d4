//! Headless browser session management.
//!
//! Thin wrapper over chromiumoxide: launch, CDP event pump, navigation
//! with a timeout. Everything observable about a page goes through
//! `collect`; no scoring happens here.

use std::time::Duration;

use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{AuditError, Result};

pub struct Session {
    browser: Browser,
    handler_task: JoinHandle<()>,
    nav_timeout: Duration,
}

impl Session {
    pub async fn launch(nav_timeout_secs: u64) -> Result<Self> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .arg("--mute-audio")
            .arg("--no-first-run")
            .arg("--hide-scrollbars")
            .window_size(1920, 1080)
            .build()
            .map_err(AuditError::Browser)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| AuditError::Browser(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("browser event: {:?}", event);
            }
        });

        info!("headless browser launched");
        Ok(Self {
            browser,
            handler_task,
            nav_timeout: Duration::from_secs(nav_timeout_secs),
        })
    }

    pub async fn new_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| AuditError::Browser(e.to_string()))
    }

    /// Navigates and waits for the load to settle, bounded by the
    /// configured timeout. A short grace period lets late asset requests
    /// land before the caller reads its counters.
    pub async fn navigate(&self, page: &Page, url: &str) -> Result<()> {
        tokio::time::timeout(self.nav_timeout, async {
            page.goto(url)
                .await
                .map_err(|e| AuditError::Browser(format!("navigation failed: {e}")))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| AuditError::Browser(format!("load did not settle: {e}")))?;
            Ok::<(), AuditError>(())
        })
        .await
        .map_err(|_| AuditError::Timeout(self.nav_timeout.as_secs()))??;

        tokio::time::sleep(Duration::from_millis(1000)).await;
        Ok(())
    }

    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| AuditError::Browser(e.to_string()))?;
        self.handler_task.abort();
        Ok(())
    }
}
