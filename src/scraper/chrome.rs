use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::{Result, ScoutError};
use crate::scraper::config::ScraperConfig;
use crate::scraper::ProductNode;

/// A running Chrome instance driven through chromiumoxide
pub struct ChromeSession {
    browser: Browser,
    handler: JoinHandle<()>,
    config: ScraperConfig,
}

impl ChromeSession {
    /// Launch Chrome with the given configuration
    pub async fn launch(config: ScraperConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| ScoutError::Browser(format!("Failed to build browser config: {}", e)))?;

        info!("Connecting to browser (headless: {})", config.headless);
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScoutError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            )))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            config,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Open a new page and navigate to `url` under the navigation timeout
    pub async fn open(&self, url: &str) -> Result<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScoutError::Browser(format!("Failed to create page: {}", e)))?;

        if let Some(ref ua) = self.config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| ScoutError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        let timeout = self.config.navigation_timeout();
        tokio::time::timeout(timeout, page.goto(url))
            .await
            .map_err(|_| {
                ScoutError::Browser(format!(
                    "Navigation to {} timed out after {}s",
                    url,
                    timeout.as_secs()
                ))
            })?
            .map_err(|e| ScoutError::Browser(format!("Navigation failed: {}", e)))?;

        info!("Loaded initial page {}", url);
        Ok(page)
    }

    /// Close the browser and stop the event handler
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Browser process wait failed: {}", e);
        }
        self.handler.abort();
    }
}

async fn first_match(element: &Element, selector: &str) -> Result<Option<Element>> {
    let mut matches = element
        .find_elements(selector)
        .await
        .map_err(|e| ScoutError::Extraction(format!("Query '{}' failed: {}", selector, e)))?;

    if matches.is_empty() {
        Ok(None)
    } else {
        Ok(Some(matches.swap_remove(0)))
    }
}

#[async_trait]
impl ProductNode for Element {
    async fn text(&self, selector: &str) -> Result<Option<String>> {
        let Some(child) = first_match(self, selector).await? else {
            return Ok(None);
        };

        child
            .inner_text()
            .await
            .map_err(|e| ScoutError::Extraction(format!("Reading text of '{}' failed: {}", selector, e)))
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let Some(child) = first_match(self, selector).await? else {
            return Ok(None);
        };

        child.attribute(name).await.map_err(|e| {
            ScoutError::Extraction(format!(
                "Reading attribute '{}' of '{}' failed: {}",
                name, selector, e
            ))
        })
    }
}
