//! Drives a site's search form and gathers the result elements.

use std::future::Future;
use std::time::Duration;

use chromiumoxide::element::Element;
use chromiumoxide::Page;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::app::{Result, ScoutError};
use crate::site::SiteProfile;

/// Polling interval while waiting for a selector to appear
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Call `probe` until it yields a value or `timeout` elapses.
///
/// The probe always runs at least once.
pub async fn wait_for<T, F, Fut>(timeout: Duration, interval: Duration, mut probe: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(value) = probe().await {
            return Some(value);
        }
        if Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(interval).await;
    }
}

async fn wait_for_selector(page: &Page, selector: &str, timeout: Duration) -> Result<Element> {
    let found = wait_for(timeout, POLL_INTERVAL, move || async move {
        page.find_element(selector).await.ok()
    })
    .await;

    match found {
        Some(element) => Ok(element),
        None => {
            let url = page.url().await.ok().flatten().unwrap_or_default();
            Err(ScoutError::SelectorNotFound {
                selector: selector.to_string(),
                url,
                waited_secs: timeout.as_secs(),
            })
        }
    }
}

/// Type `query` into the site's search field, submit, and wait for the results page.
pub async fn submit_search(
    page: &Page,
    profile: &SiteProfile,
    query: &str,
    selector_timeout: Duration,
    settle: Duration,
) -> Result<()> {
    info!("Searching for '{}' on {}", query, profile.base_url);

    debug!("Filling in search field {}", profile.search_field_selector);
    let field = wait_for_selector(page, profile.search_field_selector, selector_timeout).await?;
    field
        .click()
        .await
        .map_err(|e| ScoutError::Browser(format!("Failed to focus search field: {}", e)))?;
    field
        .type_str(query)
        .await
        .map_err(|e| ScoutError::Browser(format!("Failed to type search text: {}", e)))?;

    debug!("Pressing search button {}", profile.search_button_selector);
    let button = wait_for_selector(page, profile.search_button_selector, selector_timeout).await?;
    button
        .click()
        .await
        .map_err(|e| ScoutError::Browser(format!("Failed to click search button: {}", e)))?;

    page.wait_for_navigation()
        .await
        .map_err(|e| ScoutError::Browser(format!("Navigation failed: {}", e)))?;

    // Result cards can render after the load event
    tokio::time::sleep(settle).await;

    Ok(())
}

/// All elements on the page matching the site's product container selector
pub async fn product_nodes(page: &Page, profile: &SiteProfile) -> Result<Vec<Element>> {
    info!("Gathering products");
    let nodes = page
        .find_elements(profile.product_container_selector)
        .await
        .map_err(|e| {
            ScoutError::Browser(format!(
                "Failed to query '{}': {}",
                profile.product_container_selector, e
            ))
        })?;

    debug!("Found {} product elements", nodes.len());
    Ok(nodes)
}
