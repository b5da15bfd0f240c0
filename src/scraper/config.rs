use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens to a batch when a single element's extraction faults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The first fault fails the whole batch; no partial results
    #[default]
    AllOrNothing,
    /// Faults are logged and the element is skipped
    Isolate,
}

/// Configuration for the browser session and product collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Timeout for the initial page navigation in seconds (default: 1200)
    pub navigation_timeout_secs: u64,

    /// How long to wait for the search field and button to appear (default: 30)
    pub selector_timeout_secs: u64,

    /// Wait time after submitting the search for results to render, in milliseconds (default: 1000)
    pub wait_after_search_ms: u64,

    /// Maximum concurrent extractions; 0 means one per result element (default: 0)
    pub max_concurrency: usize,

    /// Behaviour when one extraction faults (default: all_or_nothing)
    pub failure_policy: FailurePolicy,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: true,
            navigation_timeout_secs: 1200,
            selector_timeout_secs: 30,
            wait_after_search_ms: 1000,
            max_concurrency: 0,
            failure_policy: FailurePolicy::AllOrNothing,
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl ScraperConfig {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn selector_timeout(&self) -> Duration {
        Duration::from_secs(self.selector_timeout_secs)
    }

    pub fn wait_after_search(&self) -> Duration {
        Duration::from_millis(self.wait_after_search_ms)
    }
}
