//! Browser-driven product search.
//!
//! # Architecture
//!
//! ```text
//! ChromeSession → navigator (search) → product nodes → collect → Vec<Product>
//! ```
//!
//! Extraction tasks only see result elements through [`ProductNode`], which
//! exposes read-only queries. The page itself is shared by every task.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shopscout::scraper::{collect, navigator, ChromeSession, CollectOptions, ScraperConfig};
//!
//! let config = ScraperConfig::default();
//! let session = ChromeSession::launch(config.clone()).await?;
//! let page = session.open(site.profile().base_url).await?;
//! navigator::submit_search(
//!     &page,
//!     site.profile(),
//!     query.text(),
//!     config.selector_timeout(),
//!     config.wait_after_search(),
//! )
//! .await?;
//! let nodes = navigator::product_nodes(&page, site.profile()).await?;
//! let products = collect(&nodes, &query, &site, &CollectOptions::from(&config)).await?;
//! ```

mod chrome;
mod collector;
mod config;
pub mod navigator;

pub use chrome::ChromeSession;
pub use collector::{collect, CollectOptions};
pub use config::{FailurePolicy, ScraperConfig};

use crate::app::Result;
use crate::domain::ProductRecord;
use async_trait::async_trait;

/// Read-only view of one result element on a loaded page
#[async_trait]
pub trait ProductNode: Send + Sync {
    /// Inner text of the first descendant matching `selector`
    ///
    /// Returns `Ok(None)` when nothing matches.
    async fn text(&self, selector: &str) -> Result<Option<String>>;

    /// Attribute `name` of the first descendant matching `selector`
    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;
}

/// Site-specific mapping from a result element to a [`ProductRecord`]
///
/// Missing sub-elements must produce `None` fields. An `Err` is reserved for
/// faults talking to the browser.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, node: &dyn ProductNode) -> Result<ProductRecord>;
}
