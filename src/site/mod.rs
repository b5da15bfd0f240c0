//! Supported shopping sites.
//!
//! Each site is a variant of [`Site`] carrying a static [`SiteProfile`] and
//! its own extractor. Sites are looked up by exact base URL.

pub mod amazon;

use async_trait::async_trait;

use crate::app::{Result, ScoutError};
use crate::domain::ProductRecord;
use crate::scraper::{Extractor, ProductNode};

pub use amazon::AmazonExtractor;

/// Selectors needed to search one site and find its result cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    pub base_url: &'static str,
    pub search_field_selector: &'static str,
    pub search_button_selector: &'static str,
    pub product_container_selector: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Amazon,
}

impl Site {
    pub fn all() -> &'static [Site] {
        &[Site::Amazon]
    }

    /// Resolve a site by exact base URL match
    pub fn from_url(url: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|site| site.profile().base_url == url)
            .ok_or_else(|| ScoutError::UnsupportedSite(url.to_string()))
    }

    pub fn profile(&self) -> &'static SiteProfile {
        match self {
            Site::Amazon => &amazon::PROFILE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Site::Amazon => "amazon",
        }
    }
}

#[async_trait]
impl Extractor for Site {
    async fn extract(&self, node: &dyn ProductNode) -> Result<ProductRecord> {
        match self {
            Site::Amazon => AmazonExtractor.extract(node).await,
        }
    }
}
