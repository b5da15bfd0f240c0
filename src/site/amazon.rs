use async_trait::async_trait;
use url::Url;

use crate::app::Result;
use crate::domain::ProductRecord;
use crate::scraper::{Extractor, ProductNode};
use crate::site::SiteProfile;

pub const BASE_URL: &str = "https://amazon.com.au";

pub const PROFILE: SiteProfile = SiteProfile {
    base_url: BASE_URL,
    search_field_selector: r#"input[name="field-keywords"]"#,
    search_button_selector: r#"input[value="Go"]"#,
    product_container_selector: "div.s-card-container",
};

const NAME_SELECTOR: &str = "h2 span";
const PRICE_SELECTOR: &str = "span.a-price > span.a-offscreen";
const LINK_SELECTORS: [&str; 2] = ["h2 a", "a.a-link-normal"];

/// Extracts name, price and link from an Amazon search result card
pub struct AmazonExtractor;

impl AmazonExtractor {
    /// Resolve a result link against the site root; absolute links pass through.
    pub fn absolute_url(href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        let base = Url::parse(BASE_URL).ok()?;
        base.join(href).ok().map(String::from)
    }
}

#[async_trait]
impl Extractor for AmazonExtractor {
    async fn extract(&self, node: &dyn ProductNode) -> Result<ProductRecord> {
        let name = node.text(NAME_SELECTOR).await?;
        let price = node.text(PRICE_SELECTOR).await?;

        let mut url = None;
        for selector in LINK_SELECTORS {
            if let Some(href) = node.attribute(selector, "href").await? {
                url = Self::absolute_url(&href);
                if url.is_some() {
                    break;
                }
            }
        }

        Ok(ProductRecord { name, price, url })
    }
}
