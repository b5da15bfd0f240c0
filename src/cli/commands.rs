use tracing::{error, info};

use crate::app::{AppContext, Result};
use crate::config::{Config, ConfigError};
use crate::domain::{Product, SearchQuery};
use crate::scraper::{collect, navigator, ChromeSession, CollectOptions};
use crate::sink::save_results;
use crate::site::Site;

/// Resolve `site_url`, then load configuration with `load_config`.
///
/// The site is checked first so an unknown URL fails without touching the
/// filesystem.
pub fn prepare<F>(site_url: &str, load_config: F) -> Result<(Site, Config)>
where
    F: FnOnce() -> std::result::Result<Config, ConfigError>,
{
    let site = Site::from_url(site_url)?;
    let config = load_config()?;
    Ok((site, config))
}

/// Search `site` for `search_text`, save the matches, and optionally post them.
pub async fn search(
    ctx: &AppContext,
    site: Site,
    search_text: &str,
    route: &str,
) -> Result<Vec<Product>> {
    let query = SearchQuery::new(search_text);

    let session = ChromeSession::launch(ctx.config.scraper.clone()).await?;
    let outcome = browse(&session, site, &query).await;
    session.close().await;
    let products = outcome?;

    info!("Found {} matching products", products.len());
    save_results(&ctx.config.output.path, &products)?;

    if ctx.config.backend.submit_to_backend {
        if let Err(e) = ctx
            .backend
            .submit(route, query.text(), site.profile().base_url, &products)
            .await
        {
            error!("Failed to submit results to backend: {}", e);
        }
    }

    Ok(products)
}

async fn browse(session: &ChromeSession, site: Site, query: &SearchQuery) -> Result<Vec<Product>> {
    let profile = site.profile();
    let config = session.config();

    let page = session.open(profile.base_url).await?;
    navigator::submit_search(
        &page,
        profile,
        query.text(),
        config.selector_timeout(),
        config.wait_after_search(),
    )
    .await?;

    let nodes = navigator::product_nodes(&page, profile).await?;
    collect(&nodes, query, &site, &CollectOptions::from(config)).await
}

pub fn list_sites() -> Result<()> {
    for site in Site::all() {
        let profile = site.profile();
        println!(
            "{} ({})\n  search field:  {}\n  search button: {}\n  products:      {}",
            profile.base_url,
            site.name(),
            profile.search_field_selector,
            profile.search_button_selector,
            profile.product_container_selector
        );
    }
    Ok(())
}
