use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{info, warn};

use crate::app::Result;
use crate::config::BackendConfig;
use crate::domain::Product;

/// JSON body posted to the backend
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub data: &'a [Product],
    pub search_text: &'a str,
    pub source: &'a str,
}

/// Posts search results to the backend service. Requests are never retried.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("shopscout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Submit one run's results; returns the response status.
    pub async fn submit(
        &self,
        route: &str,
        search_text: &str,
        source: &str,
        products: &[Product],
    ) -> Result<StatusCode> {
        let endpoint = self.endpoint(route);
        let body = serde_json::to_vec(&Submission {
            data: products,
            search_text,
            source,
        })?;

        info!("Sending {} results to {}", products.len(), endpoint);
        let response = self
            .client
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Backend responded with {}", status);
        } else {
            warn!("Backend responded with {}", status);
        }

        Ok(status)
    }
}
