use futures::{StreamExt, TryStreamExt};
use tracing::{debug, warn};

use crate::app::Result;
use crate::domain::{Product, SearchQuery};
use crate::scraper::{Extractor, FailurePolicy, ProductNode, ScraperConfig};

/// Knobs for a single [`collect`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Maximum extractions in flight; 0 means one per element
    pub max_concurrency: usize,
    pub failure_policy: FailurePolicy,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            max_concurrency: 0,
            failure_policy: FailurePolicy::AllOrNothing,
        }
    }
}

impl From<&ScraperConfig> for CollectOptions {
    fn from(config: &ScraperConfig) -> Self {
        Self {
            max_concurrency: config.max_concurrency,
            failure_policy: config.failure_policy,
        }
    }
}

impl CollectOptions {
    fn limit(&self, elements: usize) -> usize {
        match self.max_concurrency {
            0 => elements.max(1),
            n => n,
        }
    }
}

/// Extract every node concurrently and keep the records relevant to `query`.
///
/// Extractions run interleaved on the calling task; output order follows
/// completion order.
pub async fn collect<N, E>(
    nodes: &[N],
    query: &SearchQuery,
    extractor: &E,
    options: &CollectOptions,
) -> Result<Vec<Product>>
where
    N: ProductNode,
    E: Extractor + ?Sized,
{
    if nodes.is_empty() {
        debug!("No product elements to collect");
        return Ok(Vec::new());
    }

    let limit = options.limit(nodes.len());
    debug!(
        "Extracting {} elements ({} concurrent, {:?})",
        nodes.len(),
        limit,
        options.failure_policy
    );

    let extractions = futures::stream::iter(nodes.iter().enumerate())
        .map(|(index, node)| async move {
            extractor
                .extract(node)
                .await
                .map_err(|e| (index, e))
        })
        .buffer_unordered(limit);

    let records = match options.failure_policy {
        FailurePolicy::AllOrNothing => extractions
            .map_err(|(index, e)| {
                warn!("Extraction of element {} failed, aborting batch: {}", index, e);
                e
            })
            .try_collect::<Vec<_>>()
            .await?,
        FailurePolicy::Isolate => {
            extractions
                .filter_map(|outcome| async move {
                    match outcome {
                        Ok(record) => Some(record),
                        Err((index, e)) => {
                            warn!("Skipping element {}: {}", index, e);
                            None
                        }
                    }
                })
                .collect::<Vec<_>>()
                .await
        }
    };

    let extracted = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .filter_map(|record| query.accept(record))
        .collect();

    debug!(
        "Kept {} of {} extracted records for '{}'",
        products.len(),
        extracted,
        query.text()
    );

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::app::ScoutError;
    use crate::domain::ProductRecord;

    /// In-memory element: selector → text, with an optional injected fault
    #[derive(Default)]
    struct FakeNode {
        fields: HashMap<&'static str, &'static str>,
        fault: bool,
        delay_ms: u64,
    }

    impl FakeNode {
        fn new(name: Option<&'static str>, price: Option<&'static str>, url: Option<&'static str>) -> Self {
            let mut fields = HashMap::new();
            if let Some(n) = name {
                fields.insert("name", n);
            }
            if let Some(p) = price {
                fields.insert("price", p);
            }
            if let Some(u) = url {
                fields.insert("url", u);
            }
            Self {
                fields,
                ..Default::default()
            }
        }

        fn faulty() -> Self {
            Self {
                fault: true,
                ..Default::default()
            }
        }

        fn delayed(mut self, delay_ms: u64) -> Self {
            self.delay_ms = delay_ms;
            self
        }
    }

    #[async_trait]
    impl ProductNode for FakeNode {
        async fn text(&self, selector: &str) -> Result<Option<String>> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            if self.fault {
                return Err(ScoutError::Browser("node detached".into()));
            }
            Ok(self.fields.get(selector).map(|s| s.to_string()))
        }

        async fn attribute(&self, selector: &str, _name: &str) -> Result<Option<String>> {
            self.text(selector).await
        }
    }

    struct FieldExtractor;

    #[async_trait]
    impl Extractor for FieldExtractor {
        async fn extract(&self, node: &dyn ProductNode) -> Result<ProductRecord> {
            Ok(ProductRecord {
                name: node.text("name").await?,
                price: node.text("price").await?,
                url: node.attribute("url", "href").await?,
            })
        }
    }

    /// Tracks how many extractions overlap
    struct CountingExtractor {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl Extractor for CountingExtractor {
        async fn extract(&self, node: &dyn ProductNode) -> Result<ProductRecord> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            let record = FieldExtractor.extract(node).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            record
        }
    }

    fn ryzen_nodes() -> Vec<FakeNode> {
        vec![
            FakeNode::new(Some("AMD Ryzen 9 7950X"), Some("$699"), Some("/p/1")),
            FakeNode::new(Some("AMD Ryzen 7"), Some("$399"), Some("/p/2")),
            FakeNode::new(Some("Ryzen 9 cooler"), Some(""), Some("/p/3")),
        ]
    }

    #[tokio::test]
    async fn test_collect_ryzen_scenario() {
        let query = SearchQuery::new("ryzen 9");
        let products = collect(&ryzen_nodes(), &query, &FieldExtractor, &CollectOptions::default())
            .await
            .unwrap();

        assert_eq!(
            products,
            vec![Product {
                name: "AMD Ryzen 9 7950X".into(),
                price: "$699".into(),
                url: "/p/1".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_collect_empty_input() {
        let nodes: Vec<FakeNode> = Vec::new();
        let query = SearchQuery::new("ryzen");
        let products = collect(&nodes, &query, &FieldExtractor, &CollectOptions::default())
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_collect_empty_query_keeps_complete_records() {
        let nodes = vec![
            FakeNode::new(Some("Keyboard"), Some("$50"), Some("/p/1")),
            FakeNode::new(Some("Mouse"), Some("$20"), Some("/p/2")),
            FakeNode::new(None, Some("$10"), Some("/p/3")),
            FakeNode::new(Some("Cable"), None, Some("/p/4")),
        ];
        let query = SearchQuery::new("");
        let mut products = collect(&nodes, &query, &FieldExtractor, &CollectOptions::default())
            .await
            .unwrap();
        products.sort_by(|a, b| a.url.cmp(&b.url));

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Keyboard", "Mouse"]);
    }

    #[tokio::test]
    async fn test_collect_results_satisfy_invariants() {
        let nodes = vec![
            FakeNode::new(Some("Samsung 990 PRO SSD 2TB"), Some("$249"), Some("/p/1")),
            FakeNode::new(Some("Samsung SSD enclosure"), Some("$30"), None),
            FakeNode::new(Some("WD SSD 2TB"), Some("$199"), Some("/p/3")),
            FakeNode::new(Some("samsung ssd 2tb"), Some("$1"), Some("/p/4")),
        ];
        let query = SearchQuery::new("Samsung SSD 2tb");
        let products = collect(&nodes, &query, &FieldExtractor, &CollectOptions::default())
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        for product in &products {
            assert!(!product.price.is_empty());
            assert!(!product.url.is_empty());
            let name = product.name.to_lowercase();
            assert!(query.tokens().iter().all(|t| name.contains(t.as_str())));
        }
    }

    #[tokio::test]
    async fn test_collect_all_or_nothing_fails_batch() {
        let nodes = vec![
            FakeNode::new(Some("Ryzen 9"), Some("$1"), Some("/p/1")),
            FakeNode::faulty(),
            FakeNode::new(Some("Ryzen 9 Pro"), Some("$2"), Some("/p/2")),
        ];
        let query = SearchQuery::new("ryzen");
        let result = collect(&nodes, &query, &FieldExtractor, &CollectOptions::default()).await;

        assert!(matches!(result, Err(ScoutError::Browser(_))));
    }

    #[tokio::test]
    async fn test_collect_isolate_skips_faulty_element() {
        let nodes = vec![
            FakeNode::new(Some("Ryzen 9"), Some("$1"), Some("/p/1")),
            FakeNode::faulty(),
            FakeNode::new(Some("Ryzen 9 Pro"), Some("$2"), Some("/p/2")),
        ];
        let query = SearchQuery::new("ryzen");
        let options = CollectOptions {
            failure_policy: FailurePolicy::Isolate,
            ..Default::default()
        };
        let products = collect(&nodes, &query, &FieldExtractor, &options).await.unwrap();

        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_collect_unbounded_runs_all_concurrently() {
        let nodes: Vec<_> = (0..6)
            .map(|_| FakeNode::new(Some("Item"), Some("$1"), Some("/p")).delayed(20))
            .collect();
        let extractor = CountingExtractor {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        };
        let products = collect(&nodes, &SearchQuery::new("item"), &extractor, &CollectOptions::default())
            .await
            .unwrap();

        assert_eq!(products.len(), 6);
        assert_eq!(extractor.peak.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_collect_respects_concurrency_limit() {
        let nodes: Vec<_> = (0..6)
            .map(|_| FakeNode::new(Some("Item"), Some("$1"), Some("/p")).delayed(20))
            .collect();
        let extractor = CountingExtractor {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        };
        let options = CollectOptions {
            max_concurrency: 2,
            ..Default::default()
        };
        let products = collect(&nodes, &SearchQuery::new("item"), &extractor, &options)
            .await
            .unwrap();

        assert_eq!(products.len(), 6);
        assert!(extractor.peak.load(Ordering::SeqCst) <= 2);
    }

    #[test]
    fn test_options_from_config() {
        let config = ScraperConfig {
            max_concurrency: 3,
            failure_policy: FailurePolicy::Isolate,
            ..Default::default()
        };
        let options = CollectOptions::from(&config);
        assert_eq!(options.max_concurrency, 3);
        assert_eq!(options.failure_policy, FailurePolicy::Isolate);
    }
}
