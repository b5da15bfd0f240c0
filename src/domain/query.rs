use crate::domain::{Product, ProductRecord};

/// A search string and the lowercase tokens used for relevance matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    tokens: Vec<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text.split_whitespace().map(str::to_lowercase).collect();
        Self { text, tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Every token must appear in `name`, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.tokens.iter().all(|token| name.contains(token.as_str()))
    }

    /// Apply the relevance filter to one extracted record.
    ///
    /// Records without a price or url are dropped before the name is looked at.
    pub fn accept(&self, record: ProductRecord) -> Option<Product> {
        if !record.is_purchasable() {
            return None;
        }
        record.into_product().filter(|p| self.matches(&p.name))
    }
}
