use serde::{Deserialize, Serialize};

/// Raw output of a site extractor for one result element.
///
/// Any field may be missing when the element lacks the expected markup.
/// Blank text counts as missing, but kept fields retain the text as scraped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub price: Option<String>,
    pub url: Option<String>,
}

/// A listing that passed the completeness check; every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub url: String,
}

impl ProductRecord {
    #[cfg(test)]
    pub(crate) fn new(
        name: Option<impl Into<String>>,
        price: Option<impl Into<String>>,
        url: Option<impl Into<String>>,
    ) -> Self {
        Self {
            name: name.map(Into::into),
            price: price.map(Into::into),
            url: url.map(Into::into),
        }
    }

    /// Returns true when both price and url carry text
    pub fn is_purchasable(&self) -> bool {
        is_present(&self.price) && is_present(&self.url)
    }

    /// Convert into a [`Product`] if name, price and url are all present.
    pub fn into_product(self) -> Option<Product> {
        Some(Product {
            price: present(self.price)?,
            url: present(self.url)?,
            name: present(self.name)?,
        })
    }
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}
