use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::app::Result;
use crate::domain::Product;

#[derive(Serialize)]
struct ResultsDocument<'a> {
    results: &'a [Product],
}

/// Write `products` to `path` as `{"results": [...]}`, replacing any existing file.
pub fn save_results(path: &Path, products: &[Product]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&ResultsDocument { results: products })?;
    fs::write(path, json)?;

    info!("Results saved to {} ({} products)", path.display(), products.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn product(name: &str) -> Product {
        Product {
            name: name.into(),
            price: "$1".into(),
            url: "/p/1".into(),
        }
    }

    #[test]
    fn test_empty_results_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");

        save_results(&path, &[]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"results": []}));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("nested").join("results.json");

        save_results(&path, &[product("Ryzen 9")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"results": [{"name": "Ryzen 9", "price": "$1", "url": "/p/1"}]})
        );
    }

    #[test]
    fn test_overwrites_previous_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");

        save_results(&path, &[product("first"), product("second")]).unwrap();
        save_results(&path, &[product("third")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["name"], "third");
    }
}
