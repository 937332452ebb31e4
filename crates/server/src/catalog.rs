use std::{fs, io, path::Path, sync::Arc};

use anyhow::Context;
use shared::domain::{Product, ProductId};
use tracing::{info, warn};

/// Immutable product collection served to clients.
#[derive(Debug, Clone, Default)]
pub(crate) struct CatalogStore {
    products: Arc<Vec<Product>>,
}

impl CatalogStore {
    pub(crate) fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// Reads a JSON array of products. A missing file gives an empty catalog.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "catalog file not found; serving an empty catalog");
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("failed to read catalog file '{}'", path.display())
                })
            }
        };

        let products: Vec<Product> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file '{}'", path.display()))?;
        info!(path = %path.display(), count = products.len(), "catalog loaded");
        Ok(Self::from_products(products))
    }

    pub(crate) fn products(&self) -> &[Product] {
        &self.products
    }

    pub(crate) fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!("catalog_server_{name}_{suffix}.json"))
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let store = CatalogStore::load(&temp_file("missing")).expect("load");
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn loads_products_from_json_file() {
        let path = temp_file("valid");
        fs::write(
            &path,
            r#"[{"id":1,"imageUrl":"u","name":"Lamp","count":2,
                "size":{"width":1,"height":2},"weight":300,"comments":[]}]"#,
        )
        .expect("write");

        let store = CatalogStore::load(&path).expect("load");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ProductId(1)).map(|p| p.weight.as_str()), Some("300"));
        assert!(store.get(ProductId(2)).is_none());
        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_file("malformed");
        fs::write(&path, "{ not json").expect("write");

        let err = CatalogStore::load(&path).expect_err("must fail");

        assert!(err.to_string().contains("failed to parse catalog file"));
        fs::remove_file(path).expect("cleanup");
    }
}
