use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::domain::{NewProduct, Product, ProductId, Size, Weight};

use crate::{CatalogSource, FetchError};

pub(crate) fn product(id: i64, name: &str, count: u32) -> Product {
    Product {
        id: ProductId(id),
        image_url: format!("http://img.local/{id}.png"),
        name: name.to_string(),
        count,
        size: Size::new(10.0, 20.0),
        weight: Weight::new("200g"),
        comments: Vec::new(),
    }
}

pub(crate) fn widget_draft() -> NewProduct {
    NewProduct {
        name: "Widget".to_string(),
        image_url: "http://x/img.png".to_string(),
        count: 5,
        size: Size::new(2.0, 3.0),
        weight: Weight::new("100g"),
    }
}

/// In-memory catalog that counts how often it is asked.
pub(crate) struct StubCatalog {
    products: Vec<Product>,
    fail_with: Option<u16>,
    calls: AtomicUsize,
}

impl StubCatalog {
    pub(crate) fn ok(products: Vec<Product>) -> Self {
        Self {
            products,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            products: Vec::new(),
            fail_with: Some(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(status) => Err(FetchError::Status {
                url: "stub://catalog".to_string(),
                status,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.record_call()?;
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, FetchError> {
        self.record_call()?;
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: format!("stub://catalog/{product_id}"),
                status: 404,
            })
    }
}
