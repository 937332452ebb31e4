//! Read-only HTTP surface of the catalog service.

use crate::domain::ProductId;

pub const HEALTH_PATH: &str = "/healthz";
pub const PRODUCTS_PATH: &str = "/products";

/// Route template for a single product, in axum path syntax.
pub const PRODUCT_ROUTE: &str = "/products/:product_id";

pub fn product_path(product_id: ProductId) -> String {
    format!("{PRODUCTS_PATH}/{}", product_id.0)
}
