use shared::{
    domain::{Product, ProductId},
    error::{ApiError, ErrorCode},
};

use crate::catalog::CatalogStore;

#[derive(Clone)]
pub struct ApiContext {
    pub(crate) catalog: CatalogStore,
}

pub fn list_products(ctx: &ApiContext) -> Vec<Product> {
    ctx.catalog.products().to_vec()
}

pub fn get_product(ctx: &ApiContext, product_id: ProductId) -> Result<Product, ApiError> {
    ctx.catalog.get(product_id).cloned().ok_or_else(|| {
        ApiError::new(
            ErrorCode::NotFound,
            format!("product {} not found", product_id.0),
        )
    })
}

pub fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.trim().parse::<i64>().map(ProductId).map_err(|_| {
        ApiError::new(
            ErrorCode::Validation,
            format!("'{raw}' is not a valid product id"),
        )
    })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
