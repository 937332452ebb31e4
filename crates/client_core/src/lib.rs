use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Product, ProductId},
    protocol::{product_path, PRODUCTS_PATH},
};
use tracing::debug;
use url::Url;

pub mod catalog_view;
pub mod detail_view;
pub mod error;
pub mod ids;
pub mod load_state;
pub mod route;
pub mod sort;

pub use catalog_view::CatalogView;
pub use detail_view::DetailView;
pub use error::FetchError;
pub use ids::IdGenerator;
pub use load_state::{LoadState, LoadTicket};
pub use route::{Route, RouteError};
pub use sort::{sort_products, SortKey};

pub const DEFAULT_CATALOG_URL: &str = "http://localhost:3033";

/// Read-only access to the product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, FetchError>;
}

/// HTTP catalog client. Only issues `GET` requests.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: &str) -> Result<Self, FetchError> {
        let mut base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        // Keep any path prefix when joining endpoint paths onto the base.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        debug!(%url, "fetching catalog resource");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(FetchError::Malformed)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json(PRODUCTS_PATH).await
    }

    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, FetchError> {
        self.get_json(&product_path(product_id)).await
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
