use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::Product,
    error::{ApiError, ErrorCode},
    protocol::{HEALTH_PATH, PRODUCTS_PATH, PRODUCT_ROUTE},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod catalog;
mod config;

use api::{get_product, list_products, parse_product_id, ApiContext};
use app_state::AppState;
use catalog::CatalogStore;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let catalog = CatalogStore::load(&settings.catalog_path).map_err(|error| {
        error!(
            catalog_path = %settings.catalog_path.display(),
            %error,
            "failed to load catalog; verify the file is a JSON array of products"
        );
        error
    })?;
    let product_count = catalog.len();

    let state = AppState {
        api: ApiContext { catalog },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, product_count, "catalog server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(healthz))
        .route(PRODUCTS_PATH, get(http_list_products))
        .route(PRODUCT_ROUTE, get(http_get_product))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(list_products(&state.api))
}

async fn http_get_product(
    State(state): State<Arc<AppState>>,
    Path(raw_product_id): Path<String>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    let product_id = parse_product_id(&raw_product_id).map_err(api_error_response)?;
    get_product(&state.api, product_id)
        .map(Json)
        .map_err(api_error_response)
}

fn api_error_response(err: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
    };
    (status, Json(err))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
