use thiserror::Error;

/// Every way a catalog read can fail. Views collapse all of them into a
/// single failed load.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog returned status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("malformed catalog response: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
