use std::result::Result as StdResult;

use clients_domain::ClientId;
use thiserror::Error;

use crate::cache::QueryKey;

/// Failures reported by a [`crate::api::ClientApi`] implementation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote side refused the operation. Displays the raw server text.
    #[error("{0}")]
    Rejected(String),
    #[error("Client not found: {0}")]
    NotFound(ClientId),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = StdResult<T, ApiError>;

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Failures of the local query cache.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("No cached result for query `{0}`")]
    Miss(QueryKey),
    #[error("Cache lock poisoned")]
    Poisoned,
}

/// Failures while producing the client listing.
#[derive(Debug, Error)]
pub enum ListError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}
