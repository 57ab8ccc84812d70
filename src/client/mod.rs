//! Candidate search backend client

use async_trait::async_trait;

pub mod backend;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use backend::BackendClient;
#[cfg(test)]
pub use mock::MockSearchClient;
pub use models::{Candidate, SearchPage};

use crate::error::SearchError;

/// Search operations against the candidate backend.
///
/// The backend is an opaque collaborator reached over HTTP; this trait is the
/// seam that lets the controller run against a mock in tests.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Fetch one page of candidates matching `query` (1-based `page`)
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError>;
}
