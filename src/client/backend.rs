//! HTTP client for the candidate search backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::models::{ErrorBody, SearchPage};
use super::SearchApi;
use crate::error::SearchError;

/// Client for `GET <base>/search?q=<query>&page=<page>`
pub struct BackendClient {
    http: HttpClient,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SearchApi for BackendClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("page", &page.to_string())])
            .send()
            .await
            .map_err(SearchError::from)?;

        let status = response.status();
        if !status.is_success() {
            // Error payloads carry an optional human-readable message
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("request failed with status {}", status));

            return Err(SearchError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SearchPage>()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))
    }
}
