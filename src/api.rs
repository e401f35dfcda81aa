//! HTTP client for the screener backend.
use crate::config::{ApiConfig, FILTERS_PATH, TICKER_SCORES_PATH};
use crate::error::FetchError;
use crate::structs::{FilterCatalog, FilterRequest, ScoreListResponse, ScoreRow};
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

const SHORT_LIST: [(&str, &str); 1] = [("short_list", "true")];

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn fetch_filters(&self) -> Result<FilterCatalog, FetchError> {
        let url = self.config.endpoint(FILTERS_PATH);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        decode(response).await
    }

    /// Default short-listed scores shown before any search.
    pub async fn fetch_scores(&self) -> Result<Vec<ScoreRow>, FetchError> {
        let url = self.config.endpoint(TICKER_SCORES_PATH);
        log::debug!("GET {}?short_list=true", url);
        let response = Request::get(&url)
            .query(SHORT_LIST)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let body: ScoreListResponse = decode(response).await?;
        Ok(body.score_list)
    }

    pub async fn search_scores(&self, request: &FilterRequest) -> Result<Vec<ScoreRow>, FetchError> {
        let url = self.config.endpoint(TICKER_SCORES_PATH);
        log::debug!("POST {}?short_list=true with {} filters", url, request.filters.len());
        let response = Request::post(&url)
            .query(SHORT_LIST)
            .json(request)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let body: ScoreListResponse = decode(response).await?;
        Ok(body.score_list)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}
