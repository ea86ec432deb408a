use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Advanced depth gives deeper results for business topics.
pub const SEARCH_DEPTH: &str = "advanced";
pub const MAX_RESULTS: usize = 5;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    api_key: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    host: String,
    api_key: String,
}

impl SearchClient {
    pub fn new(host: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            host,
            api_key,
        }
    }

    pub async fn search(&self, topic: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search", self.host);
        let request = SearchRequest {
            query: topic,
            api_key: &self.api_key,
            search_depth: SEARCH_DEPTH,
            max_results: MAX_RESULTS,
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api { status, body });
        }

        let body = response.json::<SearchResponse>().await?;
        let mut results = body.results;
        results.truncate(MAX_RESULTS);
        Ok(results)
    }
}

/// Format results for the model to read, preserving provider order.
pub fn format_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "Source: {}\nURL: {}\nContent: {}",
                result.title, result.url, result.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
