use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("model response contained no candidate text")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    host: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(host: String, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            host,
            model,
            api_key,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.host, self.model, self.api_key
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let body = response.json::<GenerateResponse>().await?;
        body.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
            .filter(|text| !text.is_empty())
            .ok_or(GeminiError::EmptyResponse)
    }
}
