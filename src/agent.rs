use crate::config::Config;
use crate::gemini::{GeminiClient, GeminiError};
use crate::prompts;
use crate::search::{self, SearchClient, SearchError};

/// One finished research run. The raw data block is kept so the caller
/// can show the model's sources next to the summary.
#[derive(Debug)]
pub struct Report {
    pub summary: String,
    pub raw_data: String,
    /// Set when the search step failed. The summary was then produced
    /// from the error text instead of real results.
    pub search_error: Option<SearchError>,
}

pub struct Agent {
    pub search: SearchClient,
    pub gemini: GeminiClient,
}

impl Agent {
    pub fn new(config: &Config, tavily_key: String, gemini_key: String) -> Self {
        let search = SearchClient::new(config.search_host.clone(), tavily_key);
        let gemini = GeminiClient::new(
            config.gemini_host.clone(),
            config.gemini_model.clone(),
            gemini_key,
        );
        Self { search, gemini }
    }

    /// Search, then summarize. A failed search does not abort the run:
    /// the error text becomes the data block and is carried on the
    /// report as a typed value so callers can branch on it.
    pub async fn research(&self, query: &str) -> Result<Report, GeminiError> {
        let (raw_data, search_error) = match self.search.search(query).await {
            Ok(results) => (search::format_context(&results), None),
            Err(e) => (format!("Search Error: {}", e), Some(e)),
        };

        let prompt = prompts::report_prompt(query, &raw_data);
        let summary = self.gemini.generate(&prompt).await?;

        Ok(Report {
            summary,
            raw_data,
            search_error,
        })
    }
}
