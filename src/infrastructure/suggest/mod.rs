//! Suggestion client - POSTs user text to the sugerir-rae endpoint

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::application::errors::ChatError;
use crate::domain::traits::Suggester;

/// Endpoint path appended to the base URL
pub const SUGGEST_PATH: &str = "/api/sugerir-rae";

/// HTTP suggester
pub struct HttpSuggester {
    client: Client,
    endpoint: String,
}

impl HttpSuggester {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SUGGEST_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// API request structure
#[derive(Serialize)]
struct SuggestRequest<'a> {
    text: &'a str,
}

#[async_trait]
impl Suggester for HttpSuggester {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn suggest(&self, text: &str) -> Result<String, ChatError> {
        let response = self.client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&SuggestRequest { text })
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        // The reply is plain text, never JSON
        if response.status() != StatusCode::OK {
            return Err(ChatError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ChatError::Body(e.to_string()))
    }
}
