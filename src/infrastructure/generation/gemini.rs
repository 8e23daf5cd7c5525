//! Gemini API text generator adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ports::{GenerationError, TextGenerator};
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::recommendation::RecommendationPrompt;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Gemini API text generator
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Create a new Gemini generator with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new Gemini generator with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the generator at another models endpoint (e.g. a local mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Model name used for requests
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Build the request body
    fn build_request(prompt: &RecommendationPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.content().to_string(),
                }],
            }],
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }

    /// Map a non-success HTTP status and its body to an error
    fn status_error(status: reqwest::StatusCode, body: &str) -> GenerationError {
        use reqwest::StatusCode;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return GenerationError::InvalidApiKey;
        }

        // Gemini reports a bad key as 400 with this reason
        if status == StatusCode::BAD_REQUEST && body.contains("API_KEY_INVALID") {
            return GenerationError::InvalidApiKey;
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return GenerationError::RateLimited;
        }

        GenerationError::ApiError(format!("HTTP {}: {}", status, body))
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &RecommendationPrompt) -> Result<String, GenerationError> {
        let body = Self::build_request(prompt);
        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.api_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "gemini responded");

        // Handle HTTP errors
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "gemini request rejected");
            return Err(Self::status_error(status, &error_text));
        }

        // Parse response
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.without_url().to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(GenerationError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(GenerationError::EmptyResponse)?;

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_has_correct_structure() {
        let prompt = RecommendationPrompt::default();

        let request = GeminiGenerator::build_request(&prompt);

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(request.contents[0].parts[0].text, prompt.content());
    }

    #[test]
    fn request_serializes_to_gemini_shape() {
        let prompt = RecommendationPrompt::default();
        let json = serde_json::to_value(GeminiGenerator::build_request(&prompt)).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], prompt.content());
    }

    #[test]
    fn api_url_contains_model_and_key() {
        let generator = GeminiGenerator::new("test-api-key");
        let url = generator.api_url();

        assert!(url.starts_with(API_BASE_URL));
        assert!(url.contains("gemini-flash-latest"));
        assert!(url.contains("test-api-key"));
        assert!(url.contains(":generateContent"));
    }

    #[test]
    fn custom_model_and_base_url() {
        let generator =
            GeminiGenerator::with_model("key", "custom-model").with_base_url("http://localhost:9/");
        assert_eq!(generator.model(), "custom-model");
        assert_eq!(
            generator.api_url(),
            "http://localhost:9/custom-model:generateContent?key=key"
        );
    }

    #[test]
    fn extract_text_joins_parts() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![
                        ResponsePart {
                            text: Some("Jawan (2023)\n".to_string()),
                        },
                        ResponsePart {
                            text: Some("**Director:** Atlee".to_string()),
                        },
                    ]),
                }),
            }]),
            error: None,
        };

        let text = GeminiGenerator::extract_text(&response);
        assert_eq!(text, Some("Jawan (2023)\n**Director:** Atlee".to_string()));
    }

    #[test]
    fn extract_text_empty_response() {
        let response = GenerateContentResponse {
            candidates: None,
            error: None,
        };

        assert!(GeminiGenerator::extract_text(&response).is_none());
    }

    #[test]
    fn status_errors_are_classified() {
        use reqwest::StatusCode;

        assert!(matches!(
            GeminiGenerator::status_error(StatusCode::FORBIDDEN, ""),
            GenerationError::InvalidApiKey
        ));
        assert!(matches!(
            GeminiGenerator::status_error(
                StatusCode::BAD_REQUEST,
                r#"{"error":{"details":[{"reason":"API_KEY_INVALID"}]}}"#
            ),
            GenerationError::InvalidApiKey
        ));
        assert!(matches!(
            GeminiGenerator::status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            GenerationError::RateLimited
        ));
        match GeminiGenerator::status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom") {
            GenerationError::ApiError(msg) => assert!(msg.contains("500") && msg.contains("boom")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
