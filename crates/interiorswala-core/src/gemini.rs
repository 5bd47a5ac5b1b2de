//! Gemini `generateContent` provider for design suggestions.
//! Asks for `application/json` output constrained by a response schema; reqwest only.

use crate::config::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::suggestion::{DesignProvider, ProviderFailure, ProviderReply};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Instruction wrapped around the visitor's prompt.
pub fn design_prompt(prompt: &str) -> String {
    format!(
        "As an expert interior designer for the luxury brand 'Interiorswala', provide a design concept for: \"{}\". \
Important: For the 'palette', provide evocative descriptive names (e.g., 'Aged Walnut', 'Dusty Rose', 'Brushed Brass') along with hex codes. \
Return a detailed JSON object.",
        prompt
    )
}

/// Response schema: every field of a design suggestion is required.
pub fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "style": { "type": "STRING" },
            "palette": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "Descriptive name of the color" },
                        "hex": { "type": "STRING", "description": "Hexadecimal color code" }
                    },
                    "required": ["name", "hex"]
                }
            },
            "description": { "type": "STRING" },
            "keyElements": { "type": "ARRAY", "items": { "type": "STRING" } },
            "furnitureIdeas": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["style", "palette", "description", "keyElements", "furnitureIdeas"]
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Concatenated text of the first candidate, if any.
pub(crate) fn extract_text(body: &str) -> Result<Option<String>, serde_json::Error> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    let text = parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .map(|parts| parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .filter(|t| !t.trim().is_empty());
    Ok(text)
}

/// Build a failure from a non-success status and body; unstructured bodies pass through as text.
pub(crate) fn service_failure(http_status: u16, body: &str) -> ProviderFailure {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => ProviderFailure::Service {
            http_status: Some(http_status),
            status: env.error.status,
            message: env.error.message,
        },
        Err(_) => ProviderFailure::Service {
            http_status: Some(http_status),
            status: None,
            message: format!("{} {}", http_status, body.trim()),
        },
    }
}

pub struct GeminiProvider {
    api_base: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_API_BASE, DEFAULT_MODEL)
    }

    /// No client-level timeout: the pipeline bounds each request with its configured timeout.
    pub fn with_endpoint(api_base: &str, model: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DesignProvider for GeminiProvider {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<ProviderReply, ProviderFailure> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: design_prompt(prompt),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: suggestion_schema(),
            },
        };

        let res = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderFailure::Transport(format!("design service request failed: {}", e)))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| ProviderFailure::Transport(format!("design service body read failed: {}", e)))?;

        if !status.is_success() {
            return Err(service_failure(status.as_u16(), &text));
        }

        let payload = extract_text(&text)
            .map_err(|e| ProviderFailure::Transport(format!("design service response parse: {}", e)))?;
        Ok(ProviderReply { text: payload })
    }
}
