//! AI design suggestion pipeline: prompt in, one [`DesignSuggestion`] or one classified
//! [`SuggestionError`] out.
//!
//! The credential is checked before any network call. Requests are bounded by a timeout,
//! and a second request while one is in flight is rejected with `Busy` (no queueing).

use crate::error::{SuggestionError, SuggestionResult};
use crate::models::DesignSuggestion;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const MIN_CREDENTIAL_LEN: usize = 10;

const PLACEHOLDER_CREDENTIALS: &[&str] = &[
    "undefined",
    "null",
    "your_api_key",
    "your-api-key",
    "placeholder",
];

/// Raw reply from the generative service: the textual payload, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderReply {
    pub text: Option<String>,
}

impl ProviderReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Failure reported by a provider. Structured fields are preferred for classification;
/// `message` is the fallback for providers that only return free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFailure {
    /// The service answered with an error.
    Service {
        http_status: Option<u16>,
        /// Provider status string, e.g. `PERMISSION_DENIED`.
        status: Option<String>,
        message: String,
    },
    /// Connection, body read, or similar transport failure.
    Transport(String),
}

impl ProviderFailure {
    pub fn message(message: impl Into<String>) -> Self {
        ProviderFailure::Service {
            http_status: None,
            status: None,
            message: message.into(),
        }
    }
}

/// External structured-generation service.
#[async_trait]
pub trait DesignProvider: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<ProviderReply, ProviderFailure>;
}

pub fn credential_is_plausible(credential: Option<&str>) -> bool {
    let Some(key) = credential.map(str::trim) else {
        return false;
    };
    if key.len() < MIN_CREDENTIAL_LEN {
        return false;
    }
    !PLACEHOLDER_CREDENTIALS
        .iter()
        .any(|p| key.eq_ignore_ascii_case(p))
}

/// Map a provider failure onto the error taxonomy.
pub fn classify(failure: ProviderFailure) -> SuggestionError {
    let (http_status, status, message) = match failure {
        ProviderFailure::Transport(msg) => return SuggestionError::MalformedResponse(msg),
        ProviderFailure::Service {
            http_status,
            status,
            message,
        } => (http_status, status, message),
    };
    match http_status {
        Some(403) => return SuggestionError::AccessDenied,
        Some(401) => return SuggestionError::Auth,
        Some(404) => return SuggestionError::NotFound,
        _ => {}
    }
    match status.as_deref() {
        Some("PERMISSION_DENIED") => return SuggestionError::AccessDenied,
        Some("UNAUTHENTICATED") => return SuggestionError::Auth,
        Some("NOT_FOUND") => return SuggestionError::NotFound,
        _ => {}
    }
    if message.contains("403") {
        SuggestionError::AccessDenied
    } else if message.contains("401") {
        SuggestionError::Auth
    } else if message.contains("404") {
        SuggestionError::NotFound
    } else if message.trim().is_empty() {
        SuggestionError::UnclassifiedProvider(
            "An unexpected error occurred while generating the design.".to_string(),
        )
    } else {
        SuggestionError::UnclassifiedProvider(message)
    }
}

/// Parse the textual payload against the fixed suggestion schema.
pub fn parse_suggestion(text: Option<&str>) -> SuggestionResult<DesignSuggestion> {
    let payload = text.map(str::trim).unwrap_or_default();
    if payload.is_empty() {
        return Err(SuggestionError::MalformedResponse(
            "The AI returned an empty response.".to_string(),
        ));
    }
    serde_json::from_str(payload).map_err(|e| SuggestionError::MalformedResponse(e.to_string()))
}

/// Releases the in-flight flag when the request finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct SuggestionPipeline {
    provider: Arc<dyn DesignProvider>,
    credential: Option<String>,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl SuggestionPipeline {
    pub fn new(provider: Arc<dyn DesignProvider>, credential: Option<String>) -> Self {
        Self {
            provider,
            credential,
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn request_suggestion(&self, prompt: &str) -> SuggestionResult<DesignSuggestion> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SuggestionError::EmptyPrompt);
        }
        let api_key = match self.credential.as_deref() {
            Some(key) if credential_is_plausible(Some(key)) => key.trim(),
            _ => {
                tracing::error!("design suggestion skipped: API key missing or implausible");
                return Err(SuggestionError::Configuration);
            }
        };
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("design suggestion rejected: a request is already in flight");
            return Err(SuggestionError::Busy);
        }
        let _guard = InFlight(&self.in_flight);

        tracing::info!(prompt_len = prompt.len(), "requesting design suggestion");
        let reply = match tokio::time::timeout(self.timeout, self.provider.generate(api_key, prompt)).await {
            Err(_) => {
                tracing::error!(timeout_secs = self.timeout.as_secs_f64(), "design suggestion timed out");
                return Err(SuggestionError::MalformedResponse(format!(
                    "request timed out after {:?}",
                    self.timeout
                )));
            }
            Ok(Err(failure)) => {
                tracing::error!(?failure, "design provider failed");
                return Err(classify(failure));
            }
            Ok(Ok(reply)) => reply,
        };

        let suggestion = parse_suggestion(reply.text.as_deref())?;
        tracing::info!(style = %suggestion.style, colors = suggestion.palette.len(), "design suggestion generated");
        Ok(suggestion)
    }
}
