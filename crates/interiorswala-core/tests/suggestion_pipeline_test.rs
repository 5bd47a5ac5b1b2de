//! Integration test: design suggestion pipeline against scripted providers.

use async_trait::async_trait;
use interiorswala_core::{
    ColorInfo, DesignAssistant, DesignProvider, DesignSuggestion, ProviderFailure, ProviderReply,
    SuggestionError, SuggestionPipeline,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const KEY: &str = "AIzaSyTestKey-0123456789";

const COASTAL: &str = r##"{"style":"Coastal Minimalism","description":"Sun-washed calm.","palette":[{"name":"Driftwood Grey","hex":"#A9A9A9"}],"keyElements":["Linen drapery"],"furnitureIdeas":["Rattan lounge chair"]}"##;

/// Replies with a fixed outcome after an optional delay, counting calls.
struct ScriptedProvider {
    outcome: Result<ProviderReply, ProviderFailure>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(outcome: Result<ProviderReply, ProviderFailure>) -> Arc<Self> {
        Self::delayed(outcome, Duration::ZERO)
    }

    fn delayed(outcome: Result<ProviderReply, ProviderFailure>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DesignProvider for ScriptedProvider {
    async fn generate(&self, api_key: &str, _prompt: &str) -> Result<ProviderReply, ProviderFailure> {
        assert_eq!(api_key, KEY);
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

fn pipeline(provider: Arc<ScriptedProvider>, key: Option<&str>) -> SuggestionPipeline {
    SuggestionPipeline::new(provider, key.map(str::to_string))
}

#[tokio::test]
async fn missing_credential_never_reaches_the_network() {
    let provider = ScriptedProvider::new(Ok(ProviderReply::text(COASTAL)));
    for key in [None, Some(""), Some("undefined"), Some("abc")] {
        let p = pipeline(provider.clone(), key);
        assert_eq!(
            p.request_suggestion("modern loft").await,
            Err(SuggestionError::Configuration)
        );
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn empty_payload_is_malformed() {
    for reply in [ProviderReply::default(), ProviderReply::text("   ")] {
        let provider = ScriptedProvider::new(Ok(reply));
        let result = pipeline(provider.clone(), Some(KEY)).request_suggestion("modern loft").await;
        assert!(matches!(result, Err(SuggestionError::MalformedResponse(_))));
        assert_eq!(provider.calls(), 1);
    }
}

#[tokio::test]
async fn schema_mismatch_is_malformed() {
    let provider = ScriptedProvider::new(Ok(ProviderReply::text(r#"{"style":"Loft","palette":"red"}"#)));
    let result = pipeline(provider, Some(KEY)).request_suggestion("modern loft").await;
    assert!(matches!(result, Err(SuggestionError::MalformedResponse(_))));
}

#[tokio::test]
async fn well_formed_payload_parses_exactly() {
    let provider = ScriptedProvider::new(Ok(ProviderReply::text(COASTAL)));
    let suggestion = pipeline(provider, Some(KEY))
        .request_suggestion("  beach house  ")
        .await
        .unwrap();
    assert_eq!(
        suggestion,
        DesignSuggestion {
            style: "Coastal Minimalism".to_string(),
            description: "Sun-washed calm.".to_string(),
            palette: vec![ColorInfo {
                name: "Driftwood Grey".to_string(),
                hex: "#A9A9A9".to_string(),
            }],
            key_elements: vec!["Linen drapery".to_string()],
            furniture_ideas: vec!["Rattan lounge chair".to_string()],
        }
    );
}

#[tokio::test]
async fn blank_prompt_is_rejected_before_anything_else() {
    let provider = ScriptedProvider::new(Ok(ProviderReply::text(COASTAL)));
    let result = pipeline(provider.clone(), None).request_suggestion(" \n ").await;
    assert_eq!(result, Err(SuggestionError::EmptyPrompt));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn provider_failures_are_classified() {
    let cases = [
        (
            ProviderFailure::Service {
                http_status: Some(403),
                status: Some("PERMISSION_DENIED".to_string()),
                message: "User location is not supported".to_string(),
            },
            SuggestionError::AccessDenied,
        ),
        (
            ProviderFailure::Service {
                http_status: Some(400),
                status: Some("UNAUTHENTICATED".to_string()),
                message: "API key not valid".to_string(),
            },
            SuggestionError::Auth,
        ),
        (ProviderFailure::message("models/x is not found (404)"), SuggestionError::NotFound),
        (
            ProviderFailure::message("Resource has been exhausted"),
            SuggestionError::UnclassifiedProvider("Resource has been exhausted".to_string()),
        ),
    ];
    for (failure, expected) in cases {
        let provider = ScriptedProvider::new(Err(failure));
        let result = pipeline(provider, Some(KEY)).request_suggestion("modern loft").await;
        assert_eq!(result, Err(expected));
    }
}

#[tokio::test]
async fn concurrent_request_is_rejected_while_busy() {
    let provider = ScriptedProvider::delayed(Ok(ProviderReply::text(COASTAL)), Duration::from_millis(200));
    let p = Arc::new(pipeline(provider.clone(), Some(KEY)));

    let first = {
        let p = p.clone();
        tokio::spawn(async move { p.request_suggestion("modern loft").await })
    };
    while !p.is_busy() {
        tokio::task::yield_now().await;
    }
    assert_eq!(p.request_suggestion("art deco").await, Err(SuggestionError::Busy));

    assert!(first.await.unwrap().is_ok());
    assert!(!p.is_busy());
    assert!(p.request_suggestion("art deco").await.is_ok());
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn timeout_maps_to_malformed_and_releases_the_slot() {
    let provider = ScriptedProvider::delayed(Ok(ProviderReply::text(COASTAL)), Duration::from_secs(5));
    let p = pipeline(provider, Some(KEY)).with_timeout(Duration::from_millis(50));
    let result = p.request_suggestion("modern loft").await;
    assert!(matches!(result, Err(SuggestionError::MalformedResponse(_))));
    assert!(!p.is_busy());
}

#[tokio::test]
async fn assistant_shows_error_then_recovers() {
    let failing = pipeline(ScriptedProvider::new(Ok(ProviderReply::default())), Some(KEY));
    let working = pipeline(ScriptedProvider::new(Ok(ProviderReply::text(COASTAL))), Some(KEY));

    let mut assistant = DesignAssistant::new();
    assert!(!assistant.can_submit());
    assistant.prompt = "sunlit beach house".to_string();
    assert!(assistant.can_submit());

    assert!(assistant.submit(&working).await.is_ok());
    assert_eq!(assistant.suggestion().map(|s| s.style.as_str()), Some("Coastal Minimalism"));

    assert!(assistant.submit(&failing).await.is_err());
    assert!(assistant.error().is_some());
    assert!(assistant.suggestion().is_none());
    assert!(!assistant.is_loading());

    assert!(assistant.submit(&working).await.is_ok());
    assert!(assistant.error().is_none());
    assert!(assistant.suggestion().is_some());
}
