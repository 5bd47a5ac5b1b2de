//! AI designer panel state: prompt, loading flag, displayed error, last suggestion.

use crate::error::SuggestionError;
use crate::handoff::{HandoffBridge, SectionNavigator};
use crate::models::DesignSuggestion;
use crate::store::StudioStore;
use crate::suggestion::SuggestionPipeline;

#[derive(Debug, Default)]
pub struct DesignAssistant {
    pub prompt: String,
    loading: bool,
    error: Option<String>,
    suggestion: Option<DesignSuggestion>,
    /// Bumped on every successful generation.
    generation: u64,
    /// `(generation, seq)` of the last handoff.
    delivered: Option<(u64, u64)>,
}

impl DesignAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit is offered only with a non-blank prompt and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Suggestion to display; hidden while an error is shown.
    pub fn suggestion(&self) -> Option<&DesignSuggestion> {
        match self.error {
            Some(_) => None,
            None => self.suggestion.as_ref(),
        }
    }

    /// Run the pipeline for the current prompt. A blank prompt does nothing.
    pub async fn submit(&mut self, pipeline: &SuggestionPipeline) -> Result<(), SuggestionError> {
        if self.prompt.trim().is_empty() {
            return Ok(());
        }
        self.loading = true;
        self.error = None;
        let result = pipeline.request_suggestion(&self.prompt).await;
        self.loading = false;
        match result {
            Ok(s) => {
                self.suggestion = Some(s);
                self.generation += 1;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Hand the displayed suggestion to the lead form. Returns the delivery seq.
    ///
    /// Asking again for the same generation only scrolls back to the form and returns the
    /// earlier seq, so one generated suggestion rides on at most one query.
    pub fn request_quote<N: SectionNavigator>(
        &mut self,
        bridge: &HandoffBridge<N>,
        store: &mut StudioStore,
    ) -> Option<u64> {
        let suggestion = self.suggestion()?.clone();
        if let Some((generation, seq)) = self.delivered {
            if generation == self.generation {
                bridge.reveal();
                return Some(seq);
            }
        }
        let seq = bridge.deliver(store, suggestion);
        self.delivered = Some((self.generation, seq));
        Some(seq)
    }
}
