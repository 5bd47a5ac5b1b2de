//! Handoff from the AI designer to the lead-capture form.
//!
//! The bridge drops a delivered suggestion into the store's pending slot and brings the
//! contact section into view. The form reads that slot: it pre-fills its message with a
//! template naming the style and attaches a copy of the suggestion to the next
//! submission. Each delivery is attached at most once.

use crate::error::LeadFormError;
use crate::ids;
use crate::models::{ConsultationQuery, DesignSuggestion, QueryStatus, DEFAULT_PROJECT_TYPE, PROJECT_TYPES};
use crate::store::StudioStore;

/// Section id of the lead-capture form.
pub const LEAD_CAPTURE_SECTION: &str = "contact";

/// Pre-filled lead message for a suggestion style.
pub fn handoff_message(style: &str) -> String {
    format!("I would like to discuss the AI-generated {} concept.", style)
}

/// Navigation side effect: bring a page section into view.
pub trait SectionNavigator {
    fn scroll_into_view(&self, section_id: &str);
}

/// Navigator for headless sessions; only logs.
pub struct LogNavigator;

impl SectionNavigator for LogNavigator {
    fn scroll_into_view(&self, section_id: &str) {
        tracing::debug!(section_id, "scroll into view");
    }
}

pub struct HandoffBridge<N: SectionNavigator = LogNavigator> {
    navigator: N,
}

impl<N: SectionNavigator> HandoffBridge<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Store the suggestion as pending and scroll to the lead form. Returns the delivery seq.
    pub fn deliver(&self, store: &mut StudioStore, suggestion: DesignSuggestion) -> u64 {
        let style = suggestion.style.clone();
        let seq = store.set_pending_suggestion(suggestion);
        self.reveal();
        tracing::info!(seq, style = %style, "design suggestion handed to lead capture");
        seq
    }

    /// Scroll to the lead form without a new delivery.
    pub fn reveal(&self) {
        self.navigator.scroll_into_view(LEAD_CAPTURE_SECTION);
    }
}

impl Default for HandoffBridge<LogNavigator> {
    fn default() -> Self {
        Self::new(LogNavigator)
    }
}

/// Public contact form state.
#[derive(Debug, Clone)]
pub struct LeadCaptureForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
    attached: Option<DesignSuggestion>,
    /// Highest delivery seq this form has picked up.
    seen_seq: u64,
}

impl Default for LeadCaptureForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            message: String::new(),
            attached: None,
            seen_seq: 0,
        }
    }
}

impl LeadCaptureForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestion that the next submission will carry.
    pub fn attached_design(&self) -> Option<&DesignSuggestion> {
        self.attached.as_ref()
    }

    /// Pick up a newer pending suggestion from the store, if there is one.
    /// Returns true when a new delivery was attached.
    pub fn observe(&mut self, store: &StudioStore) -> bool {
        let Some(pending) = store.pending_suggestion() else {
            return false;
        };
        if pending.seq <= self.seen_seq {
            return false;
        }
        self.seen_seq = pending.seq;
        if self.message_is_replaceable() {
            self.message = handoff_message(&pending.suggestion.style);
        }
        self.attached = Some(pending.suggestion.clone());
        true
    }

    /// Typed text is kept; an empty message or an earlier template is replaced.
    fn message_is_replaceable(&self) -> bool {
        let m = self.message.trim();
        m.is_empty() || self.attached.as_ref().is_some_and(|d| m == handoff_message(&d.style))
    }

    fn validate(&self) -> Result<(), LeadFormError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(LeadFormError::MissingField(*field));
        }
        if !PROJECT_TYPES.contains(&self.project_type.as_str()) {
            return Err(LeadFormError::UnknownProjectType(self.project_type.clone()));
        }
        Ok(())
    }

    /// Create the consultation query, record it in the store, and reset the form.
    /// The attached suggestion is consumed; it will not ride along on a later submission.
    pub fn submit(&mut self, store: &mut StudioStore) -> Result<ConsultationQuery, LeadFormError> {
        self.validate()?;
        let at = ids::now_ms();
        let id = ids::unique_id(ids::query_id(at), |c| store.query(c).is_some());
        let query = ConsultationQuery {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            project_type: self.project_type.clone(),
            message: self.message.clone(),
            timestamp: at,
            ai_design: self.attached.take(),
            status: Some(QueryStatus::New),
        };
        store.record_query(query.clone());
        let seen_seq = self.seen_seq;
        *self = Self {
            seen_seq,
            ..Self::default()
        };
        Ok(query)
    }
}
