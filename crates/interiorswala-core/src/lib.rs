//! Interiorswala studio core.
//!
//! Persisted studio state (portfolio, consultation queries, contact details), the admin
//! access gate, the AI design suggestion pipeline, and the handoff that carries a
//! generated design into the lead-capture form.

pub mod access_gate;
pub mod admin;
pub mod assistant;
pub mod config;
pub mod error;
pub mod gemini;
pub mod handoff;
pub mod ids;
pub mod models;
pub mod storage;
pub mod store;
pub mod suggestion;

pub use access_gate::{
    access_mode, AccessGate, AccessMode, CredentialVerifier, LoginOutcome, StaticCredentialVerifier,
    ACCESS_DENIED_NOTICE, ADMIN_FRAGMENT,
};
pub use assistant::DesignAssistant;
pub use config::StudioConfig;
pub use error::{LeadFormError, StorageError, StoreError, SuggestionError, SuggestionResult};
pub use gemini::GeminiProvider;
pub use handoff::{handoff_message, HandoffBridge, LeadCaptureForm, LogNavigator, SectionNavigator, LEAD_CAPTURE_SECTION};
pub use models::{
    ColorInfo, ConsultationQuery, DesignSuggestion, Project, ProjectDraft, QueryStatus, StudioDetails,
    DEFAULT_PROJECT_TYPE, PROJECT_TYPES,
};
pub use storage::{DurableStorage, MemoryStorage, SledStorage};
pub use store::{PendingSuggestion, StudioStore, PROJECTS_KEY, QUERIES_KEY, STUDIO_KEY};
pub use suggestion::{DesignProvider, ProviderFailure, ProviderReply, SuggestionPipeline};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
