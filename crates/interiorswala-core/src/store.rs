//! Studio store: owns the three persisted collections (projects, queries, studio details)
//! and the in-memory pending-suggestion slot shared by the AI designer and the lead form.
//!
//! Each collection lives in its own record. Loading falls back to that record's default
//! on absence or corruption without touching the others; every command rewrites the
//! affected record in full before returning.

use crate::error::StoreError;
use crate::models::{seed_projects, ConsultationQuery, DesignSuggestion, Project, StudioDetails};
use crate::storage::DurableStorage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub const PROJECTS_KEY: &str = "interiorswala_projects";
pub const QUERIES_KEY: &str = "interiorswala_queries";
pub const STUDIO_KEY: &str = "interiorswala_studio";

/// A delivered suggestion awaiting pickup by the lead-capture form.
/// `seq` increases with every delivery so a form can tell a regeneration from a repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSuggestion {
    pub seq: u64,
    pub suggestion: DesignSuggestion,
}

pub struct StudioStore {
    storage: Arc<dyn DurableStorage>,
    pub(crate) projects: Vec<Project>,
    pub(crate) queries: Vec<ConsultationQuery>,
    pub(crate) studio: StudioDetails,
    pending: Option<PendingSuggestion>,
    handoff_seq: u64,
}

impl StudioStore {
    /// Load all three collections, falling back per record to its default.
    pub fn open(storage: Arc<dyn DurableStorage>) -> Self {
        let projects = load_or_default(storage.as_ref(), PROJECTS_KEY, seed_projects);
        let queries = load_or_default(storage.as_ref(), QUERIES_KEY, Vec::new);
        let studio = load_or_default(storage.as_ref(), STUDIO_KEY, StudioDetails::default);
        tracing::info!(
            projects = projects.len(),
            queries = queries.len(),
            "studio store loaded"
        );
        let store = Self {
            storage,
            projects,
            queries,
            studio,
            pending: None,
            handoff_seq: 0,
        };
        // Initial write-through.
        store.persist_projects();
        store.persist_queries();
        store.persist_studio();
        store
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Newest first.
    pub fn queries(&self) -> &[ConsultationQuery] {
        &self.queries
    }

    pub fn query(&self, id: &str) -> Option<&ConsultationQuery> {
        self.queries.iter().find(|q| q.id == id)
    }

    pub fn studio_details(&self) -> &StudioDetails {
        &self.studio
    }

    pub fn pending_suggestion(&self) -> Option<&PendingSuggestion> {
        self.pending.as_ref()
    }

    /// Place a suggestion in the handoff slot; returns its delivery sequence number.
    pub fn set_pending_suggestion(&mut self, suggestion: DesignSuggestion) -> u64 {
        self.handoff_seq += 1;
        self.pending = Some(PendingSuggestion {
            seq: self.handoff_seq,
            suggestion,
        });
        self.handoff_seq
    }

    /// Record a submitted lead (newest first) and persist the query collection.
    pub fn record_query(&mut self, query: ConsultationQuery) {
        tracing::info!(query_id = %query.id, with_design = query.ai_design.is_some(), "consultation query recorded");
        self.queries.insert(0, query);
        self.persist_queries();
    }

    pub(crate) fn persist_projects(&self) {
        self.persist(PROJECTS_KEY, &self.projects);
    }

    pub(crate) fn persist_queries(&self) {
        self.persist(QUERIES_KEY, &self.queries);
    }

    pub(crate) fn persist_studio(&self) {
        self.persist(STUDIO_KEY, &self.studio);
    }

    /// Fire-and-forget: a lost write is logged and the session carries on with in-memory state.
    fn persist<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) {
        if let Err(e) = write_record(self.storage.as_ref(), key, value) {
            tracing::error!(error = %e, "studio record not persisted; continuing with in-memory state");
        }
    }
}

fn write_record<T: Serialize + ?Sized>(
    storage: &dyn DurableStorage,
    key: &'static str,
    value: &T,
) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Encode { key, source })?;
    storage
        .write(key, &bytes)
        .map_err(|source| StoreError::Write { key, source })
}

/// `Ok(None)` when the record is absent.
fn read_record<T: DeserializeOwned>(
    storage: &dyn DurableStorage,
    key: &'static str,
) -> Result<Option<T>, StoreError> {
    let Some(bytes) = storage
        .read(key)
        .map_err(|source| StoreError::Read { key, source })?
    else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Decode { key, source })
}

fn load_or_default<T: DeserializeOwned>(
    storage: &dyn DurableStorage,
    key: &'static str,
    default: impl FnOnce() -> T,
) -> T {
    match read_record(storage, key) {
        Ok(Some(v)) => v,
        Ok(None) => default(),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default record");
            default()
        }
    }
}
