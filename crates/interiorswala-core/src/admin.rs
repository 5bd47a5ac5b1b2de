//! Admin commands over the studio store. Each command is synchronous, never fails, and
//! rewrites the affected record before returning. Unknown ids are a silent no-op
//! (reported through the return value only).

use crate::ids;
use crate::models::{Project, ProjectDraft, QueryStatus, StudioDetails};
use crate::store::StudioStore;

impl StudioStore {
    /// Adds a project at the front of the portfolio and returns its fresh id.
    /// Drafts without a title or image are ignored.
    pub fn add_project(&mut self, draft: ProjectDraft) -> Option<String> {
        if !draft.is_complete() {
            tracing::warn!("project draft missing title or image; not added");
            return None;
        }
        let id = ids::unique_id(ids::project_id(ids::now_ms()), |c| {
            self.projects.iter().any(|p| p.id == c)
        });
        let project = draft.into_project(id.clone());
        tracing::info!(project_id = %id, title = %project.title, "project added");
        self.projects.insert(0, project);
        self.persist_projects();
        Some(id)
    }

    /// Replaces the project with the same id. The id itself never changes.
    pub fn update_project(&mut self, project: Project) -> bool {
        let found = match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => false,
        };
        self.persist_projects();
        found
    }

    pub fn delete_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.persist_projects();
        self.projects.len() != before
    }

    pub fn update_studio_details(&mut self, details: StudioDetails) {
        self.studio = details;
        self.persist_studio();
        tracing::info!("studio details updated");
    }

    /// Advances the query's status one step and returns the new status.
    pub fn cycle_query_status(&mut self, id: &str) -> Option<QueryStatus> {
        let next = self.queries.iter_mut().find(|q| q.id == id).map(|q| {
            let next = q.effective_status().next();
            q.status = Some(next);
            next
        });
        self.persist_queries();
        next
    }

    pub fn delete_query(&mut self, id: &str) -> bool {
        let before = self.queries.len();
        self.queries.retain(|q| q.id != id);
        self.persist_queries();
        self.queries.len() != before
    }

    pub fn clear_queries(&mut self) {
        let removed = self.queries.len();
        self.queries.clear();
        self.persist_queries();
        tracing::info!(removed, "consultation history cleared");
    }
}
