use std::sync::Arc;

use ideas_core::error::CoreError;
use ideas_core::idea_status::IdeaStatus;
use ideas_core::inputs::IdeaSubmission;
use ideas_core::types::DbId;
use ideas_core::validation::check;
use ideas_db::models::idea::{CreateIdea, Idea, IdeaWithOwner};
use ideas_db::{IdeaStore, StoreError};

use super::store_failure;

/// Owns idea records: submission, listing, and status transitions.
///
/// Status transitions are unrestricted: any status may follow any other,
/// including itself and including leaving `completed`.
pub struct IdeaLedger {
    store: Arc<dyn IdeaStore>,
}

impl IdeaLedger {
    pub fn new(store: Arc<dyn IdeaStore>) -> Self {
        Self { store }
    }

    /// Create an idea in status `pending` and return the stored record.
    pub async fn submit(&self, input: IdeaSubmission) -> Result<Idea, CoreError> {
        check(&input)?;

        let create = CreateIdea {
            text: input.text,
            project: input.project,
            module: input.module,
            section: input.section,
            submitted_by: input.submitted_by,
            account_id: input.owner_id,
        };

        let idea = match self.store.insert_idea(&create).await {
            Ok(idea) => idea,
            Err(StoreError::ForeignKeyViolation { .. }) => {
                return Err(CoreError::Validation(
                    "Referenced account does not exist".into(),
                ))
            }
            Err(e) => return Err(store_failure(e)),
        };

        tracing::info!(idea_id = idea.id, account_id = idea.user_id, "Idea submitted");
        Ok(idea)
    }

    /// Every idea with its owner's public fields, newest first.
    pub async fn list_all(&self) -> Result<Vec<IdeaWithOwner>, CoreError> {
        self.store
            .list_ideas_with_owner()
            .await
            .map_err(store_failure)
    }

    /// Ideas owned by `owner_id`, newest first. Unknown owners yield an
    /// empty list.
    pub async fn list_by_owner(&self, owner_id: DbId) -> Result<Vec<Idea>, CoreError> {
        self.store
            .list_ideas_by_owner(owner_id)
            .await
            .map_err(store_failure)
    }

    /// Move an idea to `status`. The status name is checked before the idea
    /// is looked up, so an invalid name is reported even for unknown ids.
    pub async fn update_status(&self, idea_id: DbId, status: &str) -> Result<Idea, CoreError> {
        let status: IdeaStatus = status
            .parse()
            .map_err(|_| CoreError::Validation("Invalid status".into()))?;

        let idea = self
            .store
            .update_idea_status(idea_id, status)
            .await
            .map_err(store_failure)?
            .ok_or(CoreError::NotFound {
                entity: "Idea",
                id: idea_id,
            })?;

        tracing::info!(idea_id, status = %status, "Idea status updated");
        Ok(idea)
    }
}
