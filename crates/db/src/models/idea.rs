//! Idea entity model and DTOs.

use ideas_core::idea_status::{IdeaStatus, InvalidStatus, StatusId};
use ideas_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::account::PublicAccount;

/// Raw row from the `ideas` table. The status is still a lookup id.
#[derive(Debug, Clone, FromRow)]
pub struct IdeaRow {
    pub id: DbId,
    pub body: String,
    pub project: String,
    pub module: String,
    pub section: String,
    pub submitted_by: String,
    pub account_id: DbId,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An idea as returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: DbId,
    pub text: String,
    pub project: String,
    pub module: String,
    pub section: String,
    /// Submitter's full name as it was at submission time.
    pub submitted_by: String,
    pub user_id: DbId,
    pub status: IdeaStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<IdeaRow> for Idea {
    type Error = InvalidStatus;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            text: row.body,
            project: row.project,
            module: row.module,
            section: row.section,
            submitted_by: row.submitted_by,
            user_id: row.account_id,
            status: IdeaStatus::try_from(row.status_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Idea row joined with its owner's public fields.
#[derive(Debug, Clone, FromRow)]
pub struct IdeaWithOwnerRow {
    #[sqlx(flatten)]
    pub idea: IdeaRow,
    pub owner_full_name: String,
    pub owner_phone_number: String,
}

/// An idea enriched with its owner's public identity, as listed by
/// `GET /api/ideas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaWithOwner {
    #[serde(flatten)]
    pub idea: Idea,
    pub owner: PublicAccount,
}

impl TryFrom<IdeaWithOwnerRow> for IdeaWithOwner {
    type Error = InvalidStatus;

    fn try_from(row: IdeaWithOwnerRow) -> Result<Self, Self::Error> {
        let owner = PublicAccount {
            id: row.idea.account_id,
            full_name: row.owner_full_name,
            phone_number: row.owner_phone_number,
        };
        Ok(Self {
            idea: Idea::try_from(row.idea)?,
            owner,
        })
    }
}

/// DTO for inserting a new idea. Status is always `pending` on insert.
#[derive(Debug, Clone)]
pub struct CreateIdea {
    pub text: String,
    pub project: String,
    pub module: String,
    pub section: String,
    pub submitted_by: String,
    pub account_id: DbId,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(status_id: StatusId) -> IdeaRow {
        let now = Utc::now();
        IdeaRow {
            id: 10,
            body: "add dark mode".into(),
            project: "dashboard".into(),
            module: "settings".into(),
            section: "ui-ux".into(),
            submitted_by: "Ann".into(),
            account_id: 1,
            status_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_maps_to_wire_names() {
        let idea = Idea::try_from(row(4)).unwrap();
        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["text"], "add dark mode");
        assert_eq!(json["submittedBy"], "Ann");
        assert_eq!(json["userId"], 1);
        assert_eq!(json["status"], "in-progress");
        assert!(json.get("body").is_none());
    }

    #[test]
    fn unknown_status_id_fails_conversion() {
        assert_eq!(Idea::try_from(row(9)), Err(InvalidStatus));
    }

    #[test]
    fn owner_is_nested_next_to_flattened_idea_fields() {
        let with_owner = IdeaWithOwner::try_from(IdeaWithOwnerRow {
            idea: row(1),
            owner_full_name: "Ann".into(),
            owner_phone_number: "555-0001".into(),
        })
        .unwrap();
        let json = serde_json::to_value(&with_owner).unwrap();
        assert_eq!(json["id"], 10);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["owner"]["fullName"], "Ann");
        assert_eq!(json["owner"]["id"], 1);
    }
}
