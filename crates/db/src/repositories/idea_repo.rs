//! Repository for the `ideas` table.

use ideas_core::idea_status::{IdeaStatus, StatusId};
use ideas_core::types::DbId;
use sqlx::PgPool;

use crate::models::idea::{CreateIdea, IdeaRow, IdeaWithOwnerRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, body, project, module, section, submitted_by, account_id, \
                       status_id, created_at, updated_at";

/// Provides insert, listing and status updates for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert a new idea with status `pending`, returning the created row.
    ///
    /// An unknown `account_id` fails with a foreign key violation on
    /// `fk_ideas_account_id`.
    pub async fn create(pool: &PgPool, input: &CreateIdea) -> Result<IdeaRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas (body, project, module, section, submitted_by, account_id, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IdeaRow>(&query)
            .bind(&input.text)
            .bind(&input.project)
            .bind(&input.module)
            .bind(&input.section)
            .bind(&input.submitted_by)
            .bind(input.account_id)
            .bind(StatusId::from(IdeaStatus::Pending))
            .fetch_one(pool)
            .await
    }

    /// List every idea joined with its owner, newest first.
    pub async fn list_with_owner(pool: &PgPool) -> Result<Vec<IdeaWithOwnerRow>, sqlx::Error> {
        sqlx::query_as::<_, IdeaWithOwnerRow>(
            "SELECT i.id, i.body, i.project, i.module, i.section, i.submitted_by,
                    i.account_id, i.status_id, i.created_at, i.updated_at,
                    a.full_name AS owner_full_name,
                    a.phone_number AS owner_phone_number
             FROM ideas i
             JOIN accounts a ON a.id = i.account_id
             ORDER BY i.created_at DESC, i.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// List ideas owned by one account, newest first. Empty when the
    /// account has none or does not exist.
    pub async fn list_by_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Vec<IdeaRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ideas
             WHERE account_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, IdeaRow>(&query)
            .bind(account_id)
            .fetch_all(pool)
            .await
    }

    /// Set an idea's status and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: IdeaStatus,
    ) -> Result<Option<IdeaRow>, sqlx::Error> {
        let query = format!(
            "UPDATE ideas SET status_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IdeaRow>(&query)
            .bind(id)
            .bind(status.id())
            .fetch_optional(pool)
            .await
    }
}
