//! Store access traits and the PostgreSQL implementation.
//!
//! The Account Directory and the Idea Ledger receive an explicitly
//! constructed store at startup instead of reaching for a global
//! connection. [`PgStore`] owns the pool; [`crate::MemoryStore`] is the
//! in-process stand-in.

use async_trait::async_trait;
use ideas_core::idea_status::{IdeaStatus, InvalidStatus};
use ideas_core::types::DbId;

use crate::models::account::{Account, AccountResponse, CreateAccount};
use crate::models::idea::{CreateIdea, Idea, IdeaWithOwner};
use crate::repositories::{AccountRepo, IdeaRepo};
use crate::DbPool;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Failure reported by a store. Constraint violations are split out so the
/// services can translate them into domain errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("stored idea has unknown status id")]
    CorruptStatus(#[from] InvalidStatus),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return StoreError::UniqueViolation { constraint },
                Some(FOREIGN_KEY_VIOLATION) => {
                    return StoreError::ForeignKeyViolation { constraint }
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

/// Account persistence used by the Account Directory.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert an account. A taken phone number fails with
    /// [`StoreError::UniqueViolation`].
    async fn insert_account(&self, input: &CreateAccount) -> Result<Account, StoreError>;

    async fn find_account_by_phone(&self, phone_number: &str)
        -> Result<Option<Account>, StoreError>;

    /// All accounts, newest first.
    async fn list_accounts(&self) -> Result<Vec<AccountResponse>, StoreError>;
}

/// Idea persistence used by the Idea Ledger.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Insert an idea with status `pending`. An unknown owner fails with
    /// [`StoreError::ForeignKeyViolation`].
    async fn insert_idea(&self, input: &CreateIdea) -> Result<Idea, StoreError>;

    /// All ideas with their owners, newest first.
    async fn list_ideas_with_owner(&self) -> Result<Vec<IdeaWithOwner>, StoreError>;

    /// Ideas owned by `account_id`, newest first.
    async fn list_ideas_by_owner(&self, account_id: DbId) -> Result<Vec<Idea>, StoreError>;

    /// Returns `None` when no idea has the given id.
    async fn update_idea_status(
        &self,
        id: DbId,
        status: IdeaStatus,
    ) -> Result<Option<Idea>, StoreError>;
}

/// A complete store with an explicit lifecycle.
#[async_trait]
pub trait Store: AccountStore + IdeaStore {
    /// Confirm the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release held resources. The store must not be used afterwards.
    async fn close(&self);
}

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        crate::run_migrations(&self.pool).await
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn insert_account(&self, input: &CreateAccount) -> Result<Account, StoreError> {
        Ok(AccountRepo::create(&self.pool, input).await?)
    }

    async fn find_account_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<Account>, StoreError> {
        Ok(AccountRepo::find_by_phone(&self.pool, phone_number).await?)
    }

    async fn list_accounts(&self) -> Result<Vec<AccountResponse>, StoreError> {
        Ok(AccountRepo::list(&self.pool).await?)
    }
}

#[async_trait]
impl IdeaStore for PgStore {
    async fn insert_idea(&self, input: &CreateIdea) -> Result<Idea, StoreError> {
        let row = IdeaRepo::create(&self.pool, input).await?;
        Ok(Idea::try_from(row)?)
    }

    async fn list_ideas_with_owner(&self) -> Result<Vec<IdeaWithOwner>, StoreError> {
        IdeaRepo::list_with_owner(&self.pool)
            .await?
            .into_iter()
            .map(|row| IdeaWithOwner::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn list_ideas_by_owner(&self, account_id: DbId) -> Result<Vec<Idea>, StoreError> {
        IdeaRepo::list_by_account(&self.pool, account_id)
            .await?
            .into_iter()
            .map(|row| Idea::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn update_idea_status(
        &self,
        id: DbId,
        status: IdeaStatus,
    ) -> Result<Option<Idea>, StoreError> {
        IdeaRepo::update_status(&self.pool, id, status)
            .await?
            .map(|row| Idea::try_from(row).map_err(StoreError::from))
            .transpose()
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
