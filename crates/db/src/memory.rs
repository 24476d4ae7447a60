//! In-process store honouring the same constraints as the PostgreSQL schema:
//! unique phone numbers, owner references, and newest-first ordering with
//! the id as tie-breaker.

use async_trait::async_trait;
use chrono::Utc;
use ideas_core::idea_status::IdeaStatus;
use ideas_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::account::{Account, AccountResponse, CreateAccount, PublicAccount};
use crate::models::idea::{CreateIdea, Idea, IdeaWithOwner};
use crate::store::{AccountStore, IdeaStore, Store, StoreError};

#[derive(Debug, Default)]
struct Tables {
    accounts: Vec<Account>,
    ideas: Vec<Idea>,
    next_account_id: DbId,
    next_idea_id: DbId,
}

/// Store backed by process memory. Data is lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; higher id wins on equal timestamps.
fn newest_first(a: &Idea, b: &Idea) -> std::cmp::Ordering {
    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn insert_account(&self, input: &CreateAccount) -> Result<Account, StoreError> {
        let mut tables = self.tables.write().await;

        if tables
            .accounts
            .iter()
            .any(|a| a.phone_number == input.phone_number)
        {
            return Err(StoreError::UniqueViolation {
                constraint: "uq_accounts_phone_number".into(),
            });
        }

        tables.next_account_id += 1;
        let now = Utc::now();
        let account = Account {
            id: tables.next_account_id,
            full_name: input.full_name.clone(),
            phone_number: input.phone_number.clone(),
            password_hash: input.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.accounts.push(account.clone());
        Ok(account)
    }

    async fn find_account_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<Account>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .accounts
            .iter()
            .find(|a| a.phone_number == phone_number)
            .cloned())
    }

    async fn list_accounts(&self) -> Result<Vec<AccountResponse>, StoreError> {
        let tables = self.tables.read().await;
        let mut accounts: Vec<AccountResponse> =
            tables.accounts.iter().map(AccountResponse::from).collect();
        accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(accounts)
    }
}

#[async_trait]
impl IdeaStore for MemoryStore {
    async fn insert_idea(&self, input: &CreateIdea) -> Result<Idea, StoreError> {
        let mut tables = self.tables.write().await;

        if !tables.accounts.iter().any(|a| a.id == input.account_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "fk_ideas_account_id".into(),
            });
        }

        tables.next_idea_id += 1;
        let now = Utc::now();
        let idea = Idea {
            id: tables.next_idea_id,
            text: input.text.clone(),
            project: input.project.clone(),
            module: input.module.clone(),
            section: input.section.clone(),
            submitted_by: input.submitted_by.clone(),
            user_id: input.account_id,
            status: IdeaStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.ideas.push(idea.clone());
        Ok(idea)
    }

    async fn list_ideas_with_owner(&self) -> Result<Vec<IdeaWithOwner>, StoreError> {
        let tables = self.tables.read().await;
        let mut ideas = tables.ideas.clone();
        ideas.sort_by(newest_first);

        Ok(ideas
            .into_iter()
            .filter_map(|idea| {
                let owner = tables.accounts.iter().find(|a| a.id == idea.user_id)?;
                Some(IdeaWithOwner {
                    owner: PublicAccount::from(owner),
                    idea,
                })
            })
            .collect())
    }

    async fn list_ideas_by_owner(&self, account_id: DbId) -> Result<Vec<Idea>, StoreError> {
        let tables = self.tables.read().await;
        let mut ideas: Vec<Idea> = tables
            .ideas
            .iter()
            .filter(|i| i.user_id == account_id)
            .cloned()
            .collect();
        ideas.sort_by(newest_first);
        Ok(ideas)
    }

    async fn update_idea_status(
        &self,
        id: DbId,
        status: IdeaStatus,
    ) -> Result<Option<Idea>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(idea) = tables.ideas.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        idea.status = status;
        idea.updated_at = Utc::now();
        Ok(Some(idea.clone()))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}
