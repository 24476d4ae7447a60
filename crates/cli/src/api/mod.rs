pub mod client;
pub mod dto;

use async_trait::async_trait;

pub use client::{ApiClient, ClientError};
use dto::{AccountSummary, Idea, IdeaWithOwner, NewIdea, User};

/// The seven server calls the shell makes.
#[async_trait]
pub trait IdeasApi: Send + Sync {
    async fn register(
        &self,
        full_name: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<User, ClientError>;

    async fn login(&self, phone_number: &str, password: &str) -> Result<User, ClientError>;

    async fn list_users(&self) -> Result<Vec<AccountSummary>, ClientError>;

    async fn submit_idea(&self, idea: &NewIdea) -> Result<Idea, ClientError>;

    async fn list_ideas(&self) -> Result<Vec<IdeaWithOwner>, ClientError>;

    async fn list_user_ideas(&self, user_id: i64) -> Result<Vec<Idea>, ClientError>;

    async fn update_status(&self, idea_id: i64, status: &str) -> Result<Idea, ClientError>;
}
