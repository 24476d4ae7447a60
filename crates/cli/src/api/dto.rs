use chrono::{DateTime, Utc};
use ideas_core::idea_status::IdeaStatus;
use serde::{Deserialize, Serialize};

/// Public fields of an account, as returned by register and login.
/// This is also what the identity store remembers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
}

/// Entry of `GET /api/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: i64,
    pub text: String,
    pub project: String,
    pub module: String,
    pub section: String,
    pub submitted_by: String,
    pub user_id: i64,
    pub status: IdeaStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdeaWithOwner {
    #[serde(flatten)]
    pub idea: Idea,
    pub owner: User,
}

// Request bodies

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub full_name: &'a str,
    pub phone_number: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub phone_number: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub text: String,
    pub project: String,
    pub module: String,
    pub section: String,
    pub submitted_by: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusRequest<'a> {
    pub status: &'a str,
}

// Response payloads (the envelope's fields besides `success`/`message`)

#[derive(Debug, Deserialize)]
pub(super) struct UserPayload {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(super) struct UsersPayload {
    pub users: Vec<AccountSummary>,
}

#[derive(Debug, Deserialize)]
pub(super) struct IdeaPayload {
    pub idea: Idea,
}

#[derive(Debug, Deserialize)]
pub(super) struct IdeasPayload<T> {
    pub ideas: Vec<T>,
}
