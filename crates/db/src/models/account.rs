//! Account entity model and DTOs.

use ideas_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`PublicAccount`] or [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub full_name: String,
    pub phone_number: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity fields returned by register and login, and embedded as the
/// owner of listed ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccount {
    pub id: DbId,
    pub full_name: String,
    pub phone_number: String,
}

impl From<&Account> for PublicAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            phone_number: account.phone_number.clone(),
        }
    }
}

/// Account listing shape: public fields plus timestamps, no password hash.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: DbId,
    pub full_name: String,
    pub phone_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            phone_number: account.phone_number.clone(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// DTO for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub full_name: String,
    pub phone_number: String,
    pub password_hash: String,
}
