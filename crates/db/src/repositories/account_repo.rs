//! Repository for the `accounts` table.

use sqlx::PgPool;

use crate::models::account::{Account, AccountResponse, CreateAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, phone_number, password_hash, created_at, updated_at";

/// Provides insert and lookup operations for accounts. Accounts are never
/// updated or deleted.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    ///
    /// A duplicate phone number fails with a unique violation on
    /// `uq_accounts_phone_number`.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (full_name, phone_number, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.full_name)
            .bind(&input.phone_number)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an account by phone number (exact match).
    pub async fn find_by_phone(
        pool: &PgPool,
        phone_number: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE phone_number = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(phone_number)
            .fetch_optional(pool)
            .await
    }

    /// List all accounts, most recently created first, without password hashes.
    pub async fn list(pool: &PgPool) -> Result<Vec<AccountResponse>, sqlx::Error> {
        sqlx::query_as::<_, AccountResponse>(
            "SELECT id, full_name, phone_number, created_at, updated_at
             FROM accounts
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }
}
