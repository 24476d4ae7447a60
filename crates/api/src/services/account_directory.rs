use std::sync::{Arc, OnceLock};

use ideas_core::error::CoreError;
use ideas_core::inputs::{Credentials, Registration};
use ideas_core::validation::check;
use ideas_db::models::account::{AccountResponse, CreateAccount, PublicAccount};
use ideas_db::{AccountStore, StoreError};

use super::{join_failure, store_failure};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};

/// Hash verified against when the phone number is unknown, so both
/// credential failures cost one Argon2 verification.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Owns account identity: registration and credential verification.
pub struct AccountDirectory {
    store: Arc<dyn AccountStore>,
    min_password_length: usize,
}

impl AccountDirectory {
    pub fn new(store: Arc<dyn AccountStore>, min_password_length: usize) -> Self {
        Self {
            store,
            min_password_length,
        }
    }

    /// Register a new account and return its public fields.
    ///
    /// The existence query is only a fast path; the store's unique
    /// constraint decides races between concurrent registrations.
    pub async fn register(&self, input: Registration) -> Result<PublicAccount, CoreError> {
        check(&input)?;
        validate_password_strength(&input.password, self.min_password_length)
            .map_err(CoreError::Validation)?;

        let existing = self
            .store
            .find_account_by_phone(&input.phone_number)
            .await
            .map_err(store_failure)?;
        if existing.is_some() {
            tracing::debug!(phone_number = %input.phone_number, "Registration rejected by pre-check");
            return Err(CoreError::DuplicateAccount);
        }

        let Registration {
            full_name,
            phone_number,
            password,
        } = input;

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(join_failure)?
            .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))?;

        let create = CreateAccount {
            full_name,
            phone_number,
            password_hash,
        };

        let account = match self.store.insert_account(&create).await {
            Ok(account) => account,
            Err(StoreError::UniqueViolation { constraint }) => {
                tracing::debug!(%constraint, "Registration rejected by unique constraint");
                return Err(CoreError::DuplicateAccount);
            }
            Err(e) => return Err(store_failure(e)),
        };

        tracing::info!(account_id = account.id, "Account registered");
        Ok(PublicAccount::from(&account))
    }

    /// Verify a phone number and password.
    ///
    /// Unknown phone number and wrong password both fail with
    /// [`CoreError::InvalidCredentials`]. No attempt counting is done.
    pub async fn authenticate(&self, credentials: Credentials) -> Result<PublicAccount, CoreError> {
        check(&credentials)?;

        let account = self
            .store
            .find_account_by_phone(&credentials.phone_number)
            .await
            .map_err(store_failure)?;

        let Some(account) = account else {
            self.burn_verification(credentials.password).await;
            return Err(CoreError::InvalidCredentials);
        };

        let password = credentials.password;
        let stored_hash = account.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(join_failure)?
            .map_err(|e| CoreError::Internal(format!("Password verification error: {e}")))?;

        if !matches {
            tracing::debug!(account_id = account.id, "Login rejected: password mismatch");
            return Err(CoreError::InvalidCredentials);
        }

        tracing::info!(account_id = account.id, "Login successful");
        Ok(PublicAccount::from(&account))
    }

    /// All accounts' public fields plus timestamps, newest first.
    pub async fn list(&self) -> Result<Vec<AccountResponse>, CoreError> {
        self.store.list_accounts().await.map_err(store_failure)
    }

    /// Spend one verification on a throwaway hash. Failures are ignored; the
    /// caller reports invalid credentials either way.
    async fn burn_verification(&self, password: String) {
        let _ = tokio::task::spawn_blocking(move || {
            let hash = match DUMMY_HASH.get() {
                Some(hash) => hash.clone(),
                None => match hash_password("placeholder-password") {
                    Ok(hash) => DUMMY_HASH.get_or_init(|| hash).clone(),
                    Err(_) => return,
                },
            };
            let _ = verify_password(&password, &hash);
        })
        .await;
    }
}
