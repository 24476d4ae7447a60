//! Request-independent domain services.
//!
//! - [`AccountDirectory`] -- registration, authentication, account listing.
//! - [`IdeaLedger`] -- idea submission, listing, status updates.
//!
//! Both hold the store they were constructed with and translate
//! [`ideas_db::StoreError`] into [`ideas_core::error::CoreError`].

mod account_directory;
mod idea_ledger;

pub use account_directory::AccountDirectory;
pub use idea_ledger::IdeaLedger;

use ideas_core::error::CoreError;
use ideas_db::StoreError;
use tokio::task::JoinError;

fn store_failure(err: StoreError) -> CoreError {
    CoreError::Internal(format!("Store error: {err}"))
}

fn join_failure(err: JoinError) -> CoreError {
    CoreError::Internal(format!("Blocking task failed: {err}"))
}
