//! Route definitions for account endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Routes mounted directly under `/api`.
///
/// ```text
/// POST /register  -> register
/// POST /login     -> login
/// GET  /users     -> list_users
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/users", get(accounts::list_users))
}
