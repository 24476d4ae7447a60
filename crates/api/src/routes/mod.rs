pub mod accounts;
pub mod health;
pub mod ideas;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                       register (POST)
/// /login                          login (POST)
/// /users                          list accounts (GET)
///
/// /ideas                          list all (GET), submit (POST)
/// /ideas/user/{user_id}           list by owner (GET)
/// /ideas/{id}/status              update status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(accounts::router())
        .nest("/ideas", ideas::router())
}
