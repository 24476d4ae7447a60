//! Route definitions for the `/ideas` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::ideas;
use crate::state::AppState;

/// Routes mounted at `/ideas`.
///
/// ```text
/// GET   /                  -> list_ideas
/// POST  /                  -> submit_idea
/// GET   /user/{user_id}    -> list_user_ideas
/// PATCH /{id}/status       -> update_idea_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas::list_ideas).post(ideas::submit_idea))
        .route("/user/{user_id}", get(ideas::list_user_ideas))
        .route("/{id}/status", patch(ideas::update_idea_status))
}
