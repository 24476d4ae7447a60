//! Handlers for the `/ideas` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ideas_core::inputs::IdeaSubmission;
use ideas_core::types::DbId;
use ideas_db::models::idea::{Idea, IdeaWithOwner};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/ideas`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitIdeaRequest {
    pub text: Option<String>,
    pub project: Option<String>,
    pub module: Option<String>,
    pub section: Option<String>,
    pub submitted_by: Option<String>,
    pub user_id: Option<DbId>,
}

/// Request body for `PATCH /api/ideas/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IdeaBody {
    pub idea: Idea,
}

#[derive(Debug, Serialize)]
pub struct IdeasBody<T> {
    pub ideas: Vec<T>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/ideas
///
/// Submit an idea. Returns 201 with the stored record in status `pending`.
pub async fn submit_idea(
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmitIdeaRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<IdeaBody>>)> {
    let submission = IdeaSubmission::new(
        input.text,
        input.project,
        input.module,
        input.section,
        input.submitted_by,
        input.user_id,
    );
    let idea = state.ideas.submit(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(IdeaBody { idea }).with_message("Idea submitted successfully")),
    ))
}

/// GET /api/ideas
///
/// Every idea with its owner's public fields, newest first.
pub async fn list_ideas(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<IdeasBody<IdeaWithOwner>>>> {
    let ideas = state.ideas.list_all().await?;

    Ok(Json(ApiResponse::ok(IdeasBody { ideas })))
}

/// GET /api/ideas/user/{user_id}
///
/// Ideas submitted by one account, newest first. Empty for unknown accounts.
pub async fn list_user_ideas(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<IdeasBody<Idea>>>> {
    let ideas = state.ideas.list_by_owner(user_id).await?;

    Ok(Json(ApiResponse::ok(IdeasBody { ideas })))
}

/// PATCH /api/ideas/{id}/status
///
/// Move an idea to any of the five statuses.
pub async fn update_idea_status(
    State(state): State<AppState>,
    AppPath(idea_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<IdeaBody>>> {
    let status = input.status.unwrap_or_default();
    let idea = state.ideas.update_status(idea_id, &status).await?;

    Ok(Json(
        ApiResponse::ok(IdeaBody { idea }).with_message("Idea status updated successfully"),
    ))
}
