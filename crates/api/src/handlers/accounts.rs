//! Handlers for registration, login, and account listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ideas_core::inputs::{Credentials, Registration};
use ideas_db::models::account::{AccountResponse, PublicAccount};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/register`. Absent fields are reported as
/// validation errors rather than body rejections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserBody {
    pub user: PublicAccount,
}

#[derive(Debug, Serialize)]
pub struct UsersBody {
    pub users: Vec<AccountResponse>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create an account. Returns 201 with the account's public fields.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserBody>>)> {
    let registration = Registration::new(input.full_name, input.phone_number, input.password);
    let user = state.accounts.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserBody { user }).with_message("User registered successfully")),
    ))
}

/// POST /api/login
///
/// Verify phone number and password. No token or session is issued; the
/// caller receives the account's public fields.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<UserBody>>> {
    let credentials = Credentials::new(input.phone_number, input.password);
    let user = state.accounts.authenticate(credentials).await?;

    Ok(Json(
        ApiResponse::ok(UserBody { user }).with_message("Login successful"),
    ))
}

/// GET /api/users
///
/// Diagnostic listing of every account without password hashes.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UsersBody>>> {
    let users = state.accounts.list().await?;

    Ok(Json(ApiResponse::ok(UsersBody { users })))
}
