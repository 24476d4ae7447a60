//! Shared response envelope for API handlers.
//!
//! Every response carries a `success` flag. Successful responses flatten
//! their payload (`user`, `idea`, `ideas`, `users`) next to it and may add a
//! human-readable `message`; failures are produced by
//! [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "success": true, ...payload }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(IdeaBody { idea }).with_message("Idea submitted successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}
