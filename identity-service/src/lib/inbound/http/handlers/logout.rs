use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Acknowledge logout.
///
/// Tokens are stateless and there is no server-side session record or
/// blacklist; the client discards its tokens.
pub async fn logout() -> ApiSuccess<LogoutResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        LogoutResponseData {
            message: "Successfully logged out".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
