use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::models::TokenResponse;
use crate::inbound::http::router::AppState;

/// Exchange a refresh token for a new access token.
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequestBody>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    match state.auth_service.refresh(&body.refresh_token).await? {
        Some(response) => Ok(ApiSuccess::new(StatusCode::OK, response)),
        None => Err(ApiError::Unauthorized("Invalid refresh token".to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshRequestBody {
    refresh_token: String,
}
