use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::models::LoginRequest;
use crate::identity::models::LoginResponse;
use crate::inbound::http::router::AppState;

/// Authenticate primary credentials and return the issued token pair.
///
/// The 401 body is identical for unknown username and wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponse>, ApiError> {
    let request = LoginRequest {
        username: body.username,
        password: body.password,
    };

    match state.auth_service.login(request).await? {
        Some(response) => Ok(ApiSuccess::new(StatusCode::OK, response)),
        None => Err(ApiError::Unauthorized(
            "Incorrect username or password".to_string(),
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
