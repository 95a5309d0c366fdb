use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::models::CreateUserCommand;
use crate::identity::models::EmailAddress;
use crate::identity::models::User;
use crate::inbound::http::router::AppState;

/// Register a new principal in the credential directory.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequestBody>,
) -> Result<ApiSuccess<User>, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateUserCommand::new(body.username, email, body.password);

    let user = state.auth_service.register(command).await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, user))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequestBody {
    username: String,
    email: String,
    password: String,
}
