use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::models::User;
use crate::inbound::http::middleware::CurrentUser;

/// Return the principal resolved from the bearer token by the middleware.
pub async fn me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<User>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, user))
}
