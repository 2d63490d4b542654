use axum::extract::FromRequestParts;

use crate::{error::AppError, models::User, state::AppState};

/// The signed-in user; rejects the request when nobody is signed in.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub async fn require_user(state: &AppState) -> Result<User, AppError> {
    state.current_user.get().await.ok_or(AppError::Unauthorized)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_user(state).await.inspect_err(|_| {
            tracing::debug!("rejected request without a signed-in user");
        })?;
        Ok(CurrentUser(user))
    }
}
