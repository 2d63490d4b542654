use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::profile::{ProfileView, UpdateProfileRequest},
    error::AppResult,
    middleware::auth::CurrentUser,
    models::User,
    response::ApiResponse,
    services::profile_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile with listing stats", body = ApiResponse<ProfileView>),
        (status = 401, description = "Not signed in"),
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<ApiResponse<ProfileView>>> {
    Ok(Json(profile_service::get_profile(&state, user).await?))
}

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = ApiResponse<User>),
        (status = 400, description = "Missing name or invalid email"),
        (status = 401, description = "Not signed in"),
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    Ok(Json(
        profile_service::update_profile(&state, &user, payload).await?,
    ))
}
