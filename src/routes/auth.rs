use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{LoginRequest, SignupRequest},
    error::AppResult,
    models::User,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created and signed in", body = ApiResponse<User>),
        (status = 400, description = "Missing field or passwords don't match")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = auth_service::signup(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<User>),
        (status = 400, description = "Missing field or invalid email")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = auth_service::login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Auth"
)]
pub async fn logout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = auth_service::logout(&state).await?;
    Ok(Json(resp))
}
