use uuid::Uuid;

use crate::{
    dto::auth::{LoginRequest, SignupRequest},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
    validation::{require, validate_email, validate_password_confirmation},
};

// Passwords are checked as form input only; nothing verifies or stores them.

pub async fn signup(state: &AppState, payload: SignupRequest) -> AppResult<ApiResponse<User>> {
    let SignupRequest {
        name,
        email,
        password,
        confirm_password,
    } = payload;

    require("Full name", &name).map_err(AppError::BadRequest)?;
    validate_email(&email).map_err(AppError::BadRequest)?;
    require("Password", &password).map_err(AppError::BadRequest)?;
    validate_password_confirmation(&password, &confirm_password)
        .map_err(AppError::BadRequest)?;

    let user = User {
        id: Uuid::new_v4(),
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: None,
        address: None,
    };
    state.current_user.set(Some(user.clone())).await?;
    tracing::info!(user_id = %user.id, "account created");

    Ok(ApiResponse::success("Account created successfully!", user, None))
}

/// Keeps the stored user when the email matches; otherwise starts a fresh
/// profile named after the email's local part.
pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<User>> {
    validate_email(&payload.email).map_err(AppError::BadRequest)?;
    require("Password", &payload.password).map_err(AppError::BadRequest)?;

    let email = payload.email.trim().to_string();
    let user = state
        .current_user
        .update(|current| {
            let matches = current
                .as_ref()
                .is_some_and(|u| u.email.eq_ignore_ascii_case(&email));
            if !matches {
                let name = email.split('@').next().unwrap_or_default().to_string();
                *current = Some(User {
                    id: Uuid::new_v4(),
                    name,
                    email: email.clone(),
                    phone: None,
                    address: None,
                });
            }
            current.clone()
        })
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("login produced no user")))?;
    tracing::info!(user_id = %user.id, "logged in");

    Ok(ApiResponse::success("Logged in successfully!", user, None))
}

pub async fn logout(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    state.current_user.set(None).await?;
    tracing::info!("logged out");

    Ok(ApiResponse::success(
        "Logged out",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
