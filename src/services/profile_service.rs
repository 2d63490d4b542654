use crate::{
    dto::profile::{ListingStats, ProfileView, UpdateProfileRequest},
    error::{AppError, AppResult},
    models::User,
    services::listing_service::listings_for,
    state::AppState,
    response::ApiResponse,
    validation::{optional, require, validate_email},
};

pub async fn get_profile(state: &AppState, user: User) -> AppResult<ApiResponse<ProfileView>> {
    let listings = listings_for(state, &user).await;
    let stats = ListingStats::from_listings(&listings)
        .ok_or_else(|| AppError::bad_request("listing totals are too large to compute"))?;
    Ok(ApiResponse::success(
        "Profile",
        ProfileView {
            user,
            stats,
            listings,
        },
        None,
    ))
}

/// Saves the edited profile and renames the user on their listings.
pub async fn update_profile(
    state: &AppState,
    user: &User,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    require("Full name", &payload.name).map_err(AppError::BadRequest)?;
    validate_email(&payload.email).map_err(AppError::BadRequest)?;

    let updated = User {
        id: user.id,
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: optional(payload.phone),
        address: optional(payload.address),
    };
    // Listings first: if that write fails the stored user still matches them.
    let seller_id = updated.id;
    let seller_name = updated.name.clone();
    let renamed = state
        .listings
        .update(move |all| {
            let mut renamed = 0usize;
            for listing in all.iter_mut().filter(|l| l.seller_id == seller_id) {
                listing.seller_name = seller_name.clone();
                renamed += 1;
            }
            renamed
        })
        .await?;
    state.current_user.set(Some(updated.clone())).await?;
    tracing::info!(user_id = %updated.id, renamed, "profile updated");

    Ok(ApiResponse::success("Profile updated", updated, None))
}
