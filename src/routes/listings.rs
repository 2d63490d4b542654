use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::listings::{CreateListingRequest, ListingList, MarkSoldRequest},
    error::AppResult,
    middleware::auth::CurrentUser,
    models::CropListing,
    response::ApiResponse,
    services::listing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(my_listings).post(create_listing))
        .route("/{id}", delete(delete_listing))
        .route("/{id}/sold", post(mark_sold))
}

#[utoipa::path(
    get,
    path = "/api/listings",
    responses(
        (status = 200, description = "Listings of the signed-in seller", body = ApiResponse<ListingList>),
        (status = 401, description = "Not signed in"),
    ),
    tag = "Listings"
)]
pub async fn my_listings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<ApiResponse<ListingList>>> {
    Ok(Json(listing_service::my_listings(&state, &user).await?))
}

#[utoipa::path(
    post,
    path = "/api/listings",
    request_body = CreateListingRequest,
    responses(
        (status = 200, description = "Crop listed for sale", body = ApiResponse<CropListing>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not signed in"),
    ),
    tag = "Listings"
)]
pub async fn create_listing(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateListingRequest>,
) -> AppResult<Json<ApiResponse<CropListing>>> {
    Ok(Json(
        listing_service::create_listing(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Listing not found"),
    ),
    tag = "Listings"
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(listing_service::delete_listing(&state, &user, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/listings/{id}/sold",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    request_body = MarkSoldRequest,
    responses(
        (status = 200, description = "Listing marked sold", body = ApiResponse<CropListing>),
        (status = 400, description = "Listing not active or units out of range"),
        (status = 404, description = "Listing not found"),
    ),
    tag = "Listings"
)]
pub async fn mark_sold(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<MarkSoldRequest>,
) -> AppResult<Json<ApiResponse<CropListing>>> {
    Ok(Json(
        listing_service::mark_sold(&state, &user, id, payload).await?,
    ))
}
