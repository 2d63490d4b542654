use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart).delete(clear_cart))
        .route("/{product_id}", put(update_quantity).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines with totals", body = ApiResponse<CartSummary>)
    ),
    tag = "Cart"
)]
pub async fn cart_list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(cart_service::get_cart(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add a product or increase its quantity", body = ApiResponse<CartSummary>),
        (status = 400, description = "Bad request"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity replaced", body = ApiResponse<CartSummary>),
        (status = 400, description = "Quantity below 1"),
        (status = 404, description = "Product not in cart"),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(
        cart_service::update_quantity(&state, &product_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Line removed, or nothing to remove", body = ApiResponse<CartSummary>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(
        cart_service::remove_from_cart(&state, &product_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<CartSummary>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(cart_service::clear_cart(&state).await?))
}
