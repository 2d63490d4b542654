use crate::{
    dto::cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn positive_quantity(quantity: i64) -> AppResult<u32> {
    if quantity <= 0 {
        return Err(AppError::bad_request("quantity must be greater than 0"));
    }
    u32::try_from(quantity).map_err(|_| AppError::bad_request("quantity is too large"))
}

pub async fn get_cart(state: &AppState) -> AppResult<ApiResponse<CartSummary>> {
    let cart = state.cart.lock().await;
    let summary = CartSummary::from(&*cart);
    let meta = Meta::total(summary.items.len());
    Ok(ApiResponse::success("OK", summary, Some(meta)))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    let quantity = positive_quantity(payload.quantity)?;
    let product = state
        .catalog
        .find(&payload.product_id)
        .cloned()
        .ok_or_else(|| AppError::bad_request("product not found"))?;

    let mut cart = state.cart.lock().await;
    cart.add_to_cart(product, quantity);
    tracing::info!(
        product_id = %payload.product_id,
        quantity,
        total_items = cart.total_items(),
        "added to cart"
    );

    Ok(ApiResponse::success("Added to cart", CartSummary::from(&*cart), None))
}

pub async fn update_quantity(
    state: &AppState,
    product_id: &str,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    let quantity = positive_quantity(payload.quantity)?;
    let mut cart = state.cart.lock().await;
    if !cart.update_quantity(product_id, quantity) {
        return Err(AppError::NotFound);
    }
    tracing::info!(product_id, quantity, "cart quantity updated");

    Ok(ApiResponse::success("Updated", CartSummary::from(&*cart), None))
}

/// Removing a product that is not in the cart succeeds and changes nothing.
pub async fn remove_from_cart(
    state: &AppState,
    product_id: &str,
) -> AppResult<ApiResponse<CartSummary>> {
    let mut cart = state.cart.lock().await;
    if cart.remove_from_cart(product_id) {
        tracing::info!(product_id, "removed from cart");
    } else {
        tracing::debug!(product_id, "remove skipped, product not in cart");
    }

    Ok(ApiResponse::success(
        "Removed from cart",
        CartSummary::from(&*cart),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<CartSummary>> {
    let mut cart = state.cart.lock().await;
    cart.clear();
    tracing::info!("cart cleared");

    Ok(ApiResponse::success("Cart cleared", CartSummary::from(&*cart), None))
}
