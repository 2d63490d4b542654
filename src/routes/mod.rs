use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod cart;
pub mod categories;
pub mod doc;
pub mod health;
pub mod listings;
pub mod params;
pub mod products;
pub mod profile;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/cart", cart::router())
        .nest("/auth", auth::router())
        .nest("/listings", listings::router())
        .nest("/profile", profile::router())
}
