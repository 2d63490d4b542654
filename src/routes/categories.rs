use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{CategoryList, ProductList},
    error::AppResult,
    response::ApiResponse,
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/{category}/products", get(list_category_products))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Product categories", body = ApiResponse<CategoryList>)
    ),
    tag = "Products"
)]
pub async fn list_categories() -> AppResult<Json<ApiResponse<CategoryList>>> {
    Ok(Json(product_service::list_categories().await?))
}

#[utoipa::path(
    get,
    path = "/api/categories/{category}/products",
    params(
        ("category" = String, Path, description = "Category name, case-insensitive"),
        ProductQuery
    ),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_category_products(
    Path(category): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_category_products(&state, &category, query).await?;
    Ok(Json(resp))
}
