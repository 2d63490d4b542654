use crate::{
    catalog::ProductFilter,
    dto::products::{CategoryInfo, CategoryList, ProductDetail, ProductList},
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let filter = query.into_filter()?;
    let items = state.catalog.query(&filter);
    tracing::debug!(matched = items.len(), ?filter, "catalog query");

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<ProductDetail>> {
    let product = state.catalog.find(id).cloned().ok_or(AppError::NotFound)?;
    let related = state.catalog.related(&product);
    Ok(ApiResponse::success(
        "Product",
        ProductDetail { product, related },
        None,
    ))
}

pub async fn list_categories() -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<CategoryInfo> = Category::ALL.into_iter().map(CategoryInfo::from).collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

/// Category listing; the path segment wins over any `category` query value.
/// Unknown categories simply match nothing.
pub async fn list_category_products(
    state: &AppState,
    category: &str,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let filter = ProductFilter {
        category: Some(category.to_string()),
        ..query.into_filter()?
    };
    let items = state.catalog.query(&filter);
    let title = Category::parse(category)
        .map(|c| c.title())
        .unwrap_or("Products");

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(title, ProductList { items }, Some(meta)))
}
