use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Product};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<CategoryInfo>)]
    pub items: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryInfo {
    pub category: Category,
    pub title: String,
    pub description: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            description: category.description().to_string(),
        }
    }
}
