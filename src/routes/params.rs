use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    catalog::ProductFilter,
    error::{AppError, AppResult},
};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive match against name or description, ignoring
    /// surrounding whitespace. Blank means no search.
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// When true, products with no stock are left out.
    pub in_stock: Option<bool>,
}

impl ProductQuery {
    pub fn into_filter(self) -> AppResult<ProductFilter> {
        let min_price = self.min_price.unwrap_or(Decimal::ZERO);
        if let Some(max) = self.max_price {
            if min_price > max {
                return Err(AppError::bad_request(
                    "min_price must not be greater than max_price",
                ));
            }
        }

        Ok(ProductFilter {
            category: self.category.filter(|c| !c.trim().is_empty()),
            search: self.search.filter(|s| !s.trim().is_empty()),
            min_price,
            max_price: self.max_price,
            in_stock: self.in_stock.unwrap_or(false),
        })
    }
}
