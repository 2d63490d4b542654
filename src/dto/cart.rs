use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{cart::Cart, models::CartLine};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total_items: u64,
    pub subtotal: Decimal,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().to_vec(),
            total_items: cart.total_items(),
            subtotal: cart.subtotal(),
        }
    }
}
