use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CropListing, User};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ListingStats {
    pub total_listings: usize,
    pub total_quantity: u64,
    pub total_value: Decimal,
    pub average_price: Decimal,
}

impl ListingStats {
    /// Returns `None` when a total does not fit a `Decimal`.
    pub fn from_listings(listings: &[CropListing]) -> Option<Self> {
        let total_listings = listings.len();
        let total_quantity = listings.iter().map(|l| u64::from(l.quantity)).sum();

        let mut total_value = Decimal::ZERO;
        let mut price_sum = Decimal::ZERO;
        for listing in listings {
            total_value = total_value.checked_add(listing.value()?)?;
            price_sum = price_sum.checked_add(listing.price)?;
        }

        let average_price = if total_listings == 0 {
            Decimal::ZERO
        } else {
            price_sum
                .checked_div(Decimal::from(total_listings))?
                .round_dp(2)
        };
        Some(Self {
            total_listings,
            total_quantity,
            total_value,
            average_price,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileView {
    pub user: User,
    pub stats: ListingStats,
    pub listings: Vec<CropListing>,
}
