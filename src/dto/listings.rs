use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CropListing;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub price: Decimal,
    pub harvest_date: NaiveDate,
    pub quality: Option<String>,
    pub location: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkSoldRequest {
    pub sold_units: u32,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ListingList {
    #[schema(value_type = Vec<CropListing>)]
    pub items: Vec<CropListing>,
}
