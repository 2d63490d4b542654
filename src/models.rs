use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Seeds,
    Fertilizers,
    Pesticides,
    Insecticides,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Seeds,
        Category::Fertilizers,
        Category::Pesticides,
        Category::Insecticides,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seeds => "seeds",
            Category::Fertilizers => "fertilizers",
            Category::Pesticides => "pesticides",
            Category::Insecticides => "insecticides",
            Category::Other => "other",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Seeds => "Seeds",
            Category::Fertilizers => "Fertilizers",
            Category::Pesticides => "Pesticides",
            Category::Insecticides => "Insecticides",
            Category::Other => "Products",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Seeds => {
                "High-quality seeds for various crops to ensure a successful harvest."
            }
            Category::Fertilizers => {
                "Boost your crop yield with our range of organic and chemical fertilizers."
            }
            Category::Pesticides => {
                "Protect your crops from pests with our effective pesticide solutions."
            }
            Category::Insecticides => {
                "Control insect infestations with our range of safe and effective insecticides."
            }
            Category::Other => "Browse all our products",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image_url: String,
    pub stock: u32,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
    /// Declared for stored data compatibility; nothing transitions into it.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CropListing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub price: Decimal,
    pub category: String,
    pub harvest_date: NaiveDate,
    pub quality: String,
    pub photos: Vec<String>,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub location: String,
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub status: ListingStatus,
    pub sold_units: Option<u32>,
    pub revenue: Option<Decimal>,
}

impl CropListing {
    /// `price × quantity`, or `None` when it does not fit a `Decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}
