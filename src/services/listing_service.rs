use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    dto::listings::{CreateListingRequest, ListingList, MarkSoldRequest},
    error::{AppError, AppResult},
    models::{CropListing, ListingStatus, User},
    response::{ApiResponse, Meta},
    state::AppState,
    validation::{require, validate_photos, validate_price, validate_quantity},
};

const DEFAULT_QUALITY: &str = "Standard";

pub async fn create_listing(
    state: &AppState,
    seller: &User,
    payload: CreateListingRequest,
) -> AppResult<ApiResponse<CropListing>> {
    let photos: Vec<String> = payload
        .photos
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    require("Name", &payload.name).map_err(AppError::BadRequest)?;
    require("Description", &payload.description).map_err(AppError::BadRequest)?;
    require("Category", &payload.category).map_err(AppError::BadRequest)?;
    require("Location", &payload.location).map_err(AppError::BadRequest)?;
    validate_quantity(payload.quantity).map_err(AppError::BadRequest)?;
    validate_price(payload.price).map_err(AppError::BadRequest)?;
    validate_photos(&photos).map_err(AppError::BadRequest)?;
    if payload.price.checked_mul(Decimal::from(payload.quantity)).is_none() {
        return Err(AppError::bad_request("Price times quantity is too large"));
    }

    let quality = payload
        .quality
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| DEFAULT_QUALITY.to_string());

    let listing = CropListing {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        description: payload.description.trim().to_string(),
        quantity: payload.quantity,
        price: payload.price,
        category: payload.category.trim().to_string(),
        harvest_date: payload.harvest_date,
        quality,
        photos,
        seller_id: seller.id,
        seller_name: seller.name.clone(),
        location: payload.location.trim().to_string(),
        date_added: Utc::now(),
        status: ListingStatus::Active,
        sold_units: None,
        revenue: None,
    };

    let stored = listing.clone();
    state.listings.update(move |all| all.push(stored)).await?;
    tracing::info!(listing_id = %listing.id, seller_id = %seller.id, "listing created");

    Ok(ApiResponse::success(
        "Listing created successfully!",
        listing,
        None,
    ))
}

/// Listings owned by `seller`, in storage order.
pub async fn listings_for(state: &AppState, seller: &User) -> Vec<CropListing> {
    state
        .listings
        .get()
        .await
        .into_iter()
        .filter(|l| l.seller_id == seller.id)
        .collect()
}

pub async fn my_listings(state: &AppState, seller: &User) -> AppResult<ApiResponse<ListingList>> {
    let items = listings_for(state, seller).await;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Listings", ListingList { items }, Some(meta)))
}

pub async fn delete_listing(
    state: &AppState,
    seller: &User,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let seller_id = seller.id;
    state
        .listings
        .try_update(move |all| {
            let before = all.len();
            all.retain(|l| !(l.id == id && l.seller_id == seller_id));
            if all.len() == before {
                return Err(AppError::NotFound);
            }
            Ok(())
        })
        .await?;
    tracing::info!(listing_id = %id, "listing deleted");

    Ok(ApiResponse::success(
        "Listing deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn mark_sold(
    state: &AppState,
    seller: &User,
    id: Uuid,
    payload: MarkSoldRequest,
) -> AppResult<ApiResponse<CropListing>> {
    let seller_id = seller.id;
    let sold_units = payload.sold_units;
    let listing = state
        .listings
        .try_update(move |all| -> AppResult<CropListing> {
            let listing = all
                .iter_mut()
                .find(|l| l.id == id && l.seller_id == seller_id)
                .ok_or(AppError::NotFound)?;
            if listing.status != ListingStatus::Active {
                return Err(AppError::bad_request("only active listings can be sold"));
            }
            if sold_units == 0 || sold_units > listing.quantity {
                return Err(AppError::bad_request(format!(
                    "sold_units must be between 1 and {}",
                    listing.quantity
                )));
            }
            let revenue = listing
                .price
                .checked_mul(Decimal::from(sold_units))
                .ok_or_else(|| AppError::bad_request("revenue is too large to compute"))?;
            listing.status = ListingStatus::Sold;
            listing.sold_units = Some(sold_units);
            listing.revenue = Some(revenue);
            Ok(listing.clone())
        })
        .await?;
    tracing::info!(listing_id = %id, sold_units, "listing marked sold");

    Ok(ApiResponse::success("Listing sold", listing, None))
}
