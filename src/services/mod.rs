pub mod auth_service;
pub mod cart_service;
pub mod listing_service;
pub mod product_service;
pub mod profile_service;
