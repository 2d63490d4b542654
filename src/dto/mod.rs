pub mod auth;
pub mod cart;
pub mod listings;
pub mod products;
pub mod profile;
