//! Storefront backend for agricultural supplies: catalog browsing, a session
//! cart, and persisted account and crop-listing state.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;
