use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, SignupRequest},
        cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
        listings::{CreateListingRequest, ListingList, MarkSoldRequest},
        products::{CategoryInfo, CategoryList, ProductDetail, ProductList},
        profile::{ListingStats, ProfileView, UpdateProfileRequest},
    },
    models::{CartLine, Category, CropListing, ListingStatus, Product, User},
    response::{ApiResponse, Meta},
    routes::{auth, cart, categories, health, listings, params, products, profile},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        categories::list_categories,
        categories::list_category_products,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        auth::signup,
        auth::login,
        auth::logout,
        listings::my_listings,
        listings::create_listing,
        listings::delete_listing,
        listings::mark_sold,
        profile::get_profile,
        profile::update_profile
    ),
    components(
        schemas(
            Category,
            Product,
            CartLine,
            User,
            ListingStatus,
            CropListing,
            CategoryInfo,
            CategoryList,
            ProductDetail,
            ProductList,
            CartSummary,
            AddToCartRequest,
            UpdateQuantityRequest,
            SignupRequest,
            LoginRequest,
            CreateListingRequest,
            MarkSoldRequest,
            ListingList,
            ListingStats,
            ProfileView,
            UpdateProfileRequest,
            params::ProductQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartSummary>,
            ApiResponse<CropListing>,
            ApiResponse<ProfileView>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog browsing and search"),
        (name = "Cart", description = "Session shopping cart"),
        (name = "Auth", description = "Sign up, log in, log out"),
        (name = "Listings", description = "Crop listings of the signed-in seller"),
        (name = "Profile", description = "Profile dashboard"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
