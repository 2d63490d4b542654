use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use agri_storefront::{
    dto::{
        auth::{LoginRequest, SignupRequest},
        cart::{AddToCartRequest, UpdateQuantityRequest},
        listings::{CreateListingRequest, MarkSoldRequest},
        profile::UpdateProfileRequest,
    },
    error::AppError,
    middleware::auth::require_user,
    models::{ListingStatus, User},
    routes::{cart as cart_routes, params::ProductQuery},
    services::{auth_service, cart_service, listing_service, product_service, profile_service},
    state::AppState,
    store::{CROP_LISTINGS_KEY, CURRENT_USER_KEY, KeyValueStore, MemoryStore, StoreError},
};
use async_trait::async_trait;
use axum::extract::State;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Memory store that counts writes and can be told to fail writes to the
/// listings key.
#[derive(Default)]
struct RecordingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    fail_listings: AtomicBool,
}

impl RecordingStore {
    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    fn backend(&self) -> &'static str {
        "recording"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if key == CROP_LISTINGS_KEY && self.fail_listings.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key).await
    }
}

async fn fresh_state() -> (AppState, Arc<dyn KeyValueStore>) {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    (AppState::new(store.clone()).await, store)
}

async fn sign_up(state: &AppState) -> User {
    auth_service::signup(
        state,
        SignupRequest {
            name: "Ravi Kumar".into(),
            email: "ravi@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        },
    )
    .await
    .expect("signup")
    .data
    .expect("user")
}

fn listing_form(name: &str, quantity: u32, price: i64, photos: usize) -> CreateListingRequest {
    CreateListingRequest {
        name: name.into(),
        description: "Fresh from the field".into(),
        category: "Vegetables".into(),
        quantity,
        price: Decimal::from(price),
        harvest_date: NaiveDate::from_ymd_opt(2026, 10, 1).expect("date"),
        quality: None,
        location: "Pune".into(),
        photos: (0..photos).map(|i| format!("photo-{i}.jpg")).collect(),
    }
}

#[tokio::test]
async fn cart_flow_through_services() -> anyhow::Result<()> {
    let (state, _) = fresh_state().await;

    cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: "2".into(),
            quantity: 2,
        },
    )
    .await?;
    let summary = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: "2".into(),
            quantity: 1,
        },
    )
    .await?
    .data
    .expect("cart");
    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.subtotal, Decimal::new(4647, 2));

    let updated = cart_service::update_quantity(&state, "2", UpdateQuantityRequest { quantity: 1 })
        .await?
        .data
        .expect("cart");
    assert_eq!(updated.subtotal, Decimal::new(1549, 2));

    let removed = cart_service::remove_from_cart(&state, "does-not-exist")
        .await?
        .data
        .expect("cart");
    assert_eq!(removed.total_items, 1);

    let emptied = cart_service::clear_cart(&state).await?.data.expect("cart");
    assert!(emptied.items.is_empty());
    assert_eq!(emptied.subtotal, Decimal::ZERO);
    Ok(())
}

#[tokio::test]
async fn cart_rejects_bad_input() {
    let (state, _) = fresh_state().await;

    let zero = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: "1".into(),
            quantity: 0,
        },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    let unknown = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: "999".into(),
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    let missing_line =
        cart_service::update_quantity(&state, "1", UpdateQuantityRequest { quantity: 3 }).await;
    assert!(matches!(missing_line, Err(AppError::NotFound)));

    let below_floor =
        cart_service::update_quantity(&state, "1", UpdateQuantityRequest { quantity: -1 }).await;
    assert!(matches!(below_floor, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn cart_handler_reads_shared_state() -> anyhow::Result<()> {
    let (state, _) = fresh_state().await;
    state
        .cart
        .lock()
        .await
        .add_to_cart(state.catalog.find("4").cloned().expect("product"), 2);

    let response = cart_routes::cart_list(State(state.clone())).await?;
    let summary = response.0.data.expect("cart");
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.subtotal, Decimal::new(1198, 2));
    Ok(())
}

#[tokio::test]
async fn product_queries() -> anyhow::Result<()> {
    let (state, _) = fresh_state().await;

    let searched = product_service::list_products(
        &state,
        ProductQuery {
            search: Some("seeds".into()),
            in_stock: Some(true),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(searched.meta.and_then(|m| m.total), Some(4));

    let bad_range = product_service::list_products(
        &state,
        ProductQuery {
            min_price: Some(Decimal::from(20)),
            max_price: Some(Decimal::from(10)),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(bad_range, Err(AppError::BadRequest(_))));

    let category =
        product_service::list_category_products(&state, "Fertilizers", ProductQuery::default())
            .await?;
    assert_eq!(category.message, "Fertilizers");
    assert_eq!(category.data.expect("products").items.len(), 3);

    let categories = product_service::list_categories().await?.data.expect("categories");
    assert_eq!(categories.items.len(), 5);
    assert_eq!(categories.items[0].title, "Seeds");

    let detail = product_service::get_product(&state, "5").await?.data.expect("detail");
    assert_eq!(detail.product.name, "Insecticide for Fruit Trees");
    assert_eq!(detail.related.len(), 1);

    assert!(matches!(
        product_service::get_product(&state, "nope").await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn signup_validates_and_persists_user() -> anyhow::Result<()> {
    let (state, store) = fresh_state().await;

    let mismatch = auth_service::signup(
        &state,
        SignupRequest {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        },
    )
    .await;
    match mismatch {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Passwords don't match"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.get(CURRENT_USER_KEY).await?.is_none());

    let user = sign_up(&state).await;
    let reloaded = AppState::new(store).await;
    assert_eq!(reloaded.current_user.get().await, Some(user));
    Ok(())
}

#[tokio::test]
async fn login_reuses_matching_user_and_logout_clears_it() -> anyhow::Result<()> {
    let (state, _) = fresh_state().await;
    let user = sign_up(&state).await;

    let same = auth_service::login(
        &state,
        LoginRequest {
            email: "RAVI@example.com".into(),
            password: "whatever".into(),
        },
    )
    .await?
    .data
    .expect("user");
    assert_eq!(same.id, user.id);

    let other = auth_service::login(
        &state,
        LoginRequest {
            email: "meera@example.com".into(),
            password: "pw".into(),
        },
    )
    .await?
    .data
    .expect("user");
    assert_ne!(other.id, user.id);
    assert_eq!(other.name, "meera");

    auth_service::logout(&state).await?;
    assert!(matches!(require_user(&state).await, Err(AppError::Unauthorized)));

    let invalid = auth_service::login(
        &state,
        LoginRequest {
            email: "not-an-email".into(),
            password: "pw".into(),
        },
    )
    .await;
    assert!(matches!(invalid, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn listing_lifecycle_and_profile_stats() -> anyhow::Result<()> {
    let (state, store) = fresh_state().await;
    let user = sign_up(&state).await;

    let none = listing_service::create_listing(&state, &user, listing_form("Okra", 10, 3, 0)).await;
    assert!(matches!(none, Err(AppError::BadRequest(_))));
    let too_many =
        listing_service::create_listing(&state, &user, listing_form("Okra", 10, 3, 6)).await;
    assert!(matches!(too_many, Err(AppError::BadRequest(_))));

    let okra = listing_service::create_listing(&state, &user, listing_form("Okra", 10, 3, 2))
        .await?
        .data
        .expect("listing");
    assert_eq!(okra.quality, "Standard");
    assert_eq!(okra.status, ListingStatus::Active);
    assert_eq!(okra.seller_name, "Ravi Kumar");

    let chilli = listing_service::create_listing(&state, &user, listing_form("Chilli", 4, 6, 1))
        .await?
        .data
        .expect("listing");

    let profile = profile_service::get_profile(&state, user.clone())
        .await?
        .data
        .expect("profile");
    assert_eq!(profile.stats.total_listings, 2);
    assert_eq!(profile.stats.total_quantity, 14);
    assert_eq!(profile.stats.total_value, Decimal::from(54));
    assert_eq!(profile.stats.average_price, Decimal::new(450, 2));

    let sold = listing_service::mark_sold(&state, &user, chilli.id, MarkSoldRequest { sold_units: 4 })
        .await?
        .data
        .expect("listing");
    assert_eq!(sold.status, ListingStatus::Sold);
    assert_eq!(sold.revenue, Some(Decimal::from(24)));

    let again =
        listing_service::mark_sold(&state, &user, chilli.id, MarkSoldRequest { sold_units: 1 })
            .await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    listing_service::delete_listing(&state, &user, okra.id).await?;
    assert!(matches!(
        listing_service::delete_listing(&state, &user, okra.id).await,
        Err(AppError::NotFound)
    ));

    let raw = store.get(CROP_LISTINGS_KEY).await?.expect("persisted listings");
    assert!(raw.contains("Chilli"));
    assert!(!raw.contains("Okra"));
    Ok(())
}

#[tokio::test]
async fn profile_edit_renames_listings() -> anyhow::Result<()> {
    let (state, _) = fresh_state().await;
    let user = sign_up(&state).await;
    listing_service::create_listing(&state, &user, listing_form("Garlic", 5, 8, 1)).await?;

    let updated = profile_service::update_profile(
        &state,
        &user,
        UpdateProfileRequest {
            name: "Ravi K.".into(),
            email: "ravi.k@example.com".into(),
            phone: Some("  ".into()),
            address: Some("Village Road 4".into()),
        },
    )
    .await?
    .data
    .expect("user");
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.phone, None);
    assert_eq!(updated.address.as_deref(), Some("Village Road 4"));

    let listings = listing_service::listings_for(&state, &updated).await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].seller_name, "Ravi K.");

    let missing_name = profile_service::update_profile(
        &state,
        &updated,
        UpdateProfileRequest {
            name: "".into(),
            email: "ravi.k@example.com".into(),
            phone: None,
            address: None,
        },
    )
    .await;
    assert!(matches!(missing_name, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn oversized_listing_totals_are_rejected() -> anyhow::Result<()> {
    let (state, _) = fresh_state().await;
    let user = sign_up(&state).await;

    let mut form = listing_form("Saffron", 2, 1, 1);
    form.price = Decimal::MAX;
    let created = listing_service::create_listing(&state, &user, form).await;
    assert!(matches!(created, Err(AppError::BadRequest(_))));
    assert!(state.listings.get().await.is_empty());

    // A single unit at the maximum price is representable.
    let mut single = listing_form("Saffron", 1, 1, 1);
    single.price = Decimal::MAX;
    let saffron = listing_service::create_listing(&state, &user, single)
        .await?
        .data
        .expect("listing");

    let profile = profile_service::get_profile(&state, user.clone())
        .await?
        .data
        .expect("profile");
    assert_eq!(profile.stats.total_value, Decimal::MAX);

    // Stored data from before the check can still hold an unrepresentable value.
    state.listings.update(|all| all[0].quantity = 3).await?;
    let profile = profile_service::get_profile(&state, user.clone()).await;
    assert!(matches!(profile, Err(AppError::BadRequest(_))));

    let sold =
        listing_service::mark_sold(&state, &user, saffron.id, MarkSoldRequest { sold_units: 2 })
            .await;
    assert!(matches!(sold, Err(AppError::BadRequest(_))));
    let listings = state.listings.get().await;
    assert_eq!(listings[0].status, ListingStatus::Active);
    assert_eq!(listings[0].revenue, None);
    Ok(())
}

#[tokio::test]
async fn rejected_listing_changes_do_not_write() -> anyhow::Result<()> {
    let store = Arc::new(RecordingStore::default());
    let state = AppState::new(store.clone()).await;
    let user = sign_up(&state).await;
    let okra = listing_service::create_listing(&state, &user, listing_form("Okra", 10, 3, 1))
        .await?
        .data
        .expect("listing");
    let writes = store.writes();

    let missing = listing_service::delete_listing(&state, &user, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    let unknown =
        listing_service::mark_sold(&state, &user, Uuid::new_v4(), MarkSoldRequest { sold_units: 1 })
            .await;
    assert!(matches!(unknown, Err(AppError::NotFound)));

    let too_many =
        listing_service::mark_sold(&state, &user, okra.id, MarkSoldRequest { sold_units: 11 })
            .await;
    assert!(matches!(too_many, Err(AppError::BadRequest(_))));

    assert_eq!(store.writes(), writes);

    listing_service::delete_listing(&state, &user, okra.id).await?;
    assert_eq!(store.writes(), writes + 1);
    Ok(())
}

#[tokio::test]
async fn failed_listing_rename_keeps_profile_unchanged() -> anyhow::Result<()> {
    let store = Arc::new(RecordingStore::default());
    let state = AppState::new(store.clone()).await;
    let user = sign_up(&state).await;
    listing_service::create_listing(&state, &user, listing_form("Garlic", 5, 8, 1)).await?;

    store.fail_listings.store(true, Ordering::SeqCst);
    let result = profile_service::update_profile(
        &state,
        &user,
        UpdateProfileRequest {
            name: "Ravi K.".into(),
            email: "ravi.k@example.com".into(),
            phone: None,
            address: None,
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Store(_))));

    assert_eq!(state.current_user.get().await, Some(user.clone()));
    let raw = store.get(CURRENT_USER_KEY).await?.expect("persisted user");
    assert!(raw.contains("Ravi Kumar"));
    let listings = listing_service::listings_for(&state, &user).await;
    assert_eq!(listings[0].seller_name, "Ravi Kumar");
    Ok(())
}
