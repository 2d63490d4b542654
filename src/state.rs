use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    cart::Cart,
    catalog::Catalog,
    models::{CropListing, User},
    store::{CROP_LISTINGS_KEY, CURRENT_USER_KEY, KeyValueStore, PersistentState},
};

/// Shared context handed to every handler. The cart is per process and is
/// not persisted; the current user and listings are.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cart: Arc<Mutex<Cart>>,
    pub current_user: Arc<PersistentState<Option<User>>>,
    pub listings: Arc<PersistentState<Vec<CropListing>>>,
}

impl AppState {
    pub async fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let current_user =
            PersistentState::<Option<User>>::load(store.clone(), CURRENT_USER_KEY, None).await;
        let listings =
            PersistentState::<Vec<CropListing>>::load(store, CROP_LISTINGS_KEY, Vec::new()).await;
        Self {
            catalog: Arc::new(Catalog::seeded()),
            cart: Arc::new(Mutex::new(Cart::new())),
            current_user: Arc::new(current_user),
            listings: Arc::new(listings),
        }
    }
}
