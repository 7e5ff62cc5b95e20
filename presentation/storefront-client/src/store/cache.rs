use std::time::Duration;

use moka::future::Cache;

use crate::models::{CartItem, Product};

/// Collections the store keeps for the signed-in user.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum QueryKey {
    Cart,
    Favorites,
}

#[derive(Debug, Clone)]
pub enum CachedValue {
    Cart(Vec<CartItem>),
    Favorites(Vec<Product>),
}

impl CachedValue {
    fn empty(key: QueryKey) -> Self {
        match key {
            QueryKey::Cart => CachedValue::Cart(Vec::new()),
            QueryKey::Favorites => CachedValue::Favorites(Vec::new()),
        }
    }
}

/// Read-through cache of the last fetched collections.
///
/// Entries live until invalidated by a store command or for 5 minutes.
pub struct StoreCache {
    inner: Cache<QueryKey, CachedValue>,
}

impl StoreCache {
    pub fn new() -> Self {
        let inner = Cache::builder()
            .max_capacity(16)
            .time_to_live(Duration::from_secs(300))
            .build();
        Self { inner }
    }

    pub async fn cart(&self) -> Option<Vec<CartItem>> {
        match self.inner.get(&QueryKey::Cart).await {
            Some(CachedValue::Cart(items)) => Some(items),
            _ => None,
        }
    }

    pub async fn favorites(&self) -> Option<Vec<Product>> {
        match self.inner.get(&QueryKey::Favorites).await {
            Some(CachedValue::Favorites(products)) => Some(products),
            _ => None,
        }
    }

    pub async fn put_cart(&self, items: Vec<CartItem>) {
        self.inner.insert(QueryKey::Cart, CachedValue::Cart(items)).await;
    }

    pub async fn put_favorites(&self, products: Vec<Product>) {
        self.inner
            .insert(QueryKey::Favorites, CachedValue::Favorites(products))
            .await;
    }

    pub async fn invalidate(&self, key: QueryKey) {
        self.inner.invalidate(&key).await;
    }

    pub async fn set_empty(&self, key: QueryKey) {
        self.inner.insert(key, CachedValue::empty(key)).await;
    }

    /// Drops everything, e.g. after sign-out.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

impl Default for StoreCache {
    fn default() -> Self {
        Self::new()
    }
}
