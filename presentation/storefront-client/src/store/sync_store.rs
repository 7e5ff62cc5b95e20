use std::future::Future;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::cache::StoreCache;
use super::commands::{
    ADD_TO_CART, CHECKOUT, CLEAR_CART, REMOVE_FROM_CART, StoreCommand, TOGGLE_FAVORITE,
    UPDATE_QUANTITY,
};
use super::notice::{Notice, Notifier};
use crate::auth::AuthSession;
use crate::error::{ApiError, StoreError};
use crate::models::{CartItem, CreateOrderRequest, Order, Product};
use crate::services::cart::CartGateway;
use crate::services::favorites::FavoritesGateway;
use crate::services::orders::OrderGateway;

/// Cart and favorites of the signed-in user, kept in sync with the API.
///
/// Reads are served from the cache and fetched only when the entry is
/// missing. Every mutation runs as a [`StoreCommand`] whose declared keys are
/// invalidated (or emptied) once the server accepts it. The cache belongs to
/// one uid at a time and is dropped whenever the session's user changes.
pub struct SyncStore {
    cart_gateway: Arc<dyn CartGateway>,
    favorites_gateway: Arc<dyn FavoritesGateway>,
    order_gateway: Arc<dyn OrderGateway>,
    session: Arc<dyn AuthSession>,
    notifier: Arc<dyn Notifier>,
    cache: StoreCache,
    owner: Mutex<Option<String>>,
}

impl SyncStore {
    pub fn new(
        cart_gateway: Arc<dyn CartGateway>,
        favorites_gateway: Arc<dyn FavoritesGateway>,
        order_gateway: Arc<dyn OrderGateway>,
        session: Arc<dyn AuthSession>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cart_gateway,
            favorites_gateway,
            order_gateway,
            session,
            notifier,
            cache: StoreCache::new(),
            owner: Mutex::new(None),
        }
    }

    pub async fn cart(&self) -> Vec<CartItem> {
        let Some(uid) = self.current_uid().await else {
            return Vec::new();
        };
        if let Some(items) = self.cache.cart().await {
            return items;
        }

        debug!(uid = %uid, "Fetching cart");
        match self.cart_gateway.get().await {
            Ok(items) => {
                if self.is_owned_by(&uid).await {
                    self.cache.put_cart(items.clone()).await;
                }
                items
            }
            Err(e) => {
                warn!(error = %e, "Failed to load cart");
                self.notifier
                    .notify(Notice::error("Não foi possível carregar o carrinho."));
                Vec::new()
            }
        }
    }

    pub async fn favorites(&self) -> Vec<Product> {
        let Some(uid) = self.current_uid().await else {
            return Vec::new();
        };
        if let Some(products) = self.cache.favorites().await {
            return products;
        }

        debug!(uid = %uid, "Fetching favorites");
        match self.favorites_gateway.list().await {
            Ok(products) => {
                if self.is_owned_by(&uid).await {
                    self.cache.put_favorites(products.clone()).await;
                }
                products
            }
            Err(e) => {
                warn!(error = %e, "Failed to load favorites");
                self.notifier
                    .notify(Notice::error("Não foi possível carregar os favoritos."));
                Vec::new()
            }
        }
    }

    pub async fn add_to_cart(
        &self,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<CartItem, StoreError> {
        self.run(&ADD_TO_CART, || self.cart_gateway.add(product_id, quantity))
            .await
    }

    pub async fn remove_from_cart(&self, item_id: Uuid) -> Result<(), StoreError> {
        self.run(&REMOVE_FROM_CART, || self.cart_gateway.remove(item_id))
            .await
    }

    /// A quantity of zero or less removes the line.
    pub async fn update_quantity(&self, item_id: Uuid, quantity: i64) -> Result<(), StoreError> {
        let quantity = match u32::try_from(quantity) {
            Ok(q) if q > 0 => q,
            _ => return self.remove_from_cart(item_id).await,
        };
        self.run(&UPDATE_QUANTITY, || async move {
            self.cart_gateway.update(item_id, quantity).await.map(|_| ())
        })
        .await
    }

    pub async fn clear_cart(&self) -> Result<(), StoreError> {
        self.run(&CLEAR_CART, || self.cart_gateway.clear()).await
    }

    /// Adds or removes `product_id` based on the last fetched favorites.
    /// Returns whether the product is a favorite afterwards.
    pub async fn toggle_favorite(&self, product_id: Uuid) -> Result<bool, StoreError> {
        let was_favorite = self.is_favorite(product_id).await;
        self.run(&TOGGLE_FAVORITE, || async move {
            if was_favorite {
                self.favorites_gateway.remove(product_id).await.map(|_| false)
            } else {
                self.favorites_gateway.add(product_id).await.map(|_| true)
            }
        })
        .await
    }

    pub async fn is_favorite(&self, product_id: Uuid) -> bool {
        if self.current_uid().await.is_none() {
            return false;
        }
        self.cache
            .favorites()
            .await
            .is_some_and(|products| products.iter().any(|p| p.id == product_id))
    }

    /// Σ price × quantity over the last fetched cart; never fetches.
    pub async fn cart_total(&self) -> Decimal {
        if self.current_uid().await.is_none() {
            return Decimal::ZERO;
        }
        self.cache
            .cart()
            .await
            .unwrap_or_default()
            .iter()
            .map(CartItem::line_total)
            .sum()
    }

    /// Places the order, then clears the cart.
    pub async fn checkout(&self, request: CreateOrderRequest) -> Result<Order, StoreError> {
        let order = self
            .run(&CHECKOUT, || self.order_gateway.create(request))
            .await?;

        if let Err(e) = self.clear_cart().await {
            warn!(order_id = %order.id, error = %e, "Order placed but cart was not cleared");
        }
        Ok(order)
    }

    /// Forgets everything cached for the previous user.
    pub async fn reset(&self) {
        self.cache.invalidate_all();
        *self.owner.lock().await = None;
    }

    /// Signed-in uid; drops the cache when it differs from the cache's owner.
    async fn current_uid(&self) -> Option<String> {
        let uid = self.session.current_user().await.map(|user| user.uid);
        let mut owner = self.owner.lock().await;
        if *owner != uid {
            if owner.is_some() {
                info!(
                    previous = ?owner.as_deref(),
                    current = ?uid.as_deref(),
                    "Session user changed; dropping cached collections"
                );
            }
            self.cache.invalidate_all();
            *owner = uid.clone();
        }
        uid
    }

    async fn is_owned_by(&self, uid: &str) -> bool {
        self.owner.lock().await.as_deref() == Some(uid)
    }

    async fn run<T, F, Fut>(&self, command: &StoreCommand, operation: F) -> Result<T, StoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if self.current_uid().await.is_none() {
            debug!(command = command.name, "Rejected: not signed in");
            self.notifier.notify(Notice::error(command.login_required));
            return Err(StoreError::Unauthenticated);
        }

        match operation().await {
            Ok(value) => {
                command.apply(&self.cache).await;
                if let Some((level, message)) = command.success_notice {
                    self.notifier.notify(Notice::new(level, message));
                }
                Ok(value)
            }
            Err(e) => {
                warn!(command = command.name, error = %e, "Store command failed");
                self.notifier.notify(Notice::error(command.failure_message));
                Err(e.into())
            }
        }
    }
}
