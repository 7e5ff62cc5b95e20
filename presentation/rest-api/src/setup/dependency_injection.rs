use std::sync::Arc;

use sqlx::PgPool;

use logger::tracing_logger::TracingLogger;
use persistence::cart::memory::CartRepositoryInMemory;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::category::memory::CategoryRepositoryInMemory;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::favorite::memory::FavoriteRepositoryInMemory;
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::order::memory::OrderRepositoryInMemory;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::seed;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::sync::SyncCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_slug::GetCategoryBySlugUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::get_all::GetFavoritesUseCaseImpl;
use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::get_user_orders::GetUserOrdersUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::cart::repository::CartRepository;
use business::domain::category::repository::CategoryRepository;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::logger::Logger;
use business::domain::order::pricing::ShippingPolicy;
use business::domain::order::repository::OrderRepository;
use business::domain::product::repository::ProductRepository;

use crate::api::cart::routes::CartApi;
use crate::api::category::routes::CategoryApi;
use crate::api::favorite::routes::FavoriteApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::api::security::TokenVerifier;

/// Repository adapters behind the domain ports.
pub struct Repositories {
    pub storage: &'static str,
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub cart: Arc<dyn CartRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
}

impl Repositories {
    /// In-memory store seeded with the mock catalog.
    pub fn in_memory() -> Self {
        Self {
            storage: "memory",
            products: Arc::new(ProductRepositoryInMemory::new(seed::products())),
            categories: Arc::new(CategoryRepositoryInMemory::new(seed::categories())),
            cart: Arc::new(CartRepositoryInMemory::new()),
            orders: Arc::new(OrderRepositoryInMemory::new()),
            favorites: Arc::new(FavoriteRepositoryInMemory::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            storage: "postgres",
            products: Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            categories: Arc::new(CategoryRepositoryPostgres::new(pool.clone())),
            cart: Arc::new(CartRepositoryPostgres::new(pool.clone())),
            orders: Arc::new(OrderRepositoryPostgres::new(pool.clone())),
            favorites: Arc::new(FavoriteRepositoryPostgres::new(pool)),
        }
    }
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub cart_api: CartApi,
    pub favorite_api: FavoriteApi,
    pub order_api: OrderApi,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl DependencyContainer {
    pub fn new(
        repositories: Repositories,
        shipping_policy: ShippingPolicy,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let Repositories {
            storage,
            products,
            categories,
            cart,
            orders,
            favorites,
        } = repositories;

        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: products.clone(),
                category_repository: categories.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductsByCategoryUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SearchProductsUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: products.clone(),
                category_repository: categories.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
        );

        let category_api = CategoryApi::new(
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: categories.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryBySlugUseCaseImpl {
                repository: categories.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreateCategoryUseCaseImpl {
                repository: categories.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: categories.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: categories,
                logger: logger.clone(),
            }),
        );

        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                repository: cart.clone(),
                product_repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                repository: cart.clone(),
                product_repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCartItemQuantityUseCaseImpl {
                repository: cart.clone(),
                product_repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl {
                repository: cart.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SyncCartUseCaseImpl {
                repository: cart,
                product_repository: products.clone(),
                logger: logger.clone(),
            }),
        );

        let favorite_api = FavoriteApi::new(
            Arc::new(GetFavoritesUseCaseImpl {
                repository: favorites.clone(),
                product_repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddFavoriteUseCaseImpl {
                repository: favorites.clone(),
                product_repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveFavoriteUseCaseImpl {
                repository: favorites,
                logger: logger.clone(),
            }),
        );

        let order_api = OrderApi::new(
            Arc::new(CreateOrderUseCaseImpl {
                repository: orders.clone(),
                product_repository: products,
                shipping_policy,
                logger: logger.clone(),
            }),
            Arc::new(GetUserOrdersUseCaseImpl {
                repository: orders.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetOrderByIdUseCaseImpl {
                repository: orders.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateOrderStatusUseCaseImpl {
                repository: orders,
                logger,
            }),
        );

        Self {
            health_api: HealthApi::new(storage),
            product_api,
            category_api,
            cart_api,
            favorite_api,
            order_api,
            token_verifier,
        }
    }
}
