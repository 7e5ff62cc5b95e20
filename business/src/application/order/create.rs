use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order, OrderItem};
use crate::domain::order::pricing::ShippingPolicy;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use crate::domain::product::repository::ProductRepository;

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub shipping_policy: ShippingPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Creating order with {} lines for user {}",
            params.items.len(),
            params.user_id
        ));

        // Cheap checks first so invalid requests never hit the catalog
        if params.items.is_empty() {
            return Err(OrderError::ItemsEmpty);
        }
        if params.items.iter().any(|line| line.quantity == 0) {
            return Err(OrderError::QuantityNotPositive);
        }
        if !params.shipping_address.is_complete() {
            return Err(OrderError::ShippingAddressIncomplete);
        }

        let mut items = Vec::with_capacity(params.items.len());
        for line in &params.items {
            let product = self
                .product_repository
                .get_by_id(line.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => OrderError::ProductNotFound,
                    other => OrderError::Repository(other),
                })?;

            if !product.can_supply(line.quantity) {
                self.logger.warn(&format!(
                    "Product {} cannot supply {} units",
                    product.id, line.quantity
                ));
                return Err(OrderError::ProductOutOfStock);
            }

            items.push(OrderItem::snapshot(&product, line.quantity)?);
        }

        let order = Order::new(
            NewOrderProps {
                user_id: params.user_id,
                items,
                shipping_address: params.shipping_address,
                billing_address: params.billing_address,
                payment_method: params.payment_method,
                notes: params.notes,
            },
            &self.shipping_policy,
        )?;

        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order created with id: {} (total {})",
            order.id, order.total
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::use_cases::create::OrderLineRequest;
    use crate::domain::order::value_objects::{Address, OrderStatus, PaymentMethod};
    use crate::domain::product::model::{Product, ProductProps};
    use crate::domain::product::value_objects::ProductSearchCriteria;
    use crate::domain::shared::pagination::{Page, PageRequest};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn search(
                &self,
                criteria: &ProductSearchCriteria,
                page: PageRequest,
            ) -> Result<Page<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn address() -> Address {
        Address {
            street: "Rua das Flores".to_string(),
            number: "123".to_string(),
            complement: None,
            neighborhood: "Centro".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01234-567".to_string(),
            country: "Brasil".to_string(),
        }
    }

    fn product(price: &str, stock: Option<u32>) -> Product {
        Product::new(ProductProps {
            name: "Bong de Vidro Premium".to_string(),
            price: Decimal::from_str(price).unwrap(),
            original_price: None,
            image: "/images/bong-premium.jpg".to_string(),
            images: vec![],
            category: "bongs".to_string(),
            description: String::new(),
            rating: 4.8,
            review_count: 24,
            in_stock: true,
            stock,
            is_best_seller: true,
            is_new: false,
            features: vec![],
            tags: vec![],
        })
        .unwrap()
    }

    fn params(items: Vec<OrderLineRequest>) -> CreateOrderParams {
        CreateOrderParams {
            user_id: UserId::new("uid-1"),
            items,
            shipping_address: address(),
            billing_address: None,
            payment_method: PaymentMethod::Pix,
            notes: Some("Entregar na portaria".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_pending_order_from_catalog_snapshot() {
        let catalog = product("100.00", Some(5));
        let product_id = catalog.id;

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(catalog.clone()));
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            shipping_policy: ShippingPolicy::default(),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(params(vec![OrderLineRequest {
                product_id,
                quantity: 2,
            }]))
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].name, "Bong de Vidro Premium");
        assert_eq!(order.subtotal, Decimal::from_str("200.00").unwrap());
        assert_eq!(order.shipping, Decimal::ZERO);
        assert_eq!(order.total, Decimal::from_str("200.00").unwrap());
    }

    #[tokio::test]
    async fn should_apply_configured_policy() {
        let catalog = product("50.00", None);

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(catalog.clone()));
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            shipping_policy: ShippingPolicy {
                free_shipping_threshold: Decimal::from(500),
                flat_fee: Decimal::from_str("19.90").unwrap(),
                tax_rate: Decimal::from_str("0.10").unwrap(),
            },
            logger: mock_logger(),
        };

        let order = use_case
            .execute(params(vec![OrderLineRequest {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }]))
            .await
            .unwrap();

        assert_eq!(order.shipping, Decimal::from_str("19.90").unwrap());
        assert_eq!(order.tax, Decimal::from_str("5.00").unwrap());
        assert_eq!(order.total, Decimal::from_str("74.90").unwrap());
    }

    #[tokio::test]
    async fn should_reject_empty_order_without_lookups() {
        let mut mock_products = MockProductRepo::new();
        mock_products.expect_get_by_id().never();
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            shipping_policy: ShippingPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(vec![])).await;

        assert!(matches!(result, Err(OrderError::ItemsEmpty)));
    }

    #[tokio::test]
    async fn should_reject_incomplete_shipping_address() {
        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            shipping_policy: ShippingPolicy::default(),
            logger: mock_logger(),
        };

        let mut request = params(vec![OrderLineRequest {
            product_id: Uuid::new_v4(),
            quantity: 1,
        }]);
        request.shipping_address.street = String::new();

        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(OrderError::ShippingAddressIncomplete)));
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            shipping_policy: ShippingPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(vec![OrderLineRequest {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }]))
            .await;

        assert!(matches!(result, Err(OrderError::ProductNotFound)));
    }

    #[tokio::test]
    async fn should_reject_sold_out_product() {
        let catalog = product("10.00", Some(0));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(catalog.clone()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            product_repository: Arc::new(mock_products),
            shipping_policy: ShippingPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(vec![OrderLineRequest {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }]))
            .await;

        assert!(matches!(result, Err(OrderError::ProductOutOfStock)));
    }
}
