use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Fetching order by id: {}", params.id));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        // Someone else's order is reported as missing
        if !params.is_admin && !order.is_owned_by(&params.requester) {
            self.logger.warn(&format!(
                "User {} requested order {} owned by another user",
                params.requester, order.id
            ));
            return Err(OrderError::NotFound);
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::{NewOrderProps, OrderItem};
    use crate::domain::order::pricing::ShippingPolicy;
    use crate::domain::order::value_objects::{Address, PaymentMethod};
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

    fn order_for(user: &str) -> Order {
        let item = OrderItem {
            product_id: Uuid::new_v4(),
            name: "Bong de Vidro Premium".to_string(),
            image: "/images/bong-premium.jpg".to_string(),
            quantity: 1,
            unit_price: Decimal::from_str("299.99").unwrap(),
            total: Decimal::from_str("299.99").unwrap(),
        };
        Order::new(
            NewOrderProps {
                user_id: UserId::new(user),
                items: vec![item],
                shipping_address: address(),
                billing_address: None,
                payment_method: PaymentMethod::CreditCard,
                notes: None,
            },
            &ShippingPolicy::default(),
        )
        .unwrap()
    }

    fn use_case_with(order: Order) -> GetOrderByIdUseCaseImpl {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order.clone()));
        GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_order_to_its_owner() {
        let order = order_for("uid-1");
        let id = order.id;

        let found = use_case_with(order)
            .execute(GetOrderByIdParams {
                id,
                requester: UserId::new("uid-1"),
                is_admin: false,
            })
            .await
            .unwrap();

        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn should_hide_order_from_other_users() {
        let order = order_for("uid-1");
        let id = order.id;

        let result = use_case_with(order)
            .execute(GetOrderByIdParams {
                id,
                requester: UserId::new("uid-2"),
                is_admin: false,
            })
            .await;

        assert!(matches!(result, Err(OrderError::NotFound)));
    }

    #[tokio::test]
    async fn should_let_admin_read_any_order() {
        let order = order_for("uid-1");
        let id = order.id;

        let result = use_case_with(order)
            .execute(GetOrderByIdParams {
                id,
                requester: UserId::new("admin-uid"),
                is_admin: true,
            })
            .await;

        assert!(result.is_ok());
    }
}
