use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::get_user_orders::{
    GetUserOrdersParams, GetUserOrdersUseCase,
};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::envelope::Envelope;
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::order::dto::{CreateOrderRequest, OrderResponse, UpdateOrderStatusRequest};
use crate::api::security::{FirebaseBearer, require_admin};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
    get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateOrderUseCase>,
        get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_user_orders_use_case,
            get_by_id_use_case,
            update_status_use_case,
        }
    }
}

/// Orders and checkout
#[OpenApi]
impl OrderApi {
    /// Create an order
    ///
    /// Line prices, names and images are snapshotted from the catalog;
    /// totals follow the configured shipping policy.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create_order(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateOrderRequest>,
    ) -> OrderResult {
        let body = body.0;
        let params = CreateOrderParams {
            user_id: auth.0.user_id(),
            items: body.items.into_iter().map(|l| l.into()).collect(),
            shipping_address: body.shipping_address.into(),
            billing_address: body.billing_address.map(|a| a.into()),
            payment_method: body.payment_method.into(),
            notes: body.notes,
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => OrderResult::Created(Json(Envelope::with_message(
                order.into(),
                "Order created",
            ))),
            Err(err) => OrderResult::from_error(err),
        }
    }

    /// List the current user's orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_user_orders(&self, auth: FirebaseBearer) -> OrderListResponse {
        match self
            .get_user_orders_use_case
            .execute(GetUserOrdersParams {
                user_id: auth.0.user_id(),
            })
            .await
        {
            Ok(orders) => OrderListResponse::Ok(Json(Envelope::ok(
                orders.into_iter().map(|o| o.into()).collect(),
            ))),
            Err(err) => OrderListResponse::from_error(err),
        }
    }

    /// Get an order by ID
    ///
    /// Visible to its owner and to administrators.
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: FirebaseBearer, id: Path<String>) -> OrderResult {
        let uuid = match parse_id(&id.0, "order.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return OrderResult::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id: uuid,
                requester: auth.0.user_id(),
                is_admin: auth.0.is_admin,
            })
            .await
        {
            Ok(order) => OrderResult::Ok(Json(Envelope::ok(order.into()))),
            Err(err) => OrderResult::from_error(err),
        }
    }

    /// Update an order's status
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_order_status(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> OrderResult {
        if let Err(json) = require_admin(&auth) {
            return OrderResult::Forbidden(json);
        }
        let uuid = match parse_id(&id.0, "order.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return OrderResult::BadRequest(json),
        };

        let params = UpdateOrderStatusParams {
            id: uuid,
            status: body.0.status.into(),
            tracking_number: body.0.tracking_number,
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => OrderResult::Ok(Json(Envelope::with_message(
                order.into(),
                "Order status updated",
            ))),
            Err(err) => OrderResult::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderListResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<OrderResponse>>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl OrderListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => OrderListResponse::BadRequest(json),
            404 => OrderListResponse::NotFound(json),
            _ => OrderListResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderResult {
    #[oai(status = 200)]
    Ok(Json<Envelope<OrderResponse>>),
    #[oai(status = 201)]
    Created(Json<Envelope<OrderResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl OrderResult {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => OrderResult::BadRequest(json),
            404 => OrderResult::NotFound(json),
            _ => OrderResult::InternalError(json),
        }
    }
}
