use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::sync::{SyncCartParams, SyncCartUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};

use crate::api::cart::dto::{
    AddCartItemRequest, CartItemResponse, SyncCartRequest, UpdateCartItemRequest,
};
use crate::api::envelope::{Envelope, MessageEnvelope};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    sync_use_case: Arc<dyn SyncCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        sync_use_case: Arc<dyn SyncCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            sync_use_case,
        }
    }
}

/// Shopping cart of the authenticated user
#[OpenApi]
impl CartApi {
    /// Get the current user's cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: FirebaseBearer) -> CartListResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                user_id: auth.0.user_id(),
            })
            .await
        {
            Ok(items) => CartListResponse::Ok(Json(Envelope::ok(
                items.into_iter().map(|i| i.into()).collect(),
            ))),
            Err(err) => CartListResponse::from_error(err),
        }
    }

    /// Add a product to the cart
    ///
    /// Adding a product that is already in the cart increases that line's quantity.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_cart_item(
        &self,
        auth: FirebaseBearer,
        body: Json<AddCartItemRequest>,
    ) -> CartItemResult {
        let params = AddCartItemParams {
            user_id: auth.0.user_id(),
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => CartItemResult::Created(Json(Envelope::with_message(
                item.into(),
                "Item added to cart",
            ))),
            Err(err) => CartItemResult::from_error(err),
        }
    }

    /// Replace the whole cart
    #[oai(path = "/cart", method = "put", tag = "ApiTags::Cart")]
    async fn sync_cart(&self, auth: FirebaseBearer, body: Json<SyncCartRequest>) -> CartListResponse {
        let params = SyncCartParams {
            user_id: auth.0.user_id(),
            items: body.0.items.into_iter().map(|l| l.into()).collect(),
        };

        match self.sync_use_case.execute(params).await {
            Ok(items) => CartListResponse::Ok(Json(Envelope::with_message(
                items.into_iter().map(|i| i.into()).collect(),
                "Cart synchronized",
            ))),
            Err(err) => CartListResponse::from_error(err),
        }
    }

    /// Clear the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: FirebaseBearer) -> CartMessageResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: auth.0.user_id(),
            })
            .await
        {
            Ok(()) => CartMessageResponse::Ok(Json(MessageEnvelope::new("Cart cleared"))),
            Err(err) => CartMessageResponse::from_error(err),
        }
    }

    /// Set the quantity of a cart line
    #[oai(path = "/cart/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_cart_item(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartItemResult {
        let uuid = match parse_id(&id.0, "cart.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return CartItemResult::BadRequest(json),
        };

        let params = UpdateCartItemQuantityParams {
            id: uuid,
            user_id: auth.0.user_id(),
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(item) => CartItemResult::Ok(Json(Envelope::ok(item.into()))),
            Err(err) => CartItemResult::from_error(err),
        }
    }

    /// Remove a line from the cart
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_cart_item(&self, auth: FirebaseBearer, id: Path<String>) -> CartMessageResponse {
        let uuid = match parse_id(&id.0, "cart.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return CartMessageResponse::BadRequest(json),
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                id: uuid,
                user_id: auth.0.user_id(),
            })
            .await
        {
            Ok(()) => CartMessageResponse::Ok(Json(MessageEnvelope::new("Item removed from cart"))),
            Err(err) => CartMessageResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartListResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<CartItemResponse>>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartListResponse::BadRequest(json),
            404 => CartListResponse::NotFound(json),
            _ => CartListResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartItemResult {
    #[oai(status = 200)]
    Ok(Json<Envelope<CartItemResponse>>),
    #[oai(status = 201)]
    Created(Json<Envelope<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartItemResult {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartItemResult::BadRequest(json),
            404 => CartItemResult::NotFound(json),
            _ => CartItemResult::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMessageResponse {
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMessageResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartMessageResponse::BadRequest(json),
            404 => CartMessageResponse::NotFound(json),
            _ => CartMessageResponse::InternalError(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use business::domain::cart::errors::CartError;

    use super::*;

    #[test]
    fn should_map_list_not_found_to_404() {
        match CartListResponse::from_error(CartError::NotFound) {
            CartListResponse::NotFound(json) => assert_eq!(json.0.name, "NotFound"),
            _ => panic!("expected a 404 response"),
        }
        assert!(matches!(
            CartListResponse::from_error(CartError::QuantityNotPositive),
            CartListResponse::BadRequest(_)
        ));
    }
}
