use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use business::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};

use crate::api::envelope::{Envelope, MessageEnvelope};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::favorite::dto::AddFavoriteRequest;
use crate::api::product::dto::ProductResponse;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    get_all_use_case: Arc<dyn GetFavoritesUseCase>,
    add_use_case: Arc<dyn AddFavoriteUseCase>,
    remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetFavoritesUseCase>,
        add_use_case: Arc<dyn AddFavoriteUseCase>,
        remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            add_use_case,
            remove_use_case,
        }
    }
}

#[OpenApi]
impl FavoriteApi {
    /// List the current user's favorite products
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_favorites(&self, auth: FirebaseBearer) -> FavoriteListResponse {
        match self
            .get_all_use_case
            .execute(GetFavoritesParams {
                user_id: auth.0.user_id(),
            })
            .await
        {
            Ok(products) => FavoriteListResponse::Ok(Json(Envelope::ok(
                products.into_iter().map(|p| p.into()).collect(),
            ))),
            Err(err) => FavoriteListResponse::from_error(err),
        }
    }

    /// Add a product to favorites
    ///
    /// Adding a product that is already a favorite succeeds without duplicating it.
    #[oai(path = "/favorites", method = "post", tag = "ApiTags::Favorites")]
    async fn add_favorite(
        &self,
        auth: FirebaseBearer,
        body: Json<AddFavoriteRequest>,
    ) -> AddFavoriteResponse {
        match self
            .add_use_case
            .execute(AddFavoriteParams {
                user_id: auth.0.user_id(),
                product_id: body.0.product_id,
            })
            .await
        {
            Ok(product) => AddFavoriteResponse::Created(Json(Envelope::with_message(
                product.into(),
                "Added to favorites",
            ))),
            Err(err) => AddFavoriteResponse::from_error(err),
        }
    }

    /// Remove a product from favorites
    #[oai(
        path = "/favorites/:product_id",
        method = "delete",
        tag = "ApiTags::Favorites"
    )]
    async fn remove_favorite(
        &self,
        auth: FirebaseBearer,
        product_id: Path<String>,
    ) -> RemoveFavoriteResponse {
        let uuid = match parse_id(&product_id.0, "favorite.invalid_product_id") {
            Ok(uuid) => uuid,
            Err(json) => return RemoveFavoriteResponse::BadRequest(json),
        };

        match self
            .remove_use_case
            .execute(RemoveFavoriteParams {
                user_id: auth.0.user_id(),
                product_id: uuid,
            })
            .await
        {
            Ok(()) => {
                RemoveFavoriteResponse::Ok(Json(MessageEnvelope::new("Removed from favorites")))
            }
            Err(err) => RemoveFavoriteResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FavoriteListResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<ProductResponse>>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FavoriteListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => FavoriteListResponse::BadRequest(json),
            404 => FavoriteListResponse::NotFound(json),
            _ => FavoriteListResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFavoriteResponse {
    #[oai(status = 201)]
    Created(Json<Envelope<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AddFavoriteResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => AddFavoriteResponse::BadRequest(json),
            404 => AddFavoriteResponse::NotFound(json),
            _ => AddFavoriteResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFavoriteResponse {
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl RemoveFavoriteResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => RemoveFavoriteResponse::BadRequest(json),
            404 => RemoveFavoriteResponse::NotFound(json),
            _ => RemoveFavoriteResponse::InternalError(json),
        }
    }
}
