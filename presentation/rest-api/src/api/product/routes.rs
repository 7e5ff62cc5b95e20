use std::str::FromStr;
use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use rust_decimal::Decimal;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductSearchCriteria;
use business::domain::shared::pagination::PageRequest;

use crate::api::envelope::{Envelope, MessageEnvelope};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::product::dto::{
    CreateProductRequest, ProductPageResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::security::{FirebaseBearer, require_admin};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_category_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_price(raw: Option<String>, code: &str) -> Result<Option<Decimal>, Json<ErrorResponse>> {
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| {
            Decimal::from_str(value.trim())
                .map_err(|_| ErrorResponse::validation(code, "Price filter must be a number"))
        })
        .transpose()
}

/// Product catalog API
///
/// Reads are public; mutations require an administrator token.
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductListResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => ProductListResponse::Ok(Json(Envelope::ok(
                products.into_iter().map(|p| p.into()).collect(),
            ))),
            Err(err) => ProductListResponse::from_error(err),
        }
    }

    /// Search products
    ///
    /// Case-insensitive substring match over name, description and tags,
    /// optionally narrowed by category and price range. Pages are 1-based.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        query: Query<Option<String>>,
        category: Query<Option<String>>,
        #[oai(name = "minPrice")] min_price: Query<Option<String>>,
        #[oai(name = "maxPrice")] max_price: Query<Option<String>>,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
    ) -> SearchProductsResponse {
        let min_price = match parse_price(min_price.0, "product.invalid_min_price") {
            Ok(price) => price,
            Err(json) => return SearchProductsResponse::BadRequest(json),
        };
        let max_price = match parse_price(max_price.0, "product.invalid_max_price") {
            Ok(price) => price,
            Err(json) => return SearchProductsResponse::BadRequest(json),
        };

        let params = SearchProductsParams {
            criteria: ProductSearchCriteria {
                query: query.0,
                category: category.0,
                min_price,
                max_price,
            },
            page: PageRequest::new(page.0, limit.0),
        };

        match self.search_use_case.execute(params).await {
            Ok(page) => SearchProductsResponse::Ok(Json(Envelope::ok(page.into()))),
            Err(err) => SearchProductsResponse::from_error(err),
        }
    }

    /// List products of a category
    ///
    /// An unknown slug yields an empty list.
    #[oai(
        path = "/products/category/:slug",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_category(&self, slug: Path<String>) -> ProductListResponse {
        match self
            .get_by_category_use_case
            .execute(GetProductsByCategoryParams { category: slug.0 })
            .await
        {
            Ok(products) => ProductListResponse::Ok(Json(Envelope::ok(
                products.into_iter().map(|p| p.into()).collect(),
            ))),
            Err(err) => ProductListResponse::from_error(err),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> ProductResult {
        let uuid = match parse_id(&id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return ProductResult::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => ProductResult::Ok(Json(Envelope::ok(product.into()))),
            Err(err) => ProductResult::from_error(err),
        }
    }

    /// Create a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateProductRequest>,
    ) -> ProductResult {
        if let Err(json) = require_admin(&auth) {
            return ProductResult::Forbidden(json);
        }

        let params = CreateProductParams {
            props: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => ProductResult::Created(Json(Envelope::with_message(
                product.into(),
                "Product created",
            ))),
            Err(err) => ProductResult::from_error(err),
        }
    }

    /// Update a product
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> ProductResult {
        if let Err(json) = require_admin(&auth) {
            return ProductResult::Forbidden(json);
        }
        let uuid = match parse_id(&id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return ProductResult::BadRequest(json),
        };

        let params = UpdateProductParams {
            id: uuid,
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => ProductResult::Ok(Json(Envelope::with_message(
                product.into(),
                "Product updated",
            ))),
            Err(err) => ProductResult::from_error(err),
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: FirebaseBearer, id: Path<String>) -> DeleteProductResponse {
        if let Err(json) = require_admin(&auth) {
            return DeleteProductResponse::Forbidden(json);
        }
        let uuid = match parse_id(&id.0, "product.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageEnvelope::new("Product deleted"))),
            Err(err) => DeleteProductResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<ProductResponse>>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProductListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => ProductListResponse::BadRequest(json),
            404 => ProductListResponse::NotFound(json),
            _ => ProductListResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<ProductPageResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SearchProductsResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => SearchProductsResponse::BadRequest(json),
            404 => SearchProductsResponse::NotFound(json),
            _ => SearchProductsResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductResult {
    #[oai(status = 200)]
    Ok(Json<Envelope<ProductResponse>>),
    #[oai(status = 201)]
    Created(Json<Envelope<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProductResult {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => ProductResult::BadRequest(json),
            404 => ProductResult::NotFound(json),
            _ => ProductResult::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DeleteProductResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => DeleteProductResponse::BadRequest(json),
            404 => DeleteProductResponse::NotFound(json),
            _ => DeleteProductResponse::InternalError(json),
        }
    }
}
