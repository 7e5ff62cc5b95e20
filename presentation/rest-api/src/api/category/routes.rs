use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::category::use_cases::create::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use business::domain::category::use_cases::delete::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::get_by_slug::{
    GetCategoryBySlugParams, GetCategoryBySlugUseCase,
};
use business::domain::category::use_cases::update::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::envelope::{Envelope, MessageEnvelope};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::security::{FirebaseBearer, require_admin};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_slug_use_case: Arc<dyn GetCategoryBySlugUseCase>,
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_slug_use_case: Arc<dyn GetCategoryBySlugUseCase>,
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_slug_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Category API
#[OpenApi]
impl CategoryApi {
    /// List active categories ordered by display order
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> CategoryListResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => CategoryListResponse::Ok(Json(Envelope::ok(
                categories.into_iter().map(|c| c.into()).collect(),
            ))),
            Err(err) => CategoryListResponse::from_error(err),
        }
    }

    /// Get an active category by slug
    #[oai(path = "/categories/:slug", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_by_slug(&self, slug: Path<String>) -> CategoryResult {
        match self
            .get_by_slug_use_case
            .execute(GetCategoryBySlugParams { slug: slug.0 })
            .await
        {
            Ok(category) => CategoryResult::Ok(Json(Envelope::ok(category.into()))),
            Err(err) => CategoryResult::from_error(err),
        }
    }

    /// Create a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateCategoryRequest>,
    ) -> CategoryResult {
        if let Err(json) = require_admin(&auth) {
            return CategoryResult::Forbidden(json);
        }

        match self
            .create_use_case
            .execute(CreateCategoryParams {
                props: body.0.into(),
            })
            .await
        {
            Ok(category) => CategoryResult::Created(Json(Envelope::with_message(
                category.into(),
                "Category created",
            ))),
            Err(err) => CategoryResult::from_error(err),
        }
    }

    /// Update a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateCategoryRequest>,
    ) -> CategoryResult {
        if let Err(json) = require_admin(&auth) {
            return CategoryResult::Forbidden(json);
        }
        let uuid = match parse_id(&id.0, "category.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return CategoryResult::BadRequest(json),
        };

        match self
            .update_use_case
            .execute(UpdateCategoryParams {
                id: uuid,
                changes: body.0.into(),
            })
            .await
        {
            Ok(category) => CategoryResult::Ok(Json(Envelope::with_message(
                category.into(),
                "Category updated",
            ))),
            Err(err) => CategoryResult::from_error(err),
        }
    }

    /// Delete a category
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
    ) -> DeleteCategoryResponse {
        if let Err(json) = require_admin(&auth) {
            return DeleteCategoryResponse::Forbidden(json);
        }
        let uuid = match parse_id(&id.0, "category.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return DeleteCategoryResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: uuid })
            .await
        {
            Ok(()) => DeleteCategoryResponse::Ok(Json(MessageEnvelope::new("Category deleted"))),
            Err(err) => DeleteCategoryResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoryListResponse {
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<CategoryResponse>>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CategoryListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CategoryListResponse::BadRequest(json),
            404 => CategoryListResponse::NotFound(json),
            _ => CategoryListResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoryResult {
    #[oai(status = 200)]
    Ok(Json<Envelope<CategoryResponse>>),
    #[oai(status = 201)]
    Created(Json<Envelope<CategoryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CategoryResult {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CategoryResult::BadRequest(json),
            404 => CategoryResult::NotFound(json),
            _ => CategoryResult::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
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

impl DeleteCategoryResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => DeleteCategoryResponse::BadRequest(json),
            404 => DeleteCategoryResponse::NotFound(json),
            _ => DeleteCategoryResponse::InternalError(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use business::domain::category::errors::CategoryError;

    use super::*;

    #[test]
    fn should_map_delete_errors_to_matching_status() {
        assert!(matches!(
            DeleteCategoryResponse::from_error(CategoryError::SlugInvalid),
            DeleteCategoryResponse::BadRequest(_)
        ));
        assert!(matches!(
            DeleteCategoryResponse::from_error(CategoryError::NotFound),
            DeleteCategoryResponse::NotFound(_)
        ));
    }

    #[test]
    fn should_map_list_not_found_to_404() {
        match CategoryListResponse::from_error(CategoryError::NotFound) {
            CategoryListResponse::NotFound(json) => assert_eq!(json.0.name, "NotFound"),
            _ => panic!("expected a 404 response"),
        }
    }
}
