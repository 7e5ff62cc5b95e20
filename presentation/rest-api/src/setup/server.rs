use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{CatchPanic, Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::api::fallback::{catch_all_error, panic_response};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const API_PREFIX: &str = "/api";

/// Assembles the full HTTP application: API under `/api`, OpenAPI document,
/// Swagger UI, and the envelope-producing error and panic handlers.
pub fn build_app(
    container: DependencyContainer,
    cors: Cors,
    public_url: &str,
) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.product_api,
            container.category_api,
            container.cart_api,
            container.favorite_api,
            container.order_api,
        ),
        "Mushco Storefront API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{public_url}{API_PREFIX}"));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest(API_PREFIX, api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .data(container.token_verifier)
        .with(CatchPanic::new().with_handler(panic_response))
        .catch_all_error(catch_all_error)
        .with(cors)
        .with(Tracing)
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = config.server.public_url();
        let app = build_app(container, config.cors, &public_url);

        tracing::info!("Server running at {public_url}{API_PREFIX}");
        tracing::info!("Swagger UI at {public_url}/docs");
        tracing::info!("OpenAPI JSON at {public_url}/openapi.json");
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use business::domain::order::pricing::ShippingPolicy;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;
    use storefront_client::client::decode_response;
    use storefront_client::models::{CartItem, Order, Product, ProductPage};

    use super::*;
    use crate::api::security::TokenVerifier;
    use crate::api::security::testing::FakeVerifier;
    use crate::setup::dependency_injection::Repositories;

    fn client() -> TestClient<impl Endpoint> {
        let verifier: Arc<dyn TokenVerifier> = Arc::new(FakeVerifier);
        let container =
            DependencyContainer::new(Repositories::in_memory(), ShippingPolicy::default(), verifier);
        TestClient::new(build_app(container, Cors::new(), "http://localhost:3001"))
    }

    fn address() -> serde_json::Value {
        json!({
            "street": "Rua Augusta",
            "number": "1500",
            "neighborhood": "Consolação",
            "city": "São Paulo",
            "state": "SP",
            "zipCode": "01304-001",
            "country": "Brasil"
        })
    }

    async fn body_json(resp: poem::test::TestResponse) -> serde_json::Value {
        let body = resp.0.into_body().into_string().await.unwrap();
        serde_json::from_str(&body).unwrap()
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: poem::test::TestResponse,
        url: &str,
    ) -> Option<T> {
        let status = reqwest::StatusCode::from_u16(resp.0.status().as_u16()).unwrap();
        let body = resp.0.into_body().into_string().await.unwrap();
        decode_response::<T>(status, url, &body).unwrap()
    }

    async fn first_product_id(cli: &TestClient<impl Endpoint>) -> String {
        let json = body_json(cli.get("/api/products").send().await).await;
        json["data"]
            .as_array()
            .and_then(|items| items.iter().find(|p| p["inStock"] == true))
            .and_then(|p| p["id"].as_str())
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn should_report_health_in_envelope() {
        let resp = client().get("/api/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("success").assert_bool(true);
        json.value()
            .object()
            .get("data")
            .object()
            .get("storage")
            .assert_string("memory");
    }

    #[tokio::test]
    async fn should_wrap_unknown_routes_in_envelope() {
        let resp = client().get("/api/does-not-exist").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        json.value().object().get("success").assert_bool(false);
        json.value().object().get("name").assert_string("NotFound");
    }

    #[tokio::test]
    async fn should_reject_missing_credentials_with_envelope() {
        let resp = client().get("/api/cart").send().await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
        let json = resp.json().await;
        json.value().object().get("success").assert_bool(false);
        json.value().object().get("name").assert_string("Unauthorized");
    }

    #[tokio::test]
    async fn should_reject_malformed_body_with_envelope() {
        let resp = client()
            .post("/api/cart")
            .header("Authorization", "Bearer user-alice")
            .content_type("application/json")
            .body("{not json")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json().await.value().object().get("success").assert_bool(false);
    }

    #[tokio::test]
    async fn should_list_seeded_categories() {
        let resp = client().get("/api/categories").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("data").array().assert_len(3);
    }

    #[tokio::test]
    async fn should_create_category_and_reject_taken_slug() {
        let cli = client();
        let body = json!({ "name": "Sedas", "slug": "sedas", "displayOrder": 4 });

        let resp = cli
            .post("/api/categories")
            .header("Authorization", "Bearer admin-root")
            .body_json(&body)
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);

        let resp = cli.get("/api/categories/sedas").send().await;
        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("data")
            .object()
            .get("name")
            .assert_string("Sedas");

        let resp = cli
            .post("/api/categories")
            .header("Authorization", "Bearer admin-root")
            .body_json(&body)
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value().object().get("code").assert_string("category.slug_taken");
        json.value().object().get("name").assert_string("Conflict");
    }

    #[tokio::test]
    async fn should_forbid_catalog_mutations_for_customers() {
        let resp = client()
            .post("/api/categories")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({ "name": "Sedas", "slug": "sedas" }))
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
        resp.json().await.value().object().get("name").assert_string("Forbidden");
    }

    #[tokio::test]
    async fn should_search_products_with_pagination() {
        let resp = client()
            .get("/api/products/search?query=bong&limit=2")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let data = json.value().object().get("data").object();
        data.get("limit").assert_i64(2);
        data.get("page").assert_i64(1);
    }

    #[tokio::test]
    async fn should_add_to_cart_and_merge_same_product() {
        let cli = client();
        let product_id = first_product_id(&cli).await;

        for _ in 0..2 {
            cli.post("/api/cart")
                .header("Authorization", "Bearer user-alice")
                .body_json(&json!({ "productId": product_id, "quantity": 1 }))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = cli
            .get("/api/cart")
            .header("Authorization", "Bearer user-alice")
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let items = json.value().object().get("data").array();
        items.assert_len(1);
        items.get(0).object().get("quantity").assert_i64(2);
    }

    #[tokio::test]
    async fn should_keep_carts_separate_per_user() {
        let cli = client();
        let product_id = first_product_id(&cli).await;

        cli.post("/api/cart")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({ "productId": product_id }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        let resp = cli
            .get("/api/cart")
            .header("Authorization", "Bearer user-bob")
            .send()
            .await;
        resp.json().await.value().object().get("data").array().assert_len(0);
    }

    #[tokio::test]
    async fn should_reject_order_without_items() {
        let resp = client()
            .post("/api/orders")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({
                "items": [],
                "shippingAddress": address(),
                "paymentMethod": "pix"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value().object().get("code").assert_string("order.items_empty");
        json.value().object().get("name").assert_string("ValidationError");
    }

    #[tokio::test]
    async fn should_create_order_and_list_it_for_owner_only() {
        let cli = client();
        let product_id = first_product_id(&cli).await;

        let resp = cli
            .post("/api/orders")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({
                "items": [{ "productId": product_id, "quantity": 1 }],
                "shippingAddress": address(),
                "paymentMethod": "credit_card"
            }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let created = body_json(resp).await;
        assert_eq!(created["data"]["status"], "pending");
        assert_eq!(created["data"]["paymentStatus"], "pending");
        let order_id = created["data"]["id"].as_str().unwrap().to_string();

        let resp = cli
            .get("/api/orders")
            .header("Authorization", "Bearer user-alice")
            .send()
            .await;
        resp.json().await.value().object().get("data").array().assert_len(1);

        cli.get(format!("/api/orders/{order_id}"))
            .header("Authorization", "Bearer user-bob")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);

        cli.get(format!("/api/orders/{order_id}"))
            .header("Authorization", "Bearer admin-root")
            .send()
            .await
            .assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_toggle_favorite_back_to_original_membership() {
        let cli = client();
        let product_id = first_product_id(&cli).await;

        cli.post("/api/favorites")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({ "productId": product_id }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        cli.delete(format!("/api/favorites/{product_id}"))
            .header("Authorization", "Bearer user-alice")
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .get("/api/favorites")
            .header("Authorization", "Bearer user-alice")
            .send()
            .await;
        resp.json().await.value().object().get("data").array().assert_len(0);
    }

    #[tokio::test]
    async fn should_emit_camel_case_product_fields() {
        let json = body_json(client().get("/api/products").send().await).await;
        let product = &json["data"][0];

        assert!(product.get("inStock").is_some());
        assert!(product.get("reviewCount").is_some());
        assert!(product.get("createdAt").is_some());
        assert!(product.get("in_stock").is_none());
    }

    #[tokio::test]
    async fn should_decode_catalog_with_storefront_client_models() {
        let cli = client();

        let products: Vec<Product> = decode(cli.get("/api/products").send().await, "/products")
            .await
            .unwrap();
        assert!(!products.is_empty());
        assert!(products.iter().any(|p| p.in_stock));

        let page: ProductPage = decode(
            cli.get("/api/products/search?query=bong&limit=2").send().await,
            "/products/search",
        )
        .await
        .unwrap();
        assert_eq!(page.limit, 2);
        assert!(page.total_pages >= 1 || page.total == 0);
    }

    #[tokio::test]
    async fn should_decode_cart_and_order_with_storefront_client_models() {
        let cli = client();
        let product_id = first_product_id(&cli).await;

        cli.post("/api/cart")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({ "productId": product_id, "quantity": 2 }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        let cart: Vec<CartItem> = decode(
            cli.get("/api/cart")
                .header("Authorization", "Bearer user-alice")
                .send()
                .await,
            "/cart",
        )
        .await
        .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id.to_string(), product_id);
        assert_eq!(cart[0].quantity, 2);

        let order: Order = decode(
            cli.post("/api/orders")
                .header("Authorization", "Bearer user-alice")
                .body_json(&json!({
                    "items": [{ "productId": product_id, "quantity": 1 }],
                    "shippingAddress": address(),
                    "paymentMethod": "pix"
                }))
                .send()
                .await,
            "/orders",
        )
        .await
        .unwrap();
        assert_eq!(order.user_id, "alice");
        assert_eq!(order.shipping_address.zip_code, "01304-001");
        assert_eq!(order.items.len(), 1);
    }

    #[tokio::test]
    async fn should_drop_cart_lines_of_deleted_products() {
        let cli = client();
        let product_id = first_product_id(&cli).await;

        cli.post("/api/cart")
            .header("Authorization", "Bearer user-alice")
            .body_json(&json!({ "productId": product_id, "quantity": 3 }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        cli.delete(format!("/api/products/{product_id}"))
            .header("Authorization", "Bearer admin-root")
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .get("/api/cart")
            .header("Authorization", "Bearer user-alice")
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.json().await.value().object().get("data").array().assert_len(0);
    }

    #[tokio::test]
    async fn should_answer_unknown_product_delete_with_matching_status() {
        let resp = client()
            .delete(format!("/api/products/{}", uuid::Uuid::new_v4()))
            .header("Authorization", "Bearer admin-root")
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.json().await.value().object().get("name").assert_string("NotFound");
    }
}
