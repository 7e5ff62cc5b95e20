use std::sync::Arc;

use dotenvy::dotenv;

mod api {
    pub mod envelope;
    pub mod error;
    pub mod fallback;
    pub mod security;
    pub mod tags;
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod category {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod favorite {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod order {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod checkout_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod firebase_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use api::security::{FirebaseTokenVerifier, TokenVerifier};
use config::{app_config::AppConfig, database_config};
use setup::dependency_injection::{DependencyContainer, Repositories};
use setup::server::Server;

/// REST API entry point: loads configuration, picks the store, wires the
/// use cases and serves HTTP.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;

    let repositories = match database_config::init_database(&config.database).await? {
        Some(pool) => Repositories::postgres(pool),
        None => Repositories::in_memory(),
    };

    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(FirebaseTokenVerifier::new(config.firebase.project_id.clone()));
    let container = DependencyContainer::new(repositories, config.shipping_policy, verifier);

    Server::run(config, container).await?;

    Ok(())
}
