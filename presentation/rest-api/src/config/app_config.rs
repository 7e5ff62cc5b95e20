use super::{
    checkout_config, cors_config, database_config::DatabaseSettings,
    firebase_config::FirebaseConfig, server_config::ServerConfig,
};
use business::domain::order::pricing::ShippingPolicy;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub firebase: FirebaseConfig,
    pub shipping_policy: ShippingPolicy,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            firebase: FirebaseConfig::from_env()?,
            shipping_policy: checkout_config::shipping_policy_from_env()?,
        })
    }
}
