use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::payload::Json;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::api::error::ErrorResponse;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("auth.certs_fetch_failed")]
    CertsFetchFailed,
    #[error("auth.cert_decode_failed")]
    CertDecodeFailed,
    #[error("auth.cache_unavailable")]
    CacheUnavailable,
    #[error("auth.certs_not_loaded")]
    CertsNotLoaded,
    #[error("auth.invalid_token_header")]
    InvalidTokenHeader,
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.token_validation_failed")]
    TokenValidationFailed,
}

/// Identity extracted from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.uid.clone())
    }
}

/// Verifies a raw bearer token. Registered as request data so handlers and
/// tests can swap the implementation.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    iss: String,
    aud: String,
    exp: u64,
    iat: u64,
    #[serde(default)]
    admin: bool,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// Validates Firebase ID tokens against Google's rotating RS256 certificates.
pub struct FirebaseTokenVerifier {
    project_id: String,
    http: reqwest::Client,
    certs: RwLock<Option<CachedCerts>>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            http: reqwest::Client::new(),
            certs: RwLock::new(None),
        }
    }

    fn has_fresh_certs(&self) -> Result<bool, AuthError> {
        let cache = self.certs.read().map_err(|_| AuthError::CacheUnavailable)?;
        Ok(cache
            .as_ref()
            .is_some_and(|cached| cached.fetched_at.elapsed() < CACHE_TTL))
    }

    async fn fetch_google_certs(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        let response: HashMap<String, String> = self
            .http
            .get(GOOGLE_CERTS_URL)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch Google certs: {e}");
                AuthError::CertsFetchFailed
            })?
            .json()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse Google certs: {e}");
                AuthError::CertsFetchFailed
            })?;

        let mut keys = HashMap::new();
        for (kid, pem) in response {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|_| AuthError::CertDecodeFailed)?;
            keys.insert(kid, key);
        }

        Ok(keys)
    }

    async fn refresh_certs_if_stale(&self) -> Result<(), AuthError> {
        if self.has_fresh_certs()? {
            return Ok(());
        }

        let keys = self.fetch_google_certs().await?;
        let mut cache = self.certs.write().map_err(|_| AuthError::CacheUnavailable)?;
        *cache = Some(CachedCerts {
            keys,
            fetched_at: Instant::now(),
        });
        Ok(())
    }

    /// Decodes the token using the cached certificates only.
    fn decode_with_cached_certs(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let header: Header = decode_header(token).map_err(|_| AuthError::InvalidTokenHeader)?;
        let kid = header.kid.ok_or(AuthError::MissingKid)?;

        let cache = self.certs.read().map_err(|_| AuthError::CacheUnavailable)?;
        let cached = cache.as_ref().ok_or(AuthError::CertsNotLoaded)?;
        let decoding_key = cached.keys.get(&kid).ok_or(AuthError::UnknownKid)?;

        let expected_issuer = format!("https://securetoken.google.com/{}", self.project_id);
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&expected_issuer]);
        validation.validate_exp = true;

        let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
            .map_err(|_| AuthError::TokenValidationFailed)?;

        Ok(AuthenticatedUser {
            uid: token_data.claims.sub,
            is_admin: token_data.claims.admin,
        })
    }
}

#[async_trait]
impl TokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.refresh_certs_if_stale().await?;
        self.decode_with_cached_certs(token)
    }
}

/// Firebase Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub AuthenticatedUser);

async fn firebase_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(verifier) = req.data::<Arc<dyn TokenVerifier>>() else {
        tracing::error!("No token verifier registered");
        return None;
    };

    match verifier.verify(&bearer.token).await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}

/// Rejects non-administrators with the 403 envelope.
pub fn require_admin(auth: &FirebaseBearer) -> Result<(), Json<ErrorResponse>> {
    if auth.0.is_admin {
        return Ok(());
    }
    tracing::warn!("User {} attempted an admin operation", auth.0.uid);
    Err(Json(ErrorResponse::new(
        "Forbidden",
        "auth.admin_required",
        "Administrator privileges required",
    )))
}
