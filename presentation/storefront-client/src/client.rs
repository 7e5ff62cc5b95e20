use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::auth::AuthSession;
use crate::config::ClientConfig;
use crate::envelope::ApiEnvelope;
use crate::error::ApiError;

/// HTTP client for the storefront REST API.
///
/// The caller's session is passed to every call; a bearer token is attached
/// when one can be issued, otherwise the request goes out anonymously and the
/// server decides.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        session: &dyn AuthSession,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self.http.get(&url);
        self.send_for_data(session, request, &url).await
    }

    pub async fn get_with_query<T, Q>(
        &self,
        session: &dyn AuthSession,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        let request = self.http.get(&url).query(query);
        self.send_for_data(session, request, &url).await
    }

    pub async fn post<T, B>(
        &self,
        session: &dyn AuthSession,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        let request = self.http.post(&url).json(body);
        self.send_for_data(session, request, &url).await
    }

    pub async fn put<T, B>(
        &self,
        session: &dyn AuthSession,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        let request = self.http.put(&url).json(body);
        self.send_for_data(session, request, &url).await
    }

    /// Deletions answer with a message-only envelope.
    pub async fn delete(&self, session: &dyn AuthSession, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self.http.delete(&url);
        let (status, body) = self.send(session, request, &url).await?;
        decode_response::<serde_json::Value>(status, &url, &body).map(|_| ())
    }

    async fn send_for_data<T: DeserializeOwned>(
        &self,
        session: &dyn AuthSession,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let (status, body) = self.send(session, request, url).await?;
        decode_response::<T>(status, url, &body)?
            .ok_or_else(|| ApiError::Decode(format!("response from {url} has no data")))
    }

    async fn send(
        &self,
        session: &dyn AuthSession,
        request: RequestBuilder,
        url: &str,
    ) -> Result<(StatusCode, String), ApiError> {
        let request = authorize(session, request).await;

        let response = request.send().await.map_err(|e| {
            error!(url = %url, error = %e, "API connection error");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "API connection error");
            ApiError::Transport(e.to_string())
        })?;

        Ok((status, body))
    }
}

async fn authorize(session: &dyn AuthSession, request: RequestBuilder) -> RequestBuilder {
    if session.current_user().await.is_none() {
        warn!("No signed-in user; sending request without credentials");
        return request;
    }
    match session.id_token().await {
        Ok(token) => request.bearer_auth(token),
        Err(e) => {
            warn!(error = %e, "Could not obtain ID token; sending request without credentials");
            request
        }
    }
}

/// Unwraps the `{success, data, error}` envelope of a received response.
///
/// `Ok(None)` means a successful envelope without `data`.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    url: &str,
    body: &str,
) -> Result<Option<T>, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.failure_message().map(str::to_string))
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        error!(status = status.as_u16(), url = %url, message = %message, "API request failed");
        if status == StatusCode::UNAUTHORIZED {
            warn!(url = %url, "Authentication rejected by the API; sign in again");
        }

        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(body).map_err(|e| {
        error!(url = %url, error = %e, "Failed to parse API response");
        ApiError::Decode(e.to_string())
    })?;

    if !envelope.success {
        let message = envelope
            .failure_message()
            .unwrap_or("request was not successful")
            .to_string();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(envelope.data)
}
