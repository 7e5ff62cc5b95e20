use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("auth.not_signed_in")]
    NotSignedIn,
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.unsupported: {0}")]
    Unsupported(String),
    #[error("auth.token_unavailable: {0}")]
    TokenUnavailable(String),
}

/// Federated identity providers offered on the sign-in page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Google,
}

/// Identity collaborator handed to every API call.
#[async_trait]
pub trait AuthSession: Send + Sync {
    async fn current_user(&self) -> Option<SessionUser>;
    /// Bearer token for the signed-in user.
    async fn id_token(&self) -> Result<String, AuthError>;
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError>;
    async fn sign_in_with_provider(&self, provider: AuthProvider)
    -> Result<SessionUser, AuthError>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<SessionUser, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn is_authenticated(&self) -> bool {
        self.current_user().await.is_some()
    }
}

/// Session with a fixed identity and token, for tooling and tests.
///
/// Password sign-in only accepts the configured email; the password is not checked.
pub struct StaticTokenSession {
    user: SessionUser,
    token: String,
    signed_in: RwLock<bool>,
}

impl StaticTokenSession {
    pub fn signed_in(uid: &str, email: &str, token: &str) -> Self {
        Self {
            user: SessionUser {
                uid: uid.to_string(),
                email: email.to_string(),
                display_name: None,
            },
            token: token.to_string(),
            signed_in: RwLock::new(true),
        }
    }

    pub fn signed_out(uid: &str, email: &str, token: &str) -> Self {
        let session = Self::signed_in(uid, email, token);
        Self {
            signed_in: RwLock::new(false),
            ..session
        }
    }
}

#[async_trait]
impl AuthSession for StaticTokenSession {
    async fn current_user(&self) -> Option<SessionUser> {
        if *self.signed_in.read().await {
            Some(self.user.clone())
        } else {
            None
        }
    }

    async fn id_token(&self) -> Result<String, AuthError> {
        if *self.signed_in.read().await {
            Ok(self.token.clone())
        } else {
            Err(AuthError::NotSignedIn)
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<SessionUser, AuthError> {
        if !email.eq_ignore_ascii_case(&self.user.email) {
            return Err(AuthError::InvalidCredentials);
        }
        *self.signed_in.write().await = true;
        Ok(self.user.clone())
    }

    async fn sign_in_with_provider(
        &self,
        provider: AuthProvider,
    ) -> Result<SessionUser, AuthError> {
        Err(AuthError::Unsupported(format!("{provider:?}")))
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _display_name: &str,
    ) -> Result<SessionUser, AuthError> {
        Err(AuthError::Unsupported("sign_up".to_string()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.signed_in.write().await = false;
        Ok(())
    }
}
