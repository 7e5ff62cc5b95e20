use serde::Deserialize;

/// Wire shape of every API response: `{ success, data?, error?, message?, code? }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Best message the server gave for a failure.
    pub fn failure_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
