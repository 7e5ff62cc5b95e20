use serde::{Deserialize, Serialize};

/// Identifier of a signed-in customer (the Firebase UID of the token subject).
/// Carts, favorites and orders are scoped by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_uid() {
        let user_id = UserId::new("firebase-uid-123");
        assert_eq!(user_id.as_str(), "firebase-uid-123");
        assert_eq!(user_id.to_string(), "firebase-uid-123");
    }

    #[test]
    fn should_compare_by_value() {
        assert_eq!(UserId::from("customer-a"), UserId::new("customer-a".to_string()));
        assert_ne!(UserId::from("customer-a"), UserId::from("customer-b"));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("uid-9")).unwrap();
        assert_eq!(json, "\"uid-9\"");
    }
}
