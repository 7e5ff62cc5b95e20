use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// A user-product pairing; it either exists or it does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: UserId, product_id: Uuid) -> Self {
        Self {
            user_id,
            product_id,
            created_at: Utc::now(),
        }
    }

    pub fn from_repository(user_id: UserId, product_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            product_id,
            created_at,
        }
    }
}
