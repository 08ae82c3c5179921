use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::subscriptions::models::Subscription;

/// Response DTO for a user's subscription
#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponseDto {
    pub id: Uuid,
    pub topics: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionResponseDto {
    fn from(s: Subscription) -> Self {
        Self {
            id: s.id,
            topics: s.topics,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
