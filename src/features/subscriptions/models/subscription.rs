use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a user's subscription.
///
/// One subscription per user; `topics` is the set of mentor ids the user
/// is subscribed to, aggregated from the topics join table.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: String,
    pub topics: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
