use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::subscriptions::models::Subscription;

/// Subscription row with its topic set aggregated in one query
const SUBSCRIPTION_FOR_USER: &str = r#"
SELECT s.id, s.user_id, s.created_at, s.updated_at,
       COALESCE(
           ARRAY_AGG(t.mentor_id) FILTER (WHERE t.mentor_id IS NOT NULL),
           '{}'
       ) AS topics
FROM subscriptions s
LEFT JOIN subscription_topics t ON t.subscription_id = s.id
WHERE s.user_id = $1
GROUP BY s.id
"#;

/// Service for user subscriptions.
///
/// The mentor catalog consults this read-only through
/// [`SubscriptionService::find_subscription_for_user`]; the subscribe and
/// unsubscribe paths are the user-facing side.
pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the user's subscription with its topic set, or None if the user
    /// never subscribed to anything
    pub async fn find_subscription_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Subscription>> {
        sqlx::query_as::<_, Subscription>(SUBSCRIPTION_FOR_USER)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch subscription for user: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Subscribe the user to a mentor's topic. Creates the subscription row
    /// on first use; subscribing twice to the same mentor is a no-op.
    pub async fn subscribe(&self, user_id: &str, mentor_id: Uuid) -> Result<Subscription> {
        let mentor_active: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM mentors WHERE id = $1 AND status = TRUE)",
        )
        .bind(mentor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check mentor {}: {:?}", mentor_id, e);
            AppError::Database(e)
        })?;

        if !mentor_active {
            return Err(AppError::NotFound(format!(
                "Mentor '{}' not found",
                mentor_id
            )));
        }

        let subscription_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO subscriptions (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert subscription: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO subscription_topics (subscription_id, mentor_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(subscription_id)
        .bind(mentor_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add subscription topic: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Topic {} subscribed by user", mentor_id);

        self.find_subscription_for_user(user_id)
            .await?
            .ok_or_else(|| AppError::Internal("Subscription vanished after upsert".to_string()))
    }

    /// Remove a mentor's topic from the user's subscription. NotFound when
    /// the user held no such topic.
    pub async fn unsubscribe(&self, user_id: &str, mentor_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM subscription_topics t
            USING subscriptions s
            WHERE t.subscription_id = s.id
              AND s.user_id = $1
              AND t.mentor_id = $2
            "#,
        )
        .bind(user_id)
        .bind(mentor_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to remove subscription topic: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Subscription topic '{}' not found",
                mentor_id
            )));
        }

        sqlx::query("UPDATE subscriptions SET updated_at = NOW() WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to touch subscription: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }
}
