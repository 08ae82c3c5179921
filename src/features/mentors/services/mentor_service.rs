use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::mentors::dtos::{
    CreateMentorDto, MentorSubscriptionDto, MentorSummaryDto, UpdateMentorDto,
};
use crate::features::mentors::models::{Mentor, MentorSummary};
use crate::features::subscriptions::models::Subscription;
use crate::features::subscriptions::SubscriptionService;
use crate::shared::constants::DEFAULT_MENTOR_SCORE;
use crate::shared::types::PaginationQuery;

/// Full column list for single-record operations
const MENTOR_COLUMNS: &str = "id, name, title, thumbnail, occupation, description, \
     cover_img_url, score, status, created_by, updated_by, created_at, updated_at";

/// Summary projection: list/search/recommendation reads exclude the
/// long-form description and the status flag
const SUMMARY_COLUMNS: &str = "id, name, title, thumbnail, occupation, \
     cover_img_url, score, created_by, updated_by, created_at, updated_at";

/// Builds the ILIKE pattern for substring search. The query is interpolated
/// without escaping, so `%` and `_` keep their LIKE pattern meaning - this
/// matches the original catalog's behavior and is a deliberate choice, not
/// an oversight.
fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}

/// Membership check for the subscription-status read: an absent
/// subscription means no topics.
fn is_subscribed(subscription: Option<&Subscription>, mentor_id: Uuid) -> bool {
    subscription
        .map(|s| s.topics.iter().any(|t| *t == mentor_id))
        .unwrap_or(false)
}

/// Service for the mentor catalog.
///
/// Every read path filters on `status = TRUE`; deactivated mentors only
/// leave the table, never re-enter a read.
pub struct MentorService {
    pool: PgPool,
    subscriptions: Arc<SubscriptionService>,
}

impl MentorService {
    pub fn new(pool: PgPool, subscriptions: Arc<SubscriptionService>) -> Self {
        Self {
            pool,
            subscriptions,
        }
    }

    /// Create a mentor record on behalf of an administrator
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        dto: CreateMentorDto,
    ) -> Result<Mentor> {
        let query = format!(
            r#"
            INSERT INTO mentors
                (name, title, thumbnail, occupation, description, cover_img_url,
                 score, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            MENTOR_COLUMNS
        );

        let mentor = sqlx::query_as::<_, Mentor>(&query)
            .bind(&dto.name)
            .bind(&dto.title)
            .bind(&dto.thumbnail)
            .bind(&dto.occupation)
            .bind(&dto.description)
            .bind(&dto.cover_img_url)
            .bind(dto.score.unwrap_or(DEFAULT_MENTOR_SCORE))
            .bind(&actor.sub)
            .bind(&actor.sub)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create mentor: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Mentor created: id={}, by={}", mentor.id, actor.sub);

        Ok(mentor)
    }

    /// Update an active mentor. Absent fields keep their stored value.
    ///
    /// The status guard lives in the WHERE clause, so the precondition check
    /// and the write are a single atomic statement - an update racing a
    /// deactivation cannot resurrect the record.
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        dto: UpdateMentorDto,
    ) -> Result<Mentor> {
        let query = format!(
            r#"
            UPDATE mentors
            SET name = COALESCE($1, name),
                title = COALESCE($2, title),
                thumbnail = COALESCE($3, thumbnail),
                occupation = COALESCE($4, occupation),
                description = COALESCE($5, description),
                cover_img_url = COALESCE($6, cover_img_url),
                score = COALESCE($7, score),
                updated_by = $8,
                updated_at = NOW()
            WHERE id = $9 AND status = TRUE
            RETURNING {}
            "#,
            MENTOR_COLUMNS
        );

        let mentor = sqlx::query_as::<_, Mentor>(&query)
            .bind(&dto.name)
            .bind(&dto.title)
            .bind(&dto.thumbnail)
            .bind(&dto.occupation)
            .bind(&dto.description)
            .bind(&dto.cover_img_url)
            .bind(dto.score)
            .bind(&actor.sub)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update mentor {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", id)))?;

        Ok(mentor)
    }

    /// Soft-delete a mentor. The record stays in the table for audit but
    /// exits every read path. A second call finds no active row and fails
    /// NotFound rather than no-op.
    pub async fn deactivate(&self, id: Uuid) -> Result<Mentor> {
        let query = format!(
            r#"
            UPDATE mentors
            SET status = FALSE, updated_at = NOW()
            WHERE id = $1 AND status = TRUE
            RETURNING {}
            "#,
            MENTOR_COLUMNS
        );

        let mentor = sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to deactivate mentor {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", id)))?;

        tracing::info!("Mentor deactivated: id={}", id);

        Ok(mentor)
    }

    /// Get the active mentor with the given id. Absent is not an error here;
    /// only mutating operations treat a missing target as NotFound.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>> {
        let query = format!(
            "SELECT {} FROM mentors WHERE id = $1 AND status = TRUE",
            MENTOR_COLUMNS
        );

        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch mentor {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    /// Batch lookup. Missing or inactive ids are silently absent from the
    /// result; order is the engine's natural order.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<MentorSummaryDto>> {
        let query = format!(
            "SELECT {} FROM mentors WHERE id = ANY($1) AND status = TRUE",
            SUMMARY_COLUMNS
        );

        let mentors = sqlx::query_as::<_, MentorSummary>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch mentors by ids: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(mentors.into_iter().map(MentorSummaryDto::from).collect())
    }

    /// List active mentors, most recently updated first
    pub async fn find_paginated(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<Vec<MentorSummaryDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM mentors
            WHERE status = TRUE
            ORDER BY updated_at DESC
            LIMIT $1 OFFSET $2
            "#,
            SUMMARY_COLUMNS
        );

        let mentors = sqlx::query_as::<_, MentorSummary>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list mentors: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(mentors.into_iter().map(MentorSummaryDto::from).collect())
    }

    /// Full-text search over name, title, occupation, and description,
    /// ordered by the engine's relevance rank
    pub async fn search(&self, query_text: &str, limit: i64) -> Result<Vec<MentorSummaryDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM mentors
            WHERE status = TRUE
              AND search_tsv @@ plainto_tsquery('english', $1)
            ORDER BY ts_rank(search_tsv, plainto_tsquery('english', $1)) DESC
            LIMIT $2
            "#,
            SUMMARY_COLUMNS
        );

        let mentors = sqlx::query_as::<_, MentorSummary>(&query)
            .bind(query_text)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search mentors: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(mentors.into_iter().map(MentorSummaryDto::from).collect())
    }

    /// Case-insensitive substring match across name, occupation, and title.
    /// Fallback for queries too short or unusual for the text index.
    /// See [`like_pattern`] for the wildcard semantics.
    pub async fn search_like(
        &self,
        query_text: &str,
        limit: i64,
    ) -> Result<Vec<MentorSummaryDto>> {
        let pattern = like_pattern(query_text);
        let query = format!(
            r#"
            SELECT {}
            FROM mentors
            WHERE status = TRUE
              AND (name ILIKE $1 OR occupation ILIKE $1 OR title ILIKE $1)
            LIMIT $2
            "#,
            SUMMARY_COLUMNS
        );

        let mentors = sqlx::query_as::<_, MentorSummary>(&query)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to substring-search mentors: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(mentors.into_iter().map(MentorSummaryDto::from).collect())
    }

    /// Highest-recommended active mentors first
    pub async fn find_recommended(&self, limit: i64) -> Result<Vec<MentorSummaryDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM mentors
            WHERE status = TRUE
            ORDER BY score DESC
            LIMIT $1
            "#,
            SUMMARY_COLUMNS
        );

        let mentors = sqlx::query_as::<_, MentorSummary>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch recommended mentors: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(mentors.into_iter().map(MentorSummaryDto::from).collect())
    }

    /// Recommendation order with the same skip/limit arithmetic as
    /// [`Self::find_paginated`]
    pub async fn find_recommended_paginated(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<Vec<MentorSummaryDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM mentors
            WHERE status = TRUE
            ORDER BY score DESC
            LIMIT $1 OFFSET $2
            "#,
            SUMMARY_COLUMNS
        );

        let mentors = sqlx::query_as::<_, MentorSummary>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch recommended mentors page: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(mentors.into_iter().map(MentorSummaryDto::from).collect())
    }

    /// Combined mentor + "is this user subscribed to them" view.
    /// NotFound when the mentor is missing or inactive; a user without a
    /// subscription record is treated as subscribed to nothing.
    pub async fn find_subscription_status(
        &self,
        mentor_id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<MentorSubscriptionDto> {
        let mentor = self
            .find_by_id(mentor_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", mentor_id)))?;

        let subscription = self
            .subscriptions
            .find_subscription_for_user(&user.sub)
            .await?;

        let subscribed = is_subscribed(subscription.as_ref(), mentor.id);

        Ok(MentorSubscriptionDto::new(
            MentorSummaryDto::from(MentorSummary::from(mentor)),
            subscribed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn subscription_with(topics: Vec<Uuid>) -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            topics,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn like_pattern_wraps_query() {
        assert_eq!(like_pattern("abc"), "%abc%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn like_pattern_keeps_wildcards() {
        // Pattern metacharacters pass through unescaped on purpose:
        // "50%" matches any value containing "50".
        assert_eq!(like_pattern("50%"), "%50%%");
        assert_eq!(like_pattern("a_c"), "%a_c%");
    }

    #[test]
    fn absent_subscription_means_not_subscribed() {
        assert!(!is_subscribed(None, Uuid::new_v4()));
    }

    #[test]
    fn subscribed_iff_mentor_in_topic_set() {
        let mentor_id = Uuid::new_v4();
        let other_id = Uuid::new_v4();

        let sub = subscription_with(vec![other_id, mentor_id]);
        assert!(is_subscribed(Some(&sub), mentor_id));

        let sub = subscription_with(vec![other_id]);
        assert!(!is_subscribed(Some(&sub), mentor_id));

        let sub = subscription_with(vec![]);
        assert!(!is_subscribed(Some(&sub), mentor_id));
    }

    #[test]
    fn projections_do_not_select_excluded_fields() {
        // The summary column list must never regain description or status.
        assert!(!SUMMARY_COLUMNS.contains("description"));
        assert!(!SUMMARY_COLUMNS.contains("status"));
        assert!(MENTOR_COLUMNS.contains("description"));
        assert!(MENTOR_COLUMNS.contains("status"));
    }
}
