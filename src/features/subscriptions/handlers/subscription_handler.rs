use axum::{extract::Path, extract::State, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::subscriptions::dtos::SubscriptionResponseDto;
use crate::features::subscriptions::services::SubscriptionService;
use crate::shared::types::ApiResponse;

/// Get the caller's subscribed topics. A user who never subscribed gets an
/// empty topic list, not an error.
#[utoipa::path(
    get,
    path = "/api/subscriptions/me",
    responses(
        (status = 200, description = "Subscribed topics", body = ApiResponse<Vec<Uuid>>)
    ),
    tag = "subscriptions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_my_topics(
    user: AuthenticatedUser,
    State(service): State<Arc<SubscriptionService>>,
) -> Result<Json<ApiResponse<Vec<Uuid>>>> {
    let topics = service
        .find_subscription_for_user(&user.sub)
        .await?
        .map(|s| s.topics)
        .unwrap_or_default();

    Ok(Json(ApiResponse::success(Some(topics), None, None)))
}

/// Subscribe the caller to a mentor's topic
#[utoipa::path(
    post,
    path = "/api/subscriptions/topics/{mentor_id}",
    params(
        ("mentor_id" = Uuid, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Subscribed", body = ApiResponse<SubscriptionResponseDto>),
        (status = 404, description = "Mentor not found")
    ),
    tag = "subscriptions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn subscribe(
    user: AuthenticatedUser,
    State(service): State<Arc<SubscriptionService>>,
    Path(mentor_id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubscriptionResponseDto>>> {
    let subscription = service.subscribe(&user.sub, mentor_id).await?;
    Ok(Json(ApiResponse::success(
        Some(SubscriptionResponseDto::from(subscription)),
        None,
        None,
    )))
}

/// Unsubscribe the caller from a mentor's topic
#[utoipa::path(
    delete,
    path = "/api/subscriptions/topics/{mentor_id}",
    params(
        ("mentor_id" = Uuid, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Unsubscribed"),
        (status = 404, description = "Topic not in the caller's subscription")
    ),
    tag = "subscriptions",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn unsubscribe(
    user: AuthenticatedUser,
    State(service): State<Arc<SubscriptionService>>,
    Path(mentor_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.unsubscribe(&user.sub, mentor_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Unsubscribed".to_string()),
        None,
    )))
}
