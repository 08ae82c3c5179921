//! Subscription routes. All of them act on the authenticated caller's own
//! subscription.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::subscriptions::handlers::subscription_handler;
use crate::features::subscriptions::services::SubscriptionService;

pub fn routes(service: Arc<SubscriptionService>) -> Router {
    Router::new()
        .route(
            "/api/subscriptions/me",
            get(subscription_handler::get_my_topics),
        )
        .route(
            "/api/subscriptions/topics/{mentor_id}",
            post(subscription_handler::subscribe),
        )
        .route(
            "/api/subscriptions/topics/{mentor_id}",
            delete(subscription_handler::unsubscribe),
        )
        .with_state(service)
}
