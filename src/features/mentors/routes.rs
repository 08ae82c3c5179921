//! Mentor catalog routes

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::mentors::handlers::mentor_handler;
use crate::features::mentors::services::MentorService;

/// Public read paths of the catalog
pub fn routes(service: Arc<MentorService>) -> Router {
    Router::new()
        .route("/api/mentors", get(mentor_handler::list_mentors))
        .route("/api/mentors/search", get(mentor_handler::search_mentors))
        .route(
            "/api/mentors/search/like",
            get(mentor_handler::search_mentors_like),
        )
        .route(
            "/api/mentors/recommended",
            get(mentor_handler::recommended_mentors),
        )
        .route(
            "/api/mentors/recommended/paged",
            get(mentor_handler::recommended_mentors_paged),
        )
        .route("/api/mentors/lookup", post(mentor_handler::lookup_mentors))
        .route("/api/mentors/{id}", get(mentor_handler::get_mentor))
        .with_state(service)
}

/// Catalog mutations (admin) and the per-user subscription-status read
pub fn protected_routes(service: Arc<MentorService>) -> Router {
    Router::new()
        .route("/api/mentors", post(mentor_handler::create_mentor))
        .route("/api/mentors/{id}", put(mentor_handler::update_mentor))
        .route("/api/mentors/{id}", delete(mentor_handler::delete_mentor))
        .route(
            "/api/mentors/{id}/subscription",
            get(mentor_handler::get_mentor_subscription),
        )
        .with_state(service)
}
