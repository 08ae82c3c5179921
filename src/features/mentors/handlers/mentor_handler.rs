use axum::{extract::Path, extract::Query, extract::State, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::mentors::dtos::{
    CreateMentorDto, MentorIdsDto, MentorResponseDto, MentorSubscriptionDto, MentorSummaryDto,
    RecommendedQuery, SearchQuery, UpdateMentorDto,
};
use crate::features::mentors::services::MentorService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// Create a new mentor (admin only)
#[utoipa::path(
    post,
    path = "/api/mentors",
    request_body = CreateMentorDto,
    responses(
        (status = 201, description = "Mentor created successfully", body = ApiResponse<MentorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_mentor(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<MentorService>>,
    AppJson(dto): AppJson<CreateMentorDto>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mentor = service.create(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(MentorResponseDto::from(mentor)),
        None,
        None,
    )))
}

/// Update a mentor (admin only)
#[utoipa::path(
    put,
    path = "/api/mentors/{id}",
    params(
        ("id" = Uuid, Path, description = "Mentor ID")
    ),
    request_body = UpdateMentorDto,
    responses(
        (status = 200, description = "Mentor updated successfully", body = ApiResponse<MentorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Mentor not found or inactive"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_mentor(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<MentorService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMentorDto>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mentor = service.update(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(MentorResponseDto::from(mentor)),
        None,
        None,
    )))
}

/// Deactivate a mentor (admin only). The record is retained but leaves
/// every read path.
#[utoipa::path(
    delete,
    path = "/api/mentors/{id}",
    params(
        ("id" = Uuid, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Mentor deactivated successfully", body = ApiResponse<MentorResponseDto>),
        (status = 404, description = "Mentor not found or already inactive"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_mentor(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<MentorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    let mentor = service.deactivate(id).await?;
    Ok(Json(ApiResponse::success(
        Some(MentorResponseDto::from(mentor)),
        None,
        None,
    )))
}

/// Get a mentor by ID
#[utoipa::path(
    get,
    path = "/api/mentors/{id}",
    params(
        ("id" = Uuid, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Mentor retrieved successfully", body = ApiResponse<MentorResponseDto>),
        (status = 404, description = "Mentor not found")
    ),
    tag = "mentors"
)]
pub async fn get_mentor(
    State(service): State<Arc<MentorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    // Absent is not an error at the service layer; the HTTP surface maps it
    // to 404.
    let mentor = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", id)))?;

    Ok(Json(ApiResponse::success(
        Some(MentorResponseDto::from(mentor)),
        None,
        None,
    )))
}

/// Batch lookup mentors by id. Missing ids are silently absent from the
/// result.
#[utoipa::path(
    post,
    path = "/api/mentors/lookup",
    request_body = MentorIdsDto,
    responses(
        (status = 200, description = "Mentors retrieved successfully", body = ApiResponse<Vec<MentorSummaryDto>>),
        (status = 400, description = "Validation error")
    ),
    tag = "mentors"
)]
pub async fn lookup_mentors(
    State(service): State<Arc<MentorService>>,
    AppJson(dto): AppJson<MentorIdsDto>,
) -> Result<Json<ApiResponse<Vec<MentorSummaryDto>>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mentors = service.find_by_ids(&dto.ids).await?;
    Ok(Json(ApiResponse::success(Some(mentors), None, None)))
}

/// List mentors, most recently updated first
#[utoipa::path(
    get,
    path = "/api/mentors",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Mentors retrieved successfully", body = ApiResponse<Vec<MentorSummaryDto>>)
    ),
    tag = "mentors"
)]
pub async fn list_mentors(
    State(service): State<Arc<MentorService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MentorSummaryDto>>>> {
    let mentors = service.find_paginated(&pagination).await?;
    Ok(Json(ApiResponse::success(Some(mentors), None, None)))
}

/// Full-text search over the catalog
#[utoipa::path(
    get,
    path = "/api/mentors/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching mentors", body = ApiResponse<Vec<MentorSummaryDto>>),
        (status = 400, description = "Empty query")
    ),
    tag = "mentors"
)]
pub async fn search_mentors(
    State(service): State<Arc<MentorService>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<MentorSummaryDto>>>> {
    if params.q.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Search query must not be empty".to_string(),
        ));
    }

    let mentors = service.search(&params.q, params.limit()).await?;
    Ok(Json(ApiResponse::success(Some(mentors), None, None)))
}

/// Substring search over name, occupation, and title. Fallback for queries
/// too short or partial for the text index.
#[utoipa::path(
    get,
    path = "/api/mentors/search/like",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching mentors", body = ApiResponse<Vec<MentorSummaryDto>>),
        (status = 400, description = "Empty query")
    ),
    tag = "mentors"
)]
pub async fn search_mentors_like(
    State(service): State<Arc<MentorService>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<MentorSummaryDto>>>> {
    if params.q.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Search query must not be empty".to_string(),
        ));
    }

    let mentors = service.search_like(&params.q, params.limit()).await?;
    Ok(Json(ApiResponse::success(Some(mentors), None, None)))
}

/// Highest-recommended mentors
#[utoipa::path(
    get,
    path = "/api/mentors/recommended",
    params(RecommendedQuery),
    responses(
        (status = 200, description = "Recommended mentors", body = ApiResponse<Vec<MentorSummaryDto>>)
    ),
    tag = "mentors"
)]
pub async fn recommended_mentors(
    State(service): State<Arc<MentorService>>,
    Query(params): Query<RecommendedQuery>,
) -> Result<Json<ApiResponse<Vec<MentorSummaryDto>>>> {
    let mentors = service.find_recommended(params.limit()).await?;
    Ok(Json(ApiResponse::success(Some(mentors), None, None)))
}

/// Recommended mentors, paginated
#[utoipa::path(
    get,
    path = "/api/mentors/recommended/paged",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Recommended mentors page", body = ApiResponse<Vec<MentorSummaryDto>>)
    ),
    tag = "mentors"
)]
pub async fn recommended_mentors_paged(
    State(service): State<Arc<MentorService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MentorSummaryDto>>>> {
    let mentors = service.find_recommended_paginated(&pagination).await?;
    Ok(Json(ApiResponse::success(Some(mentors), None, None)))
}

/// Get a mentor together with the caller's subscription status for them
#[utoipa::path(
    get,
    path = "/api/mentors/{id}/subscription",
    params(
        ("id" = Uuid, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Mentor with subscription status", body = ApiResponse<MentorSubscriptionDto>),
        (status = 404, description = "Mentor not found")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_mentor_subscription(
    user: AuthenticatedUser,
    State(service): State<Arc<MentorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MentorSubscriptionDto>>> {
    let result = service.find_subscription_status(id, &user).await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}
