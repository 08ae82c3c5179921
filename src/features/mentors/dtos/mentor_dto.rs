use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::mentors::models::{Mentor, MentorSummary};
use crate::shared::constants::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::shared::validation::IMAGE_URL_REGEX;

// Create request. Field bounds mirror the mentors table constraints; the
// handler validates before the service is invoked.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMentorDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[validate(length(min = 1, max = 300))]
    pub title: String,

    #[validate(length(max = 300), regex(path = *IMAGE_URL_REGEX, message = "thumbnail must be an absolute http(s) URL"))]
    pub thumbnail: String,

    #[validate(length(min = 1, max = 50))]
    pub occupation: String,

    #[validate(length(min = 1, max = 10000))]
    pub description: String,

    #[validate(length(max = 300), regex(path = *IMAGE_URL_REGEX, message = "cover_img_url must be an absolute http(s) URL"))]
    pub cover_img_url: String,

    /// Recommendation weight in [0, 1]; defaults to 0.01 when omitted
    #[validate(range(min = 0.0, max = 1.0))]
    pub score: Option<f64>,
}

// Update request. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMentorDto {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,

    #[validate(length(max = 300), regex(path = *IMAGE_URL_REGEX, message = "thumbnail must be an absolute http(s) URL"))]
    pub thumbnail: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub occupation: Option<String>,

    #[validate(length(min = 1, max = 10000))]
    pub description: Option<String>,

    #[validate(length(max = 300), regex(path = *IMAGE_URL_REGEX, message = "cover_img_url must be an absolute http(s) URL"))]
    pub cover_img_url: Option<String>,

    #[validate(range(min = 0.0, max = 1.0))]
    pub score: Option<f64>,
}

/// Batch lookup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MentorIdsDto {
    #[validate(length(min = 1, max = 100))]
    pub ids: Vec<Uuid>,
}

// =============================================================================
// QUERY PARAMS
// =============================================================================

/// Query parameters for the search endpoints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search query
    pub q: String,

    /// Maximum number of results (default: 20, max: 50)
    #[param(minimum = 1, maximum = 50)]
    pub limit: Option<i64>,
}

impl SearchQuery {
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT)
    }
}

/// Query parameters for the capped recommendation endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RecommendedQuery {
    /// Maximum number of results (default: 20, max: 50)
    #[param(minimum = 1, maximum = 50)]
    pub limit: Option<i64>,
}

impl RecommendedQuery {
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT)
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Full mentor view, returned by single-record operations
#[derive(Debug, Serialize, ToSchema)]
pub struct MentorResponseDto {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub thumbnail: String,
    pub occupation: String,
    pub description: String,
    pub cover_img_url: String,
    pub score: f64,
    pub status: bool,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Mentor> for MentorResponseDto {
    fn from(m: Mentor) -> Self {
        Self {
            id: m.id,
            name: m.name,
            title: m.title,
            thumbnail: m.thumbnail,
            occupation: m.occupation,
            description: m.description,
            cover_img_url: m.cover_img_url,
            score: m.score,
            status: m.status,
            created_by: m.created_by,
            updated_by: m.updated_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Summary mentor view, returned by list/search/recommendation reads
#[derive(Debug, Serialize, ToSchema)]
pub struct MentorSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub thumbnail: String,
    pub occupation: String,
    pub cover_img_url: String,
    pub score: f64,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MentorSummary> for MentorSummaryDto {
    fn from(m: MentorSummary) -> Self {
        Self {
            id: m.id,
            name: m.name,
            title: m.title,
            thumbnail: m.thumbnail,
            occupation: m.occupation,
            cover_img_url: m.cover_img_url,
            score: m.score,
            created_by: m.created_by,
            updated_by: m.updated_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Combined mentor + subscription-status view
#[derive(Debug, Serialize, ToSchema)]
pub struct MentorSubscriptionDto {
    pub mentor: MentorSummaryDto,
    pub subscribed: bool,
}

impl MentorSubscriptionDto {
    pub fn new(mentor: MentorSummaryDto, subscribed: bool) -> Self {
        Self { mentor, subscribed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::company::en::Profession;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_create_dto() -> CreateMentorDto {
        CreateMentorDto {
            name: Name().fake(),
            title: Sentence(3..8).fake(),
            thumbnail: "https://cdn.example.com/thumb.png".to_string(),
            occupation: Profession().fake(),
            description: Sentence(10..20).fake(),
            cover_img_url: "https://cdn.example.com/cover.jpg".to_string(),
            score: Some(0.5),
        }
    }

    #[test]
    fn valid_payload_passes_validation() {
        assert!(valid_create_dto().validate().is_ok());
    }

    #[test]
    fn score_is_optional() {
        let payload = serde_json::json!({
            "name": "Ada",
            "title": "Compiler pioneer",
            "thumbnail": "https://cdn.example.com/a.png",
            "occupation": "Engineer",
            "description": "Wrote the first program.",
            "cover_img_url": "https://cdn.example.com/b.jpg",
        });
        let dto: CreateMentorDto = serde_json::from_value(payload).unwrap();
        assert!(dto.score.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn field_length_bounds_are_enforced() {
        let mut dto = valid_create_dto();
        dto.name = "x".repeat(51);
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.occupation = "x".repeat(51);
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.description = "x".repeat(10_001);
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.title = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn score_out_of_bounds_is_rejected() {
        let mut dto = valid_create_dto();
        dto.score = Some(1.2);
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.score = Some(-0.1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn image_urls_must_be_absolute() {
        let mut dto = valid_create_dto();
        dto.thumbnail = "not a url".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_create_dto();
        dto.cover_img_url = "//cdn.example.com/c.jpg".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        let dto: UpdateMentorDto = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.name.is_none());
    }

    #[test]
    fn search_limit_defaults_and_clamps() {
        let q = SearchQuery {
            q: "rust".to_string(),
            limit: None,
        };
        assert_eq!(q.limit(), DEFAULT_SEARCH_LIMIT);

        let q = SearchQuery {
            q: "rust".to_string(),
            limit: Some(500),
        };
        assert_eq!(q.limit(), MAX_SEARCH_LIMIT);

        let q = RecommendedQuery { limit: Some(0) };
        assert_eq!(q.limit(), 1);
    }

    #[test]
    fn summary_projection_drops_description_and_status() {
        let mentor = Mentor {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            title: "Compiler pioneer".to_string(),
            thumbnail: "https://cdn.example.com/a.png".to_string(),
            occupation: "Engineer".to_string(),
            description: "Long form text".to_string(),
            cover_img_url: "https://cdn.example.com/b.jpg".to_string(),
            score: 0.9,
            status: true,
            created_by: "admin-1".to_string(),
            updated_by: "admin-1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let summary = MentorSummaryDto::from(MentorSummary::from(mentor.clone()));
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("description").is_none());
        assert!(value.get("status").is_none());
        assert_eq!(value["id"], serde_json::json!(mentor.id));
        assert_eq!(value["score"], serde_json::json!(0.9));
    }
}
