use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a mentor catalog entry.
///
/// Records are soft-deleted: `status = false` removes a mentor from every
/// read path while keeping the row for audit. There is no reactivation.
#[derive(Debug, Clone, FromRow)]
pub struct Mentor {
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

/// Summary projection of a mentor: every column except the long-form
/// description and the status flag. List, search, and recommendation reads
/// all return this shape.
#[derive(Debug, Clone, FromRow)]
pub struct MentorSummary {
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

impl From<Mentor> for MentorSummary {
    fn from(m: Mentor) -> Self {
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
