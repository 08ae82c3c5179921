/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default result cap for search and recommendation endpoints
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum result cap for search and recommendation endpoints
pub const MAX_SEARCH_LIMIT: i64 = 50;

/// Recommendation score assigned to mentors created without one
pub const DEFAULT_MENTOR_SCORE: f64 = 0.01;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can manage the mentor catalog
pub const ROLE_ADMIN: &str = "admin";

/// Member role - can browse mentors and manage their own subscription
#[allow(dead_code)]
pub const ROLE_MEMBER: &str = "member";
