//! Role-based authorization guards.
//!
//! Guards extract the authenticated user from request extensions and verify
//! the required role. Catalog mutations require the admin role; everything
//! else only needs an authenticated user.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is an admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{with_admin_auth, with_member_auth};
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn probe(RequireAdmin(user): RequireAdmin) -> String {
        user.sub
    }

    fn probe_router() -> Router {
        Router::new().route("/probe", get(probe))
    }

    #[tokio::test]
    async fn admin_passes_guard() {
        let server = TestServer::new(with_admin_auth(probe_router())).unwrap();
        let response = server.get("/probe").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "test-admin-sub");
    }

    #[tokio::test]
    async fn member_is_forbidden() {
        let server = TestServer::new(with_member_auth(probe_router())).unwrap();
        let response = server.get("/probe").await;
        assert_eq!(response.status_code(), 403);
    }

    #[tokio::test]
    async fn unauthenticated_request_is_rejected() {
        let server = TestServer::new(probe_router()).unwrap();
        let response = server.get("/probe").await;
        assert_eq!(response.status_code(), 401);
    }
}
