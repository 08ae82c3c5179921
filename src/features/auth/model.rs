use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ROLE_ADMIN;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Token subject - the opaque user id recorded as created_by/updated_by
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user can manage the mentor catalog
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_grants_catalog_access() {
        let user = AuthenticatedUser {
            sub: "u-1".to_string(),
            roles: vec!["admin".to_string(), "member".to_string()],
        };
        assert!(user.is_admin());
        assert!(user.has_role("member"));
    }

    #[test]
    fn member_is_not_admin() {
        let user = AuthenticatedUser {
            sub: "u-2".to_string(),
            roles: vec!["member".to_string()],
        };
        assert!(!user.is_admin());
        assert!(!user.has_role("missing"));
    }
}
