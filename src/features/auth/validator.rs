use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;

/// Claims expected in tokens from the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub exp: u64,
}

/// Validates bearer JWTs against the shared signing secret and the
/// configured issuer/audience.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthenticatedUser {
            sub: data.claims.sub,
            roles: data.claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::Duration;

    const SECRET: &str = "test-secret";

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            issuer: "https://id.example.com".to_string(),
            audience: "mentorhub-api".to_string(),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn sign(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> u64 {
        (chrono::Utc::now().timestamp() + 3600) as u64
    }

    #[test]
    fn valid_token_yields_user() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&Claims {
            sub: "user-42".to_string(),
            roles: vec!["admin".to_string()],
            iss: "https://id.example.com".to_string(),
            aud: "mentorhub-api".to_string(),
            exp: future_exp(),
        });

        let user = validator.validate_token(&token).unwrap();
        assert_eq!(user.sub, "user-42");
        assert!(user.is_admin());
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&Claims {
            sub: "user-42".to_string(),
            roles: vec![],
            iss: "https://id.example.com".to_string(),
            aud: "other-api".to_string(),
            exp: future_exp(),
        });

        assert!(matches!(
            validator.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let validator = JwtValidator::new(&test_config());
        let token = sign(&Claims {
            sub: "user-42".to_string(),
            roles: vec![],
            iss: "https://id.example.com".to_string(),
            aud: "mentorhub-api".to_string(),
            exp: (chrono::Utc::now().timestamp() - 3600) as u64,
        });

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let validator = JwtValidator::new(&test_config());
        assert!(validator.validate_token("not.a.jwt").is_err());
    }
}
