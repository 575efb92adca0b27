use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use mindwell_core::s3_keys;
use serde::Deserialize;

use crate::error::AuthError;

/// Claims carried by a session token.
///
/// Older tokens identify the user with `userId` instead of `sub`; either is
/// accepted, `sub` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    pub exp: u64,
}

impl SessionClaims {
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.user_id.as_deref())
    }
}

/// HS256 verifier holding the shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.required_spec_claims = ["exp".to_string()].into_iter().collect();

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and return its subject id.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let token_data = decode::<SessionClaims>(token, &self.key, &self.validation)?;

        let subject = token_data
            .claims
            .subject()
            .ok_or_else(|| AuthError::InvalidToken("token has no subject".to_string()))?;

        s3_keys::validate_subject_id(subject)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(subject.to_string())
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)
}
