use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Claims;

/// Signs HS256 user tokens for the video provider
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: Option<u64>,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.api_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.api_secret.as_bytes()),
            expiry_seconds: config.token_expiry_seconds,
        }
    }

    /// Generate a token asserting `user_id`
    pub fn generate_token(&self, user_id: &str) -> Result<String> {
        let now = Utc::now().timestamp();
        let exp = self
            .expiry_seconds
            .map(|secs| {
                i64::try_from(secs)
                    .ok()
                    .and_then(|secs| now.checked_add(secs))
                    .ok_or_else(|| {
                        AppError::InternalError(format!("Token expiry out of range: {}", secs))
                    })
            })
            .transpose()?;

        let claims = Claims {
            user_id: user_id.to_string(),
            iat: now,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        if self.expiry_seconds.is_none() {
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}
