use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::core::entities::{Role, User};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user ID
    pub sub: String,
    pub role: String,
    /// Expiry time as Unix timestamp
    pub exp: i64,
}

pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    time_valid: Duration,
}

/// A secret for signing tokens that are only valid
/// until the process terminates.
fn generate_random_secret() -> String {
    STANDARD.encode(rand::random::<[u8; 32]>())
}

impl JwtState {
    pub fn new(secret: &str, time_valid: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            time_valid,
        }
    }

    pub fn random(time_valid: Duration) -> Self {
        Self::new(&generate_random_secret(), time_valid)
    }

    pub fn generate_token(&self, user: &User) -> Result<String> {
        let exp = (OffsetDateTime::now_utc() + self.time_valid).unix_timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.to_string(),
            exp,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}
