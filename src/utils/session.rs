use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{abstract_trait::token::TokenServiceTrait, errors::ServiceError};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtConfig {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenServiceTrait for JwtConfig {
    fn encrypt(&self, subject: &str, ttl: Duration) -> Result<String, ServiceError> {
        let expiration = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| ServiceError::InternalServerError("token expiry overflow".to_string()))?
            .timestamp();

        let claims = Claims {
            sub: subject.to_string(),
            exp: expiration as usize,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    fn decrypt(&self, token: &str) -> Result<String, ServiceError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims.sub)
    }
}
