use crate::errors::ServiceError;
use chrono::Duration;
use std::sync::Arc;

pub type DynTokenService = Arc<dyn TokenServiceTrait + Send + Sync>;

pub trait TokenServiceTrait {
    fn encrypt(&self, subject: &str, ttl: Duration) -> Result<String, ServiceError>;
    /// Returns the token's subject if the signature and expiry check out.
    fn decrypt(&self, token: &str) -> Result<String, ServiceError>;
}
