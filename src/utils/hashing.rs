use async_trait::async_trait;

use crate::{abstract_trait::hashing::HashingTrait, errors::ServiceError};

/// bcrypt adapter. Hashing runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| ServiceError::InternalServerError(format!("hashing task failed: {e}")))?
            .map_err(ServiceError::from)
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> Result<bool, ServiceError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| ServiceError::InternalServerError(format!("hashing task failed: {e}")))?
            .map_err(ServiceError::from)
    }
}
