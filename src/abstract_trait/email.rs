use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEmailService = Arc<dyn EmailServiceTrait + Send + Sync>;

#[async_trait]
pub trait EmailServiceTrait {
    async fn send_account_verification(
        &self,
        email: &str,
        verification_link: &str,
    ) -> Result<(), ServiceError>;
}
