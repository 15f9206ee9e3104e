use crate::{
    domain::account::{AccountModel, AddAccountParams, UnverifiedAccountModel},
    errors::RepositoryError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAccountRepository = Arc<dyn AccountRepositoryTrait + Send + Sync>;
pub type DynUnverifiedAccountRepository = Arc<dyn UnverifiedAccountRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AccountRepositoryTrait {
    /// Fails with `RepositoryError::Conflict` when the email is taken.
    async fn add(&self, params: &AddAccountParams) -> Result<AccountModel, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, RepositoryError>;
    /// Account with this id whose stored access token is `token`.
    async fn find_by_token(
        &self,
        account_id: &str,
        token: &str,
    ) -> Result<Option<AccountModel>, RepositoryError>;
    async fn update_access_token(
        &self,
        account_id: &str,
        token: Option<&str>,
    ) -> Result<(), RepositoryError>;
    /// Returns false when no such account exists.
    async fn mark_verified(&self, account_id: &str) -> Result<bool, RepositoryError>;
    async fn delete(&self, account_id: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UnverifiedAccountRepositoryTrait {
    async fn add(&self, account_token: &str) -> Result<UnverifiedAccountModel, RepositoryError>;
    async fn find_by_account_token(
        &self,
        account_token: &str,
    ) -> Result<Option<UnverifiedAccountModel>, RepositoryError>;
    async fn delete_by_account_token(&self, account_token: &str) -> Result<(), RepositoryError>;
}
