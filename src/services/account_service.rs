use chrono::{Duration, Utc};
use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::{
    abstract_trait::{
        account::{DynAccountRepository, DynUnverifiedAccountRepository},
        email::DynEmailService,
        hashing::DynHashing,
        token::DynTokenService,
    },
    domain::account::{AccountModel, AddAccountParams, AuthenticationModel, LoginRequest, SignUpRequest},
    errors::{format_validation_errors, RepositoryError, ServiceError},
};

const ACCESS_TOKEN_TTL_HOURS: i64 = 24;
/// Matches the TTL index of the unverified accounts collection.
const VERIFICATION_TOKEN_TTL_MINUTES: i64 = 10;

#[derive(Clone)]
pub struct AccountService {
    accounts: DynAccountRepository,
    unverified_accounts: DynUnverifiedAccountRepository,
    hashing: DynHashing,
    tokens: DynTokenService,
    email: DynEmailService,
    app_base_url: String,
}

pub struct AccountServiceDeps {
    pub accounts: DynAccountRepository,
    pub unverified_accounts: DynUnverifiedAccountRepository,
    pub hashing: DynHashing,
    pub tokens: DynTokenService,
    pub email: DynEmailService,
    pub app_base_url: String,
}

impl AccountService {
    pub fn new(deps: AccountServiceDeps) -> Self {
        let AccountServiceDeps {
            accounts,
            unverified_accounts,
            hashing,
            tokens,
            email,
            app_base_url,
        } = deps;

        Self {
            accounts,
            unverified_accounts,
            hashing,
            tokens,
            email,
            app_base_url,
        }
    }

    /// Creates an unverified account and mails its verification link.
    pub async fn sign_up(&self, req: &SignUpRequest) -> Result<AccountModel, ServiceError> {
        if let Err(errors) = req.validate() {
            let fields = format_validation_errors(&errors);
            warn!("Sign up rejected, invalid fields: {fields:?}");
            return Err(ServiceError::Validation(fields));
        }

        if self.accounts.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::EmailInUse);
        }

        let hashed_password = self.hashing.hash_password(&req.password).await?;

        let params = AddAccountParams {
            name: req.name.clone(),
            email: req.email.clone(),
            hashed_password,
            created_at: Utc::now(),
        };

        // The unique email index catches a sign up racing this one.
        let account = match self.accounts.add(&params).await {
            Ok(account) => account,
            Err(RepositoryError::Conflict(_)) => return Err(ServiceError::EmailInUse),
            Err(e) => return Err(e.into()),
        };

        // An account stays stored only once its verification link went out.
        if let Err(e) = self.send_verification(&account).await {
            warn!("Verification for account {} failed, removing it: {e}", account.id);
            if let Err(cleanup) = self.accounts.delete(&account.id).await {
                error!("Failed to remove unverified account {}: {cleanup}", account.id);
            }
            return Err(e);
        }

        info!("Account {} signed up", account.id);
        Ok(account)
    }

    async fn send_verification(&self, account: &AccountModel) -> Result<(), ServiceError> {
        let account_token = self
            .tokens
            .encrypt(&account.id, Duration::minutes(VERIFICATION_TOKEN_TTL_MINUTES))?;
        self.unverified_accounts.add(&account_token).await?;

        let link = format!(
            "{}/api/account?verificationHash={}",
            self.app_base_url, account_token
        );
        self.email
            .send_account_verification(&account.email, &link)
            .await
    }

    pub async fn authenticate(
        &self,
        req: &LoginRequest,
    ) -> Result<AuthenticationModel, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        let account = self
            .accounts
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !self
            .hashing
            .compare_password(&req.password, &account.password)
            .await?
        {
            return Err(ServiceError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .encrypt(&account.id, Duration::hours(ACCESS_TOKEN_TTL_HOURS))?;
        self.accounts
            .update_access_token(&account.id, Some(&access_token))
            .await?;

        info!("Account {} logged in", account.id);

        Ok(AuthenticationModel {
            access_token,
            name: account.name,
        })
    }

    /// `None` when the token is malformed, expired or no longer the
    /// account's current one.
    pub async fn load_by_token(&self, token: &str) -> Result<Option<AccountModel>, ServiceError> {
        let account_id = match self.tokens.decrypt(token) {
            Ok(id) => id,
            Err(e) => {
                debug!("Rejected access token: {e}");
                return Ok(None);
            }
        };

        Ok(self.accounts.find_by_token(&account_id, token).await?)
    }

    pub async fn logout(&self, account_id: &str) -> Result<(), ServiceError> {
        self.accounts.update_access_token(account_id, None).await?;
        info!("Account {} logged out", account_id);
        Ok(())
    }

    pub async fn verify_account(&self, verification_hash: &str) -> Result<(), ServiceError> {
        let record = self
            .unverified_accounts
            .find_by_account_token(verification_hash)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Unknown or expired verification hash".to_string()))?;

        let account_id = self
            .tokens
            .decrypt(&record.account_token)
            .map_err(|_| ServiceError::NotFound("Unknown or expired verification hash".to_string()))?;

        if !self.accounts.mark_verified(&account_id).await? {
            return Err(ServiceError::NotFound("Account not found".to_string()));
        }

        self.unverified_accounts
            .delete_by_account_token(verification_hash)
            .await?;

        info!("Account {} verified", account_id);
        Ok(())
    }
}
