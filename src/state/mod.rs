use std::sync::Arc;

use mongodb::Database;

use crate::{
    abstract_trait::{
        account::{DynAccountRepository, DynUnverifiedAccountRepository},
        email::DynEmailService,
        hashing::DynHashing,
        survey::DynSurveyRepository,
        survey_result::DynSurveyResultRepository,
        token::DynTokenService,
    },
    config::Config,
    repository::{
        AccountRepository, SurveyRepository, SurveyResultRepository, UnverifiedAccountRepository,
    },
    services::{AccountService, AccountServiceDeps, SurveyResultService, SurveyService},
    utils::{
        email::{HttpEmailService, LogEmailService},
        hashing::Hashing,
        session::JwtConfig,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub survey_service: Arc<SurveyService>,
    pub survey_result_service: Arc<SurveyResultService>,
}

pub struct AppStateDeps {
    pub accounts: DynAccountRepository,
    pub unverified_accounts: DynUnverifiedAccountRepository,
    pub surveys: DynSurveyRepository,
    pub survey_results: DynSurveyResultRepository,
    pub hashing: DynHashing,
    pub tokens: DynTokenService,
    pub email: DynEmailService,
    pub app_base_url: String,
}

impl AppState {
    pub fn new(deps: AppStateDeps) -> Self {
        let account_service = AccountService::new(AccountServiceDeps {
            accounts: deps.accounts,
            unverified_accounts: deps.unverified_accounts,
            hashing: deps.hashing,
            tokens: deps.tokens,
            email: deps.email,
            app_base_url: deps.app_base_url,
        });

        Self {
            account_service: Arc::new(account_service),
            survey_service: Arc::new(SurveyService::new(deps.surveys.clone())),
            survey_result_service: Arc::new(SurveyResultService::new(
                deps.surveys,
                deps.survey_results,
            )),
        }
    }

    /// Wires the MongoDB repositories and the configured adapters.
    pub fn from_database(db: &Database, config: &Config) -> Self {
        let email: DynEmailService = match &config.email {
            Some(email_config) => Arc::new(HttpEmailService::new(email_config.clone())),
            None => Arc::new(LogEmailService),
        };

        Self::new(AppStateDeps {
            accounts: Arc::new(AccountRepository::new(db)),
            unverified_accounts: Arc::new(UnverifiedAccountRepository::new(db)),
            surveys: Arc::new(SurveyRepository::new(db)),
            survey_results: Arc::new(SurveyResultRepository::new(db)),
            hashing: Arc::new(Hashing::new(config.salt_rounds)),
            tokens: Arc::new(JwtConfig::new(&config.jwt_secret)),
            email,
            app_base_url: config.app_base_url.clone(),
        })
    }
}
