//! In-memory stand-ins for the persistence, hashing and email adapters.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::{
    abstract_trait::{
        account::{AccountRepositoryTrait, UnverifiedAccountRepositoryTrait},
        email::EmailServiceTrait,
        hashing::HashingTrait,
        survey::{DynSurveyRepository, SurveyRepositoryTrait},
        survey_result::SurveyResultRepositoryTrait,
    },
    domain::{
        account::{AccountModel, AddAccountParams, UnverifiedAccountModel, ADMIN_ROLE},
        survey::{AddSurveyParams, SurveyAnswer, SurveyModel},
        survey_result::{SaveSurveyResultParams, SurveyVote},
    },
    errors::{RepositoryError, ServiceError},
    state::{AppState, AppStateDeps},
    utils::session::JwtConfig,
};

fn new_id() -> String {
    ObjectId::new().to_hex()
}

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<AccountModel>>,
}

impl InMemoryAccountRepository {
    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<AccountModel> {
        self.accounts.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }

    /// Stores an admin whose password hashes with [`PlainHashing`].
    pub fn insert_admin(&self, email: &str, password: &str) -> AccountModel {
        let account = AccountModel {
            id: new_id(),
            name: "admin".to_string(),
            email: email.to_string(),
            password: PlainHashing::digest(password),
            verified: true,
            role: Some(ADMIN_ROLE.to_string()),
            access_token: None,
            created_at: Utc::now(),
        };
        self.accounts.lock().unwrap().push(account.clone());
        account
    }
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryAccountRepository {
    async fn add(&self, params: &AddAccountParams) -> Result<AccountModel, RepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == params.email) {
            return Err(RepositoryError::Conflict(params.email.clone()));
        }

        let account = AccountModel {
            id: new_id(),
            name: params.name.clone(),
            email: params.email.clone(),
            password: params.hashed_password.clone(),
            verified: false,
            role: None,
            access_token: None,
            created_at: params.created_at,
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, RepositoryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_token(
        &self,
        account_id: &str,
        token: &str,
    ) -> Result<Option<AccountModel>, RepositoryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == account_id && a.access_token.as_deref() == Some(token))
            .cloned())
    }

    async fn update_access_token(
        &self,
        account_id: &str,
        token: Option<&str>,
    ) -> Result<(), RepositoryError> {
        if let Some(account) = self
            .accounts
            .lock()
            .unwrap()
            .iter_mut()
            .find(|a| a.id == account_id)
        {
            account.access_token = token.map(str::to_string);
        }
        Ok(())
    }

    async fn mark_verified(&self, account_id: &str) -> Result<bool, RepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.iter_mut().find(|a| a.id == account_id) {
            Some(account) => {
                account.verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, account_id: &str) -> Result<(), RepositoryError> {
        self.accounts.lock().unwrap().retain(|a| a.id != account_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUnverifiedAccountRepository {
    records: Mutex<Vec<UnverifiedAccountModel>>,
}

impl InMemoryUnverifiedAccountRepository {
    pub fn tokens(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.account_token.clone())
            .collect()
    }
}

#[async_trait]
impl UnverifiedAccountRepositoryTrait for InMemoryUnverifiedAccountRepository {
    async fn add(&self, account_token: &str) -> Result<UnverifiedAccountModel, RepositoryError> {
        let record = UnverifiedAccountModel {
            account_token: account_token.to_string(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_account_token(
        &self,
        account_token: &str,
    ) -> Result<Option<UnverifiedAccountModel>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.account_token == account_token)
            .cloned())
    }

    async fn delete_by_account_token(&self, account_token: &str) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.account_token != account_token);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySurveyRepository {
    surveys: Mutex<Vec<SurveyModel>>,
}

impl InMemorySurveyRepository {
    pub fn insert_with_id(&self, id: &str, question: &str, answers: &[&str]) -> SurveyModel {
        let survey = SurveyModel {
            id: id.to_string(),
            question: question.to_string(),
            answers: answers
                .iter()
                .map(|a| SurveyAnswer {
                    image: None,
                    answer: a.to_string(),
                })
                .collect(),
            date: Utc::now(),
        };
        self.surveys.lock().unwrap().push(survey.clone());
        survey
    }
}

#[async_trait]
impl SurveyRepositoryTrait for InMemorySurveyRepository {
    async fn add(&self, params: &AddSurveyParams) -> Result<SurveyModel, RepositoryError> {
        let survey = SurveyModel {
            id: new_id(),
            question: params.question.clone(),
            answers: params.answers.clone(),
            date: params.date,
        };
        self.surveys.lock().unwrap().push(survey.clone());
        Ok(survey)
    }

    async fn find_all(&self) -> Result<Vec<SurveyModel>, RepositoryError> {
        Ok(self.surveys.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<SurveyModel>, RepositoryError> {
        Ok(self
            .surveys
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}

/// Answers the first `lookups` calls to `find_by_id` from the inner store,
/// then reports every survey as gone.
pub struct VanishingSurveyRepository {
    inner: Arc<InMemorySurveyRepository>,
    lookups_left: AtomicUsize,
}

impl VanishingSurveyRepository {
    pub fn new(inner: Arc<InMemorySurveyRepository>, lookups: usize) -> Self {
        Self {
            inner,
            lookups_left: AtomicUsize::new(lookups),
        }
    }
}

#[async_trait]
impl SurveyRepositoryTrait for VanishingSurveyRepository {
    async fn add(&self, params: &AddSurveyParams) -> Result<SurveyModel, RepositoryError> {
        self.inner.add(params).await
    }

    async fn find_all(&self) -> Result<Vec<SurveyModel>, RepositoryError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<SurveyModel>, RepositoryError> {
        let gone = self
            .lookups_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_err();
        if gone {
            return Ok(None);
        }
        self.inner.find_by_id(id).await
    }
}

/// Keyed by `(survey_id, account_id)`, so an upsert is a single map insert
/// under the lock.
#[derive(Default)]
pub struct InMemorySurveyResultRepository {
    votes: Mutex<HashMap<(String, String), SurveyVote>>,
}

impl InMemorySurveyResultRepository {
    pub fn len(&self) -> usize {
        self.votes.lock().unwrap().len()
    }

    pub fn stored(&self, survey_id: &str, account_id: &str) -> Option<SurveyVote> {
        self.votes
            .lock()
            .unwrap()
            .get(&(survey_id.to_string(), account_id.to_string()))
            .cloned()
    }
}

#[async_trait]
impl SurveyResultRepositoryTrait for InMemorySurveyResultRepository {
    async fn upsert(&self, params: &SaveSurveyResultParams) -> Result<(), RepositoryError> {
        self.votes.lock().unwrap().insert(
            (params.survey_id.clone(), params.account_id.clone()),
            SurveyVote::from(params),
        );
        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<SurveyVote>, RepositoryError> {
        Ok(self
            .votes
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.survey_id == survey_id)
            .cloned()
            .collect())
    }
}

pub struct FailingSurveyResultRepository;

#[async_trait]
impl SurveyResultRepositoryTrait for FailingSurveyResultRepository {
    async fn upsert(&self, params: &SaveSurveyResultParams) -> Result<(), RepositoryError> {
        Err(RepositoryError::InvalidId(params.account_id.clone()))
    }

    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<SurveyVote>, RepositoryError> {
        Err(RepositoryError::InvalidId(survey_id.to_string()))
    }
}

/// Reversible stand-in for bcrypt.
pub struct PlainHashing;

impl PlainHashing {
    pub fn digest(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl HashingTrait for PlainHashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        Ok(Self::digest(password))
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> Result<bool, ServiceError> {
        Ok(Self::digest(password) == hashed)
    }
}

#[derive(Default)]
pub struct RecordingEmailService {
    sent: Mutex<Vec<(String, String)>>,
    failing: AtomicBool,
}

impl RecordingEmailService {
    /// While set, every send fails and nothing is recorded.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// `(recipient, verification link)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmailService {
    async fn send_account_verification(
        &self,
        email: &str,
        verification_link: &str,
    ) -> Result<(), ServiceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Email("mail API unavailable".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), verification_link.to_string()));
        Ok(())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub unverified_accounts: Arc<InMemoryUnverifiedAccountRepository>,
    pub surveys: Arc<InMemorySurveyRepository>,
    pub survey_results: Arc<InMemorySurveyResultRepository>,
    pub email: Arc<RecordingEmailService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(|surveys| surveys)
    }

    /// The first survey lookup of a request succeeds; later ones find nothing.
    pub fn with_vanishing_surveys() -> Self {
        Self::build(|surveys| Arc::new(VanishingSurveyRepository::new(surveys, 1)))
    }

    fn build(wrap: impl FnOnce(Arc<InMemorySurveyRepository>) -> DynSurveyRepository) -> Self {
        let accounts = Arc::new(InMemoryAccountRepository::default());
        let unverified_accounts = Arc::new(InMemoryUnverifiedAccountRepository::default());
        let surveys = Arc::new(InMemorySurveyRepository::default());
        let survey_results = Arc::new(InMemorySurveyResultRepository::default());
        let email = Arc::new(RecordingEmailService::default());

        let state = AppState::new(AppStateDeps {
            accounts: accounts.clone(),
            unverified_accounts: unverified_accounts.clone(),
            surveys: wrap(surveys.clone()),
            survey_results: survey_results.clone(),
            hashing: Arc::new(PlainHashing),
            tokens: Arc::new(JwtConfig::new("test-secret")),
            email: email.clone(),
            app_base_url: "http://localhost:8000".to_string(),
        });

        Self {
            state,
            accounts,
            unverified_accounts,
            surveys,
            survey_results,
            email,
        }
    }
}
