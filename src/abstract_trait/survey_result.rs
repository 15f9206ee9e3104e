use crate::{
    domain::survey_result::{SaveSurveyResultParams, SurveyVote},
    errors::RepositoryError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSurveyResultRepository = Arc<dyn SurveyResultRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SurveyResultRepositoryTrait {
    /// Inserts or overwrites the vote keyed by `(survey_id, account_id)`.
    /// Must be atomic per key: concurrent calls never leave two votes.
    async fn upsert(&self, params: &SaveSurveyResultParams) -> Result<(), RepositoryError>;

    /// Every vote for the survey, in no particular order.
    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<SurveyVote>, RepositoryError>;
}
