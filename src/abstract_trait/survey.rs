use crate::{
    domain::survey::{AddSurveyParams, SurveyModel},
    errors::RepositoryError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSurveyRepository = Arc<dyn SurveyRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SurveyRepositoryTrait {
    async fn add(&self, params: &AddSurveyParams) -> Result<SurveyModel, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<SurveyModel>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<SurveyModel>, RepositoryError>;
}
