use tracing::{info, warn};

use crate::{
    abstract_trait::{survey::DynSurveyRepository, survey_result::DynSurveyResultRepository},
    domain::survey_result::{SaveSurveyResultParams, SurveyResultModel},
    errors::ServiceError,
};

/// Records votes and reports the per-answer tally of a survey.
///
/// Callers check that the survey exists and offers the answer before
/// calling [`SurveyResultService::save`]; nothing is re-validated here.
#[derive(Clone)]
pub struct SurveyResultService {
    surveys: DynSurveyRepository,
    results: DynSurveyResultRepository,
}

impl SurveyResultService {
    pub fn new(surveys: DynSurveyRepository, results: DynSurveyResultRepository) -> Self {
        Self { surveys, results }
    }

    /// Upserts the account's vote, then returns the survey's tally as read
    /// right after the write. The read is a separate snapshot, so it may
    /// also include votes other requests committed in between.
    pub async fn save(
        &self,
        params: &SaveSurveyResultParams,
    ) -> Result<SurveyResultModel, ServiceError> {
        info!(
            survey_id = %params.survey_id,
            account_id = %params.account_id,
            "Saving survey result"
        );

        self.results.upsert(params).await?;

        self.load(&params.survey_id).await
    }

    pub async fn load(&self, survey_id: &str) -> Result<SurveyResultModel, ServiceError> {
        let Some(survey) = self.surveys.find_by_id(survey_id).await? else {
            warn!(survey_id, "Survey disappeared before its result was aggregated");
            return Err(ServiceError::SurveyNotFound(survey_id.to_string()));
        };

        let votes = self.results.find_by_survey(survey_id).await?;

        Ok(SurveyResultModel::tally(&survey, &votes))
    }
}
