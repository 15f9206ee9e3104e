use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    abstract_trait::survey::DynSurveyRepository,
    domain::survey::{AddSurveyParams, AddSurveyRequest, SurveyModel},
    errors::{format_validation_errors, ServiceError},
};

#[derive(Clone)]
pub struct SurveyService {
    surveys: DynSurveyRepository,
}

impl SurveyService {
    pub fn new(surveys: DynSurveyRepository) -> Self {
        Self { surveys }
    }

    pub async fn add(&self, req: &AddSurveyRequest) -> Result<SurveyModel, ServiceError> {
        if let Err(errors) = req.validate() {
            let fields = format_validation_errors(&errors);
            warn!("Survey rejected, invalid fields: {fields:?}");
            return Err(ServiceError::Validation(fields));
        }

        let mut seen = HashSet::new();
        if !req.answers.iter().all(|a| seen.insert(a.answer.as_str())) {
            return Err(ServiceError::Validation(vec!["answers".to_string()]));
        }

        let survey = self
            .surveys
            .add(&AddSurveyParams {
                question: req.question.clone(),
                answers: req.answers.clone(),
                date: Utc::now(),
            })
            .await?;

        info!("Survey {} created with {} answers", survey.id, survey.answers.len());
        Ok(survey)
    }

    pub async fn load_all(&self) -> Result<Vec<SurveyModel>, ServiceError> {
        Ok(self.surveys.find_all().await?)
    }

    pub async fn load_by_id(&self, id: &str) -> Result<Option<SurveyModel>, ServiceError> {
        Ok(self.surveys.find_by_id(id).await?)
    }
}
