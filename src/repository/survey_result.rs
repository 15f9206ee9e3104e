use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, doc},
};
use tracing::debug;

use super::{SURVEY_RESULTS, parse_object_id};
use crate::{
    abstract_trait::survey_result::SurveyResultRepositoryTrait,
    domain::survey_result::{SaveSurveyResultParams, SurveyVote},
    errors::RepositoryError,
    models::survey_result_models::SurveyResultDocument,
};

#[derive(Clone)]
pub struct SurveyResultRepository {
    collection: Collection<SurveyResultDocument>,
}

impl SurveyResultRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<SurveyResultDocument>(SURVEY_RESULTS),
        }
    }
}

#[async_trait]
impl SurveyResultRepositoryTrait for SurveyResultRepository {
    async fn upsert(&self, params: &SaveSurveyResultParams) -> Result<(), RepositoryError> {
        let survey_id = parse_object_id(&params.survey_id)?;
        let account_id = parse_object_id(&params.account_id)?;

        // Backed by the unique {surveyId, accountId} index; the server retries
        // an upsert that races another one on the same key.
        let result = self
            .collection
            .update_one(
                doc! { "surveyId": survey_id, "accountId": account_id },
                doc! {
                    "$set": {
                        "answer": params.answer.as_str(),
                        "date": bson::DateTime::from_chrono(params.date),
                    }
                },
            )
            .upsert(true)
            .await?;

        debug!(
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "survey result upserted"
        );

        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<SurveyVote>, RepositoryError> {
        let Ok(obj_id) = parse_object_id(survey_id) else {
            return Ok(Vec::new());
        };

        let cursor = self.collection.find(doc! { "surveyId": obj_id }).await?;
        let votes: Vec<SurveyResultDocument> = cursor.try_collect().await?;

        Ok(votes.into_iter().map(Into::into).collect())
    }
}
