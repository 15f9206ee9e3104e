use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};

use super::{SURVEYS, parse_object_id};
use crate::{
    abstract_trait::survey::SurveyRepositoryTrait,
    domain::survey::{AddSurveyParams, SurveyModel},
    errors::RepositoryError,
    models::survey_models::{SurveyAnswerDocument, SurveyDocument},
};

#[derive(Clone)]
pub struct SurveyRepository {
    collection: Collection<SurveyDocument>,
}

impl SurveyRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<SurveyDocument>(SURVEYS),
        }
    }
}

#[async_trait]
impl SurveyRepositoryTrait for SurveyRepository {
    async fn add(&self, params: &AddSurveyParams) -> Result<SurveyModel, RepositoryError> {
        let survey = SurveyDocument {
            id: ObjectId::new(),
            question: params.question.clone(),
            answers: params.answers.iter().map(SurveyAnswerDocument::from).collect(),
            date: params.date,
        };

        self.collection.insert_one(&survey).await?;

        Ok(survey.into())
    }

    async fn find_all(&self) -> Result<Vec<SurveyModel>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await?;
        let surveys: Vec<SurveyDocument> = cursor.try_collect().await?;

        Ok(surveys.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<SurveyModel>, RepositoryError> {
        // A malformed id cannot name a stored survey.
        let Ok(obj_id) = parse_object_id(id) else {
            return Ok(None);
        };

        let survey = self.collection.find_one(doc! { "_id": obj_id }).await?;
        Ok(survey.map(Into::into))
    }
}
