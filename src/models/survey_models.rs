use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

use crate::domain::survey::{SurveyAnswer, SurveyModel};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SurveyDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub question: String,
    pub answers: Vec<SurveyAnswerDocument>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SurveyAnswerDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub answer: String,
}

impl From<SurveyDocument> for SurveyModel {
    fn from(doc: SurveyDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            question: doc.question,
            answers: doc
                .answers
                .into_iter()
                .map(|a| SurveyAnswer {
                    image: a.image,
                    answer: a.answer,
                })
                .collect(),
            date: doc.date,
        }
    }
}

impl From<&SurveyAnswer> for SurveyAnswerDocument {
    fn from(answer: &SurveyAnswer) -> Self {
        Self {
            image: answer.image.clone(),
            answer: answer.answer.clone(),
        }
    }
}
