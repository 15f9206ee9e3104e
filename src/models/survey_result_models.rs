use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

use crate::domain::survey_result::SurveyVote;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResultDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub survey_id: ObjectId,
    pub account_id: ObjectId,
    pub answer: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

impl From<SurveyResultDocument> for SurveyVote {
    fn from(doc: SurveyResultDocument) -> Self {
        Self {
            survey_id: doc.survey_id.to_hex(),
            account_id: doc.account_id.to_hex(),
            answer: doc.answer,
            date: doc.date,
        }
    }
}
