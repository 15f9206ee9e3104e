use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SurveyAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[validate(length(min = 1))]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyModel {
    pub id: String,
    pub question: String,
    pub answers: Vec<SurveyAnswer>,
    pub date: DateTime<Utc>,
}

impl SurveyModel {
    pub fn has_answer(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| a.answer == answer)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddSurveyRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub question: String,

    #[validate(length(min = 1), nested)]
    #[serde(default)]
    pub answers: Vec<SurveyAnswer>,
}

#[derive(Debug, Clone)]
pub struct AddSurveyParams {
    pub question: String,
    pub answers: Vec<SurveyAnswer>,
    pub date: DateTime<Utc>,
}
