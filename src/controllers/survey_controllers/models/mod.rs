use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveSurveyResultRequest {
    #[serde(default)]
    pub answer: String,
}
