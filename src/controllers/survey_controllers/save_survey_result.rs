use axum::{
    extract::{Extension, Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;

use crate::controllers::survey_controllers::models::SaveSurveyResultRequest;
use crate::domain::survey_result::{SaveSurveyResultParams, SurveyResultModel};
use crate::middleware::jwt::AuthAccount;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn save_survey_result(
    Path(survey_id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAccount>,
    WithRejection(Json(payload), _): WithRejection<Json<SaveSurveyResultRequest>, AppError>,
) -> AppResult<Json<SurveyResultModel>> {
    let survey = state
        .survey_service
        .load_by_id(&survey_id)
        .await?
        .ok_or_else(|| AppError::InvalidParam("surveyId".to_string()))?;

    if !survey.has_answer(&payload.answer) {
        return Err(AppError::InvalidParam("answer".to_string()));
    }

    let result = state
        .survey_result_service
        .save(&SaveSurveyResultParams {
            survey_id: survey.id,
            account_id: auth.account_id,
            answer: payload.answer,
            date: Utc::now(),
        })
        .await?;

    Ok(Json(result))
}
