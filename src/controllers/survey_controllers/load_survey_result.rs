use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::survey_result::SurveyResultModel;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn load_survey_result(
    Path(survey_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<SurveyResultModel>> {
    if state.survey_service.load_by_id(&survey_id).await?.is_none() {
        return Err(AppError::InvalidParam("surveyId".to_string()));
    }

    let result = state.survey_result_service.load(&survey_id).await?;

    Ok(Json(result))
}
