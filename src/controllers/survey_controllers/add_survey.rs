use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::domain::survey::AddSurveyRequest;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn add_survey(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<AddSurveyRequest>, AppError>,
) -> AppResult<StatusCode> {
    state.survey_service.add(&payload).await?;

    Ok(StatusCode::NO_CONTENT)
}
