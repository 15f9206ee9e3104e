use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn load_surveys(State(state): State<AppState>) -> AppResult<Response> {
    let surveys = state.survey_service.load_all().await?;

    if surveys.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(surveys).into_response())
}
