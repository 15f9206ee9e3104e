use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::controllers::account_controllers::models::SignUpResponse;
use crate::domain::account::SignUpRequest;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn signup(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<SignUpRequest>, AppError>,
) -> AppResult<Json<SignUpResponse>> {
    let account = state.account_service.sign_up(&payload).await?;

    Ok(Json(SignUpResponse {
        message: "Ok".to_string(),
        account: account.into(),
    }))
}
