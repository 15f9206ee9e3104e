use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use crate::controllers::account_controllers::models::VerifyAccountQuery;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn verify_account(
    State(state): State<AppState>,
    Query(query): Query<VerifyAccountQuery>,
) -> AppResult<Json<serde_json::Value>> {
    state
        .account_service
        .verify_account(&query.verification_hash)
        .await?;

    Ok(Json(json!({ "message": "Account verified" })))
}
