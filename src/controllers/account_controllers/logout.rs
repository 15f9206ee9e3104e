use axum::{
    extract::{Extension, State},
    http::{header::SET_COOKIE, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::middleware::jwt::AuthAccount;
use crate::state::AppState;
use crate::utils::error::AppResult;

const EXPIRED_TOKEN_COOKIE: &str = "token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAccount>,
) -> AppResult<Response> {
    state.account_service.logout(&auth.account_id).await?;

    let mut resp = Json(json!({
        "success": true,
        "message": "Logged out successfully"
    }))
    .into_response();

    resp.headers_mut()
        .insert(SET_COOKIE, HeaderValue::from_static(EXPIRED_TOKEN_COOKIE));

    Ok(resp)
}
