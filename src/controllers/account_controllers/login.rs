use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderValue},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::controllers::account_controllers::models::LoginResponse;
use crate::domain::account::LoginRequest;
use crate::middleware::jwt::TOKEN_COOKIE;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<impl IntoResponse> {
    let auth = state.account_service.authenticate(&payload).await?;

    let cookie_value = format!(
        "{TOKEN_COOKIE}={}; Path=/; HttpOnly; Secure; SameSite=None; Max-Age=86400",
        auth.access_token
    );

    let mut resp = Json(LoginResponse {
        access_token: auth.access_token,
        name: auth.name,
    })
    .into_response();

    resp.headers_mut().insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie_value)
            .map_err(|e| AppError::InternalError(format!("Failed to create cookie header: {e}")))?,
    );

    Ok(resp)
}
