use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{state::AppState, utils::error::AppError};

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
pub const TOKEN_COOKIE: &str = "token";

/// The caller, as resolved from its access token.
#[derive(Debug, Clone)]
pub struct AuthAccount {
    pub account_id: String,
    pub is_admin: bool,
}

pub async fn jwt_auth(
    State(state): State<AppState>,
    cookie_jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| cookie_jar.get(TOKEN_COOKIE).map(|cookie| cookie.value().to_string()))
        .ok_or(AppError::AccessDenied)?;

    let account = state
        .account_service
        .load_by_token(&token)
        .await?
        .ok_or(AppError::AccessDenied)?;

    req.extensions_mut().insert(AuthAccount {
        is_admin: account.is_admin(),
        account_id: account.id,
    });

    Ok(next.run(req).await)
}

/// Layered inside [`jwt_auth`]; lets only admin accounts through.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    match req.extensions().get::<AuthAccount>() {
        Some(account) if account.is_admin => Ok(next.run(req).await),
        _ => Err(AppError::AccessDenied),
    }
}
