use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::controllers::account_controllers::{login, logout, signup, verify_account};
use crate::middleware::jwt::jwt_auth;
use crate::state::AppState;

pub fn account_routes(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .route(
            "/logout",
            post(logout::logout).route_layer(from_fn_with_state(state.clone(), jwt_auth)),
        )
        .route("/account", get(verify_account::verify_account))
        .with_state(state)
}
