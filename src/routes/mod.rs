use axum::{routing::get, Router};

use crate::controllers::health;
use crate::state::AppState;

pub mod account_routes;
pub mod survey_routes;

pub fn app(state: AppState) -> Router {
    let api = account_routes::account_routes(state.clone())
        .nest("/surveys", survey_routes::survey_routes(state));

    Router::new()
        .route("/", get(health::root))
        .nest("/api", api)
}
