use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, put},
    Router,
};

use crate::controllers::survey_controllers::{
    add_survey, load_survey_result, load_surveys, save_survey_result,
};
use crate::middleware::jwt::{jwt_auth, require_admin};
use crate::state::AppState;

/// Every survey route needs a logged in account; creating one needs an admin.
pub fn survey_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(load_surveys::load_surveys)
                .post(add_survey::add_survey.layer(from_fn(require_admin))),
        )
        .route(
            "/:survey_id/results",
            put(save_survey_result::save_survey_result)
                .get(load_survey_result::load_survey_result),
        )
        .route_layer(from_fn_with_state(state.clone(), jwt_auth))
        .with_state(state)
}
