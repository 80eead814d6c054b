use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, on},
    Json, Router,
};
use model::ServerMeta;

pub mod tracks;

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

pub fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(server_meta))
        .nest_service("/igc", tracks::routes(state.clone()))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

/// GET /api: process uptime plus the fixed service description. Always
/// succeeds.
async fn server_meta(
    State(WebState { started_at, .. }): State<WebState>,
) -> impl IntoResponse {
    Json(ServerMeta::at_age(started_at.elapsed().as_secs_f64()))
}
