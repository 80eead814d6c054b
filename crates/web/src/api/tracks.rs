use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::Method,
    routing::{get, on, post},
    Json, Router,
};
use model::{TrackField, TrackSummary, UnknownTrackField};
use registry::RequestError;
use serde::Deserialize;
use utility::id::Id;

use crate::{
    common::{
        route_not_found, schema_no_example, RouteErrorResponse, METHOD_FILTER_ALL,
    },
    RouteResult, WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", post(register_track).get(list_tracks))
        .route("/schema", get(schema_no_example::<TrackSummary>))
        .route("/:id", get(get_track))
        .route("/:id/:field", get(get_track_field))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Deserialize)]
struct RegistrationDto {
    url: String,
}

/// POST /api/igc: fetches and parses the track behind the submitted URL,
/// stores its summary and responds with the assigned id. Malformed JSON,
/// malformed URLs and parser failures are all one 400 kind.
async fn register_track(
    State(WebState { tracks, parser, .. }): State<WebState>,
    body: Result<Json<RegistrationDto>, JsonRejection>,
) -> RouteResult<Json<i64>> {
    let Json(input) = body.map_err(|why| {
        RouteErrorResponse::bad_request(&Method::POST, "/api/igc")
            .with_detailed_information(why.to_string())
    })?;

    let track = parser.parse_url(&input.url).await.map_err(|why| {
        log::info!("rejecting track from {}: {}", input.url, why);
        RouteErrorResponse::from(RequestError::from(why))
            .with_method(&Method::POST)
            .with_uri("/api/igc")
    })?;

    let id = tracks.append(track.summarize()).await;
    log::info!(
        "registered track {} from {} ({} stored)",
        id,
        input.url,
        tracks.len().await
    );
    Ok(Json(id.raw()))
}

/// GET /api/igc: all assigned ids in registration order, `[]` if none.
async fn list_tracks(
    State(WebState { tracks, .. }): State<WebState>,
) -> Json<Vec<Id<TrackSummary>>> {
    Json(tracks.ids().await)
}

/// GET /api/igc/{id}: the full stored summary, 404 outside the assigned
/// range.
async fn get_track(
    State(WebState { tracks, .. }): State<WebState>,
    Path(id): Path<i64>,
) -> RouteResult<Json<TrackSummary>> {
    tracks.get(Id::new(id)).await.map(Json).map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(format!("/api/igc/{}", id))
    })
}

/// GET /api/igc/{id}/{field}: a single field of the summary as plain
/// text. Unknown ids are 404, unknown field names 400; the id is checked
/// first.
async fn get_track_field(
    State(WebState { tracks, .. }): State<WebState>,
    Path((id, field)): Path<(i64, String)>,
) -> RouteResult<String> {
    let uri = format!("/api/igc/{}/{}", id, field);

    let summary = tracks.get(Id::new(id)).await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(uri.clone())
    })?;

    let field: TrackField = field.parse().map_err(|why: UnknownTrackField| {
        RouteErrorResponse::bad_request(&Method::GET, uri.clone())
            .with_detailed_information(why.to_string())
    })?;

    Ok(summary.field(field))
}
