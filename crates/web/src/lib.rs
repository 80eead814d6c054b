pub use crate::common::RouteResult;

use std::{env, sync::Arc, time::Instant};

use axum::{extract::FromRef, Router};
use igc::TrackParser;
use registry::TrackRegistry;
use tokio::net::TcpListener;

pub mod api;
pub mod common;

pub const DEFAULT_PORT: u16 = 5000;

/// Everything the request handlers share: the track registry, the track
/// parser and the process start time. Constructed once in `main` and
/// cloned into the handlers, never recreated per request.
#[derive(Clone, FromRef)]
pub struct WebState {
    pub tracks: TrackRegistry,
    pub parser: Arc<dyn TrackParser>,
    pub started_at: Instant,
}

impl WebState {
    pub fn new(parser: Arc<dyn TrackParser>) -> Self {
        Self {
            tracks: TrackRegistry::new(),
            parser,
            started_at: Instant::now(),
        }
    }
}

/// Reads the listening port from the `PORT` environment variable. Falls
/// back to the documented default and says so.
pub fn port_from_env() -> u16 {
    match env::var("PORT").ok().and_then(|raw| raw.parse().ok()) {
        Some(port) => port,
        None => {
            log::info!(
                "no PORT in environment, defaulting to port {}",
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

pub async fn start_web_server(state: WebState, port: u16) -> std::io::Result<()> {
    let routes = Router::new().nest_service("/api", api::routes(state));

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
