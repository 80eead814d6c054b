use std::sync::Arc;

use igc::HttpTrackParser;
use web::{port_from_env, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let port = port_from_env();
    let state = WebState::new(Arc::new(HttpTrackParser::new()));

    log::info!("igc info service listening on port {}", port);
    start_web_server(state, port)
        .await
        .expect("could not start web server.");
}
