use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;

use showroom_backend::{
    config::Config,
    routes,
    state::{AppState, SharedState},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let cfg = Config::from_env()?;
    let state: SharedState = Arc::new(AppState::new(cfg.session_ttl));

    spawn_session_purger(state.clone(), cfg.purge_interval);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .with_state(state)
        .layer(cors);

    let addr = cfg.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("showroom backend running at http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn spawn_session_purger(state: SharedState, every: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = state.sessions.purge_expired().await;
            if removed > 0 {
                info!(removed, "purged expired sessions");
            }
        }
    });
}
