use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dashboard::config::Config;
use dashboard::resumes::{sample_resumes, JsonFileSource, ResumeSource, StaticSource};
use dashboard::routes::build_router;
use dashboard::session::SessionRegistry;
use dashboard::state::AppState;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume dashboard v{}", env!("CARGO_PKG_VERSION"));

    let resumes: Arc<dyn ResumeSource> = match &config.resumes_path {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(StaticSource::new(sample_resumes())),
    };
    info!("Resume source: {}", resumes.describe());

    let state = AppState::new(config.clone(), resumes);
    spawn_session_sweeper(state.sessions.clone());

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically expires sessions nobody has looked up since their deadline.
fn spawn_session_sweeper(sessions: Arc<SessionRegistry>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                info!("Expired {purged} idle sessions");
            }
        }
    });
}
