use tokio::net::TcpListener;
use tracing::{info, warn};

use storyteller::{
    api::{self, AppState},
    config::Settings,
    init_tracing,
    story::StoryService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------
    // Logging
    // -----------------------------
    init_tracing();

    // -----------------------------
    // Settings
    // -----------------------------
    // Without a credential the form is never served.
    let settings = Settings::from_env().map_err(|err| {
        warn!("⚠️ {err}");
        err
    })?;

    println!("🚀 Starting story generator ({})...", settings.model);

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    let stories = StoryService::from_settings(&settings)?;
    info!(model = stories.model_name(), "story service ready");

    let app = api::router(AppState { stories });

    let addr = settings.bind_addr.as_str();
    println!("🌐 HTTP listening on http://{addr}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
