//! Multi-Omics Showcase Web Server
//!
//! Run with: cargo run -p showcase-web
//! Content is read once from ./content_config.yaml and ./data/*.csv at startup.

use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use showcase_content::ContentStore;
use showcase_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Multi-Omics Showcase server...");

    // Load all content up front; a missing or malformed file aborts startup
    let store = ContentStore::load(".")?;
    let state = AppState::new(store)?;

    // Build router
    let app = showcase_web::router::build_router(state);

    // Bind to port
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
