//! Web server implementation using Axum

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;

/// Start the web server
pub async fn serve(config: Config, host: String, port: u16) -> anyhow::Result<()> {
    info!("Initializing database...");

    let pool = crate::db::create_pool(&config.database.url, config.database.max_connections).await?;

    let app = crate::create_app(pool, config).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
