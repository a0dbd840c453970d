use axum::Router;
use rpz_exporter_api::{create_api_routes, create_metrics_routes, AppState};
use rpz_exporter_domain::config::API_PREFIX;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(
    bind_addr: SocketAddr,
    metrics_path: &str,
    state: AppState,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        metrics_url = format!("http://{}{}", bind_addr, metrics_path),
        api_url = format!("http://{}{}", bind_addr, API_PREFIX),
        "Starting web server"
    );

    let app = create_app(state, metrics_path);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server on {}: {}", bind_addr, e))?;

    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .nest(API_PREFIX, create_api_routes(state.clone()))
        .merge(create_metrics_routes(state, metrics_path))
        .layer(TraceLayer::new_for_http())
}
