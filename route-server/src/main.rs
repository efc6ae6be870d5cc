use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use route_server::cities::CityIndex;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The city table is fixed at startup and shared by reference.
    let cities = CityIndex::european();
    tracing::info!(cities = cities.len(), "loaded city table");

    let state = AppState::new(cities);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("route search server listening on http://{addr}");
    tracing::info!("  GET /health              - health check");
    tracing::info!("  GET /api/cities/search   - city autocomplete");
    tracing::info!("  GET /api/routes/search   - route search");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
