use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use handlers::{
    active_marker_icon, app_js, deselect_report, get_reports, get_view, index_html, marker_icon,
    select_report, serve_photo, set_style, style_css,
};

// Create the main application router
fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/app.js", get(app_js))
        .route("/style.css", get(style_css))
        .route("/map-marker.svg", get(marker_icon))
        .route("/active-map-marker.svg", get(active_marker_icon))
        .route("/api/reports", get(get_reports))
        .route("/api/view", get(get_view))
        .route("/api/view/style", post(set_style))
        .route("/api/view/select", post(select_report))
        .route("/api/view/deselect", post(deselect_report))
        .route("/photos/*filepath", get(serve_photo))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<()> {
    let app = create_app(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server listening at http://127.0.0.1:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
