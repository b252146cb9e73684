use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod constants;
mod geo;
mod reports;
mod server;
mod settings;
mod tiles;
mod utils;
mod view;
mod viewport;

use reports::ReportStore;
use server::{start_server, AppState};
use settings::Settings;
use view::MapView;
use viewport::Viewport;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load().context("Failed to load settings")?;
    info!("Serving photos from {:?}", settings.photos_dir);

    let store = match settings.reports_file {
        Some(ref path) => ReportStore::from_file(path)?,
        None => {
            info!("No reports file configured, using the built-in sample set");
            ReportStore::builtin()
        }
    };
    info!("{} pothole reports loaded", store.count());

    let view = MapView::new(store.clone(), Viewport::default());
    let port = settings.port;
    let auto_open = settings.auto_open_browser;

    if auto_open {
        let url = format!("http://127.0.0.1:{}", port);
        if let Err(e) = utils::open_browser(&url) {
            warn!("Could not open browser: {}", e);
        }
    }

    let app_state = AppState::new(store, view, settings);
    start_server(app_state, port).await?;

    Ok(())
}
