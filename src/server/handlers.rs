use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, Json, Response},
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::reports::PotholeReport;
use crate::tiles::MapStyle;
use crate::view::ViewState;

use super::state::AppState;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct Asset;

/// Simple MIME type detection based on file extension
fn get_mime_type(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn embedded_asset(name: &str, content_type: &'static str) -> Response {
    let content = Asset::get(name).unwrap().data;
    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .body(content.into_owned().into())
        .unwrap()
}

pub async fn index_html() -> Html<Vec<u8>> {
    Html(Asset::get("index.html").unwrap().data.into_owned())
}

pub async fn app_js() -> Response {
    embedded_asset("app.js", "application/javascript")
}

pub async fn style_css() -> Response {
    embedded_asset("style.css", "text/css")
}

pub async fn marker_icon() -> Response {
    embedded_asset("map-marker.svg", "image/svg+xml")
}

pub async fn active_marker_icon() -> Response {
    embedded_asset("active-map-marker.svg", "image/svg+xml")
}

// Report record as the page sees it: the raw record plus its photo URL.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub timestamp: String,
    pub photo_url: String,
}

impl From<&PotholeReport> for ReportView {
    fn from(report: &PotholeReport) -> Self {
        Self {
            id: report.id.clone(),
            lat: report.lat,
            lng: report.lng,
            timestamp: report.timestamp.clone(),
            photo_url: format!("/photos/{}", report.image),
        }
    }
}

pub async fn get_reports(State(state): State<AppState>) -> Json<Vec<ReportView>> {
    let reports = state.store.all().iter().map(ReportView::from).collect();
    Json(reports)
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewState> {
    let view = state.view.lock().unwrap();
    Json(view.state())
}

#[derive(Debug, Deserialize)]
pub struct StylePayload {
    pub style: String,
}

pub async fn set_style(
    State(state): State<AppState>,
    Json(payload): Json<StylePayload>,
) -> Result<Json<ViewState>, StatusCode> {
    let style: MapStyle = payload.style.parse().map_err(|e| {
        warn!("Rejected style switch: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    let mut view = state.view.lock().unwrap();
    view.set_style(style);
    Ok(Json(view.state()))
}

#[derive(Debug, Deserialize)]
pub struct SelectPayload {
    pub id: String,
}

pub async fn select_report(
    State(state): State<AppState>,
    Json(payload): Json<SelectPayload>,
) -> Result<Json<ViewState>, StatusCode> {
    let mut view = state.view.lock().unwrap();
    view.select(&payload.id).map_err(|e| {
        warn!("Rejected selection: {}", e);
        StatusCode::NOT_FOUND
    })?;
    Ok(Json(view.state()))
}

pub async fn deselect_report(State(state): State<AppState>) -> Json<ViewState> {
    let mut view = state.view.lock().unwrap();
    view.deselect();
    Json(view.state())
}

pub async fn serve_photo(
    State(state): State<AppState>,
    AxumPath(filepath): AxumPath<String>,
) -> Result<Response, StatusCode> {
    let base_dir = {
        let settings = state.settings.lock().unwrap();
        settings.photos_dir.clone()
    };

    let path = std::path::Path::new(&base_dir).join(&filepath);

    if !path.exists() {
        return Err(StatusCode::NOT_FOUND);
    }

    let content_type = get_mime_type(&path);

    match std::fs::read(&path) {
        Ok(data) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .body(data.into())
            .unwrap()),
        Err(e) => {
            error!("Failed to read photo {}: {}", path.display(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportStore;
    use crate::settings::Settings;
    use crate::view::MapView;
    use crate::viewport::Viewport;

    fn test_state() -> AppState {
        let store = ReportStore::builtin();
        let view = MapView::new(store.clone(), Viewport::default());
        AppState::new(store, view, Settings::default())
    }

    #[tokio::test]
    async fn reports_listing_carries_photo_urls() {
        let Json(reports) = get_reports(State(test_state())).await;
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].photo_url, "/photos/pothole1.jpg");
        assert_eq!(reports[2].id, "3");
    }

    #[tokio::test]
    async fn view_starts_with_defaults() {
        let Json(state) = get_view(State(test_state())).await;
        assert_eq!(state.style, MapStyle::Roadmap);
        assert!(state.selected.is_none());
        assert_eq!(state.markers.len(), 3);
    }

    #[tokio::test]
    async fn select_returns_recentered_view() {
        let state = test_state();
        let payload = SelectPayload { id: "2".to_string() };
        let Json(view) = select_report(State(state), Json(payload)).await.unwrap();

        assert_eq!(view.selected.as_deref(), Some("2"));
        assert_eq!(view.center.lat, 18.5307);
        assert_eq!(view.center.lng, 73.8605);
        let active: Vec<_> = view.markers.iter().filter(|m| m.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "2");
    }

    #[tokio::test]
    async fn unknown_report_id_is_404() {
        let state = test_state();
        let payload = SelectPayload { id: "99".to_string() };
        let err = select_report(State(state.clone()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);

        // View untouched by the failed selection
        let Json(view) = get_view(State(state)).await;
        assert!(view.selected.is_none());
    }

    #[tokio::test]
    async fn style_switch_keeps_selection() {
        let state = test_state();
        let _ = select_report(State(state.clone()), Json(SelectPayload { id: "1".into() }))
            .await
            .unwrap();

        let payload = StylePayload { style: "hybrid".to_string() };
        let Json(view) = set_style(State(state), Json(payload)).await.unwrap();

        assert_eq!(view.style, MapStyle::Hybrid);
        assert_eq!(view.tile_url, MapStyle::Hybrid.tile_url());
        assert_eq!(view.selected.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn bad_style_name_is_400() {
        let payload = StylePayload { style: "streetview".to_string() };
        let err = set_style(State(test_state()), Json(payload)).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deselect_clears_selection() {
        let state = test_state();
        let _ = select_report(State(state.clone()), Json(SelectPayload { id: "3".into() }))
            .await
            .unwrap();

        let Json(view) = deselect_report(State(state)).await;
        assert!(view.selected.is_none());
        assert!(view.markers.iter().all(|m| !m.active));
    }

    #[tokio::test]
    async fn missing_photo_is_404() {
        let err = serve_photo(State(test_state()), AxumPath("nope.jpg".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }
}
