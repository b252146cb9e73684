use anyhow::{bail, Result};
use serde::Serialize;

use crate::constants::{
    ACTIVE_MARKER_ICON_SIZE, MARKER_ICON_SIZE, MAX_ZOOM, MIN_ZOOM, PAN_BOUNDS,
};
use crate::geo::{LatLng, LatLngBounds};
use crate::reports::ReportStore;
use crate::tiles::MapStyle;
use crate::viewport::Viewport;

/// Render state for one marker on the map.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// True for the marker of the currently selected report, if any.
    pub active: bool,
}

/// Snapshot of the view returned by the API after every transition.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub style: MapStyle,
    pub tile_url: &'static str,
    pub selected: Option<String>,
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub bounds: LatLngBounds,
    pub marker_icon_size: (u32, u32),
    pub active_marker_icon_size: (u32, u32),
    pub markers: Vec<Marker>,
}

/// The map-view state machine: active tile style, selected report and
/// viewport. All transitions happen here; handlers only forward input.
pub struct MapView {
    store: ReportStore,
    style: MapStyle,
    selected: Option<String>,
    viewport: Viewport,
}

impl MapView {
    pub fn new(store: ReportStore, viewport: Viewport) -> Self {
        Self {
            store,
            style: MapStyle::default(),
            selected: None,
            viewport,
        }
    }

    /// Selects a report and recenters the viewport on its coordinate
    /// (clamped into the pan bounds). Zoom and style are untouched.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let Some(report) = self.store.get(id) else {
            bail!("unknown report id: {}", id);
        };
        let center = LatLng::new(report.lat, report.lng);
        self.selected = Some(report.id.clone());
        self.viewport.set_center(center);
        Ok(())
    }

    /// Clears the selection. Viewport and style are untouched.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Switches the tile style. Selection and viewport are untouched.
    pub fn set_style(&mut self, style: MapStyle) {
        self.style = style;
    }

    pub fn style(&self) -> MapStyle {
        self.style
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// One marker per report, mirroring store order; the selected
    /// report's marker (at most one) carries the active variant.
    pub fn markers(&self) -> Vec<Marker> {
        self.store
            .all()
            .iter()
            .map(|r| Marker {
                id: r.id.clone(),
                lat: r.lat,
                lng: r.lng,
                active: self.selected.as_deref() == Some(r.id.as_str()),
            })
            .collect()
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            style: self.style,
            tile_url: self.style.tile_url(),
            selected: self.selected.clone(),
            center: self.viewport.center(),
            zoom: self.viewport.zoom(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            bounds: PAN_BOUNDS,
            marker_icon_size: MARKER_ICON_SIZE,
            active_marker_icon_size: ACTIVE_MARKER_ICON_SIZE,
            markers: self.markers(),
        }
    }
}
