use serde::Serialize;

use crate::constants::{MAX_ZOOM, MIN_ZOOM, PAN_BOUNDS};
use crate::geo::LatLng;

/// The visible map window: a center coordinate plus a zoom level.
///
/// Every write path clamps, so a `Viewport` never holds a zoom outside
/// `[MIN_ZOOM, MAX_ZOOM]` nor a center outside `PAN_BOUNDS`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    center: LatLng,
    zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center: PAN_BOUNDS.clamp(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.center = PAN_BOUNDS.clamp(center);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_CENTER, crate::constants::DEFAULT_ZOOM)
    }
}
