use crate::geo::{LatLng, LatLngBounds};

// Server configuration
pub const DEFAULT_PORT: u16 = 3100;

// Zoom limits for the map widget
pub const MIN_ZOOM: f64 = 15.0;
pub const MAX_ZOOM: f64 = 19.0;

// Map movement is restricted to a small box around RTO Pune
pub const PAN_BOUNDS: LatLngBounds = LatLngBounds::new(
    LatLng::new(18.5280, 73.8590), // Southwest corner
    LatLng::new(18.5335, 73.8650), // Northeast corner
);

// Initial viewport
pub const DEFAULT_CENTER: LatLng = LatLng::new(18.5308, 73.8616);
pub const DEFAULT_ZOOM: f64 = 17.0;

// Marker icon sizes in pixels (width, height)
pub const MARKER_ICON_SIZE: (u32, u32) = (47, 55);
pub const ACTIVE_MARKER_ICON_SIZE: (u32, u32) = (57, 65);

// Timestamps are display strings but are expected to follow this format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
