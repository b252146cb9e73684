use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Base-map tile styles available to the page.
///
/// Each style maps to a fixed templated tile URL; the browser substitutes
/// `{s}`/`{z}`/`{x}`/`{y}` when fetching imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapStyle {
    /// All available styles, in the order the page shows its buttons.
    pub const ALL: &'static [MapStyle] =
        &[Self::Roadmap, Self::Satellite, Self::Hybrid, Self::Terrain];

    /// Lowercase wire name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Satellite => "satellite",
            Self::Hybrid => "hybrid",
            Self::Terrain => "terrain",
        }
    }

    /// Tile URL template for this style.
    pub fn tile_url(&self) -> &'static str {
        match self {
            Self::Roadmap => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Satellite => "http://mt0.google.com/vt/lyrs=s&hl=en&x={x}&y={y}&z={z}",
            Self::Hybrid => "http://mt0.google.com/vt/lyrs=y&hl=en&x={x}&y={y}&z={z}",
            Self::Terrain => "http://mt0.google.com/vt/lyrs=p&hl=en&x={x}&y={y}&z={z}",
        }
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self::Roadmap
    }
}

impl FromStr for MapStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roadmap" => Ok(Self::Roadmap),
            "satellite" => Ok(Self::Satellite),
            "hybrid" => Ok(Self::Hybrid),
            "terrain" => Ok(Self::Terrain),
            other => bail!("unknown map style: {}", other),
        }
    }
}
