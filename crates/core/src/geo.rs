//! Pure geospatial helpers: asset/risk correlation and viewport fitting.
//!
//! Both entry points are deterministic for identical input, mutate nothing,
//! and may be re-invoked on every render.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::model::{Asset, Risk};

/// Fallback frame when no asset has a usable position (central London).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 51.5074,
    lon: -0.1278,
};

/// Zoom used with the fallback frame.
pub const DEFAULT_ZOOM: f64 = 11.0;

/// Upper zoom bound so a single point or tight cluster is not over-zoomed.
pub const MAX_ZOOM: f64 = 15.0;

/// Fraction of the bounding span added on each side as visual padding.
const PADDING_RATIO: f64 = 0.15;

/// Smallest span considered, in degrees; keeps single points frameable.
const MIN_SPAN_DEG: f64 = 0.005;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Padded bounding region covering every positioned asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Minimum latitude.
    pub south: f64,
    /// Minimum longitude.
    pub west: f64,
    /// Maximum latitude.
    pub north: f64,
    /// Maximum longitude.
    pub east: f64,
}

impl GeoBounds {
    /// Whether `point` lies inside the region (inclusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }
}

/// Map frame derived from the current asset set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Frame midpoint.
    pub center: GeoPoint,
    /// Web-map zoom level, capped at [`MAX_ZOOM`].
    pub zoom: f64,
    /// Present when at least one asset contributed a position.
    pub bounds: Option<GeoBounds>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            bounds: None,
        }
    }
}

/// Returns the asset position when both coordinates are usable.
pub fn asset_position(asset: &Asset) -> Option<GeoPoint> {
    let (lat, lon) = (asset.lat, asset.lon);
    if lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
    {
        Some(GeoPoint { lat, lon })
    } else {
        None
    }
}

/// Builds the asset-id → risk lookup shared by the map and the risk list.
///
/// One pass over `risks`; a later entry for the same asset wins. Risks that
/// reference no asset in this run stay in the map but are never rendered as
/// markers; they only leave a debug trail.
pub fn correlate<'a>(assets: &[Asset], risks: &'a [Risk]) -> HashMap<&'a str, &'a Risk> {
    let known: HashSet<&str> = assets.iter().map(|a| a.id.as_str()).collect();
    let mut by_asset = HashMap::with_capacity(risks.len());
    for risk in risks {
        if !known.contains(risk.asset_id.as_str()) {
            debug!(asset_id = %risk.asset_id, "risk references no asset in this run");
        }
        by_asset.insert(risk.asset_id.as_str(), risk);
    }
    by_asset
}

/// Computes the frame covering every positioned asset.
///
/// Empty input, or input with no usable position, yields the default frame
/// so the map is never left unpositioned. Assets with unusable coordinates
/// are skipped and logged, never fatal.
pub fn fit_viewport(assets: &[Asset]) -> Viewport {
    let mut positions = Vec::with_capacity(assets.len());
    for asset in assets {
        match asset_position(asset) {
            Some(p) => positions.push(p),
            None => warn!(
                asset_id = %asset.id,
                lat = asset.lat,
                lon = asset.lon,
                "skipping asset with unusable coordinates"
            ),
        }
    }

    let Some(first) = positions.first().copied() else {
        return Viewport::default();
    };

    let mut south = first.lat;
    let mut north = first.lat;
    let mut west = first.lon;
    let mut east = first.lon;
    for p in &positions[1..] {
        south = south.min(p.lat);
        north = north.max(p.lat);
        west = west.min(p.lon);
        east = east.max(p.lon);
    }

    let lat_span = (north - south).max(MIN_SPAN_DEG);
    let lon_span = (east - west).max(MIN_SPAN_DEG);
    let bounds = GeoBounds {
        south: south - lat_span * PADDING_RATIO,
        west: west - lon_span * PADDING_RATIO,
        north: north + lat_span * PADDING_RATIO,
        east: east + lon_span * PADDING_RATIO,
    };

    let padded_span = (bounds.north - bounds.south).max(bounds.east - bounds.west);
    let zoom = (360.0 / padded_span).log2().clamp(1.0, MAX_ZOOM);

    Viewport {
        center: GeoPoint {
            lat: (south + north) / 2.0,
            lon: (west + east) / 2.0,
        },
        zoom,
        bounds: Some(bounds),
    }
}
