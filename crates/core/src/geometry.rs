//! GeoJSON point geometry for dam locations.
//!
//! Dams are located by a single EPSG:4326 point. The client-side drawing
//! control submits locations as serialized GeoJSON; this module is the typed
//! boundary that accepts only single `Point` geometries.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single geographic point in EPSG:4326 (longitude, latitude).
///
/// Serializes as GeoJSON: `{"type":"Point","coordinates":[lng,lat]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry", into = "RawGeometry")]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Parse a serialized GeoJSON geometry, accepting only a single `Point`
    /// with a two-element coordinate pair.
    pub fn parse_geojson(raw: &str) -> Result<Self, CoreError> {
        let geometry: RawGeometry = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("Malformed geometry: {e}")))?;
        Self::try_from(geometry).map_err(CoreError::Validation)
    }

    /// `[longitude, latitude]` pair, the GeoJSON coordinate order.
    pub fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Wire form of a GeoJSON geometry object.
#[derive(Debug, Serialize, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<f64>,
}

impl TryFrom<RawGeometry> for GeoPoint {
    type Error = String;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        if raw.kind != "Point" {
            return Err(format!(
                "Expected a Point geometry, got '{kind}'",
                kind = raw.kind
            ));
        }
        match raw.coordinates.as_slice() {
            [longitude, latitude] => Ok(Self {
                longitude: *longitude,
                latitude: *latitude,
            }),
            other => Err(format!(
                "Expected a [longitude, latitude] pair, got {n} coordinates",
                n = other.len()
            )),
        }
    }
}

impl From<GeoPoint> for RawGeometry {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![point.longitude, point.latitude],
        }
    }
}

/// Arithmetic mean of a set of points, or `None` for an empty set.
///
/// Used to center the home map on the dam inventory; the caller supplies a
/// fallback center for the empty case.
pub fn mean_center(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let lng: f64 = points.iter().map(|p| p.longitude).sum();
    let lat: f64 = points.iter().map(|p| p.latitude).sum();
    Some(GeoPoint::new(lng / n, lat / n))
}

// ---------------------------------------------------------------------------
// Feature collections
// ---------------------------------------------------------------------------

/// A GeoJSON `Feature` wrapping a single point geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: GeoPoint,
}

/// A GeoJSON `FeatureCollection` with an explicit EPSG:4326 CRS, as consumed
/// by the mapping front-end's vector layer source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub crs: Crs,
    pub features: Vec<Feature>,
}

/// Named coordinate reference system entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crs {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: CrsProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrsProperties {
    pub name: &'static str,
}

impl FeatureCollection {
    /// Wrap each point in a single-geometry `Feature`.
    pub fn of_points(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        Self {
            kind: "FeatureCollection",
            crs: Crs {
                kind: "name",
                properties: CrsProperties { name: "EPSG:4326" },
            },
            features: points
                .into_iter()
                .map(|geometry| Feature {
                    kind: "Feature",
                    geometry,
                })
                .collect(),
        }
    }
}
