//! Map widget configuration: viewports, layers, legends, controls.

use serde::Serialize;

use crate::geometry::FeatureCollection;

/// Geographic bounding box `[min_lng, min_lat, max_lng, max_lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Extent(pub [f64; 4]);

impl Extent {
    /// Panics if the box is inverted; layer extents are static configuration
    /// and a bad one should fail fast.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        assert!(
            min_lng < max_lng && min_lat < max_lat,
            "Extent must be [min_lng, min_lat, max_lng, max_lat]"
        );
        Self([min_lng, min_lat, max_lng, max_lat])
    }
}

/// Initial view state: projection, center, zoom bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewport {
    pub projection: &'static str,
    /// `[longitude, latitude]`.
    pub center: [f64; 2],
    pub zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<u8>,
}

impl MapViewport {
    pub fn new(center: [f64; 2], zoom: f64) -> Self {
        Self {
            projection: "EPSG:4326",
            center,
            zoom,
            max_zoom: None,
            min_zoom: None,
        }
    }

    pub fn with_zoom_bounds(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        assert!(min_zoom <= max_zoom, "min_zoom must not exceed max_zoom");
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }
}

/// Where a layer's data comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerSource {
    /// Inline GeoJSON features (the dam markers).
    GeoJson { collection: FeatureCollection },
    /// WMS GetMap image layer.
    ImageWms {
        url: String,
        layers: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        server_type: &'static str,
    },
    /// ArcGIS REST tile service, optionally restricted to sub-layers
    /// (`show:...`).
    TileArcGisRest {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        layers: Option<String>,
    },
    /// Server-hosted KML document.
    Kml { url: String },
}

/// One legend row for a layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegendEntry {
    /// Remote legend graphic (WMS GetLegendGraphic or similar).
    Image { label: String, image_url: String },
    /// Line swatch with a stroke color.
    Line { label: String, stroke: String },
    /// Polygon swatch with a fill color.
    Polygon { label: String, fill: String },
}

impl LegendEntry {
    pub fn image(label: &str, image_url: &str) -> Self {
        Self::Image {
            label: label.to_string(),
            image_url: image_url.to_string(),
        }
    }

    pub fn line(label: &str, stroke: &str) -> Self {
        Self::Line {
            label: label.to_string(),
            stroke: stroke.to_string(),
        }
    }

    pub fn polygon(label: &str, fill: &str) -> Self {
        Self::Polygon {
            label: label.to_string(),
            fill: fill.to_string(),
        }
    }
}

/// Point marker style for vector layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleStyle {
    pub radius: u32,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: u32,
}

/// A single map layer descriptor: source, visibility, opacity, legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub title: String,
    pub source: LayerSource,
    pub visible: bool,
    pub opacity: f64,
    pub feature_selection: bool,
    pub legend: Vec<LegendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_extent: Option<Extent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CircleStyle>,
}

impl MapLayer {
    pub fn new(title: &str, source: LayerSource) -> Self {
        Self {
            title: title.to_string(),
            source,
            visible: true,
            opacity: 1.0,
            feature_selection: false,
            legend: Vec::new(),
            legend_extent: None,
            style: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Panics outside `0.0..=1.0`; opacity is static configuration.
    pub fn opacity(mut self, opacity: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&opacity),
            "Layer opacity must be within 0.0..=1.0"
        );
        self.opacity = opacity;
        self
    }

    pub fn selectable(mut self) -> Self {
        self.feature_selection = true;
        self
    }

    pub fn legend(mut self, entries: Vec<LegendEntry>) -> Self {
        self.legend = entries;
        self
    }

    pub fn legend_extent(mut self, extent: Extent) -> Self {
        self.legend_extent = Some(extent);
        self
    }

    pub fn style(mut self, style: CircleStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Base tile layer under the thematic layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Basemap {
    OpenStreetMap,
    /// Custom XYZ tile service with a display label.
    TileUrl { url: String, label: String },
}

/// Interactive control shown on the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapControl {
    ZoomSlider,
    Rotate,
    FullScreen,
    ScaleLine,
    WmsLegend,
    MousePosition { projection: &'static str },
    ZoomToExtent { projection: &'static str, extent: Extent },
}

impl MapControl {
    pub fn mouse_position() -> Self {
        Self::MousePosition {
            projection: "EPSG:4326",
        }
    }

    pub fn zoom_to_extent(extent: Extent) -> Self {
        Self::ZoomToExtent {
            projection: "EPSG:4326",
            extent,
        }
    }
}

/// Full map widget configuration handed to the front-end renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub height: String,
    pub width: String,
    pub basemaps: Vec<Basemap>,
    pub controls: Vec<MapControl>,
    pub layers: Vec<MapLayer>,
    pub view: MapViewport,
    pub show_legend: bool,
}

/// Layer on the ESRI map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EsriLayer {
    /// ArcGIS REST feature service layer.
    FeatureLayer { url: String },
    /// ArcGIS REST image service layer.
    ImageryLayer { url: String },
}

impl EsriLayer {
    pub fn feature(url: &str) -> Self {
        Self::FeatureLayer {
            url: url.to_string(),
        }
    }

    pub fn imagery(url: &str) -> Self {
        Self::ImageryLayer {
            url: url.to_string(),
        }
    }
}

/// Initial view state for the ESRI map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsriViewport {
    /// `[longitude, latitude]`.
    pub center: [f64; 2],
    pub zoom: f64,
}

/// ESRI map widget configuration. Rendered by a different front-end
/// component than [`MapConfig`], so basemaps are named rather than typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsriMapConfig {
    pub height: String,
    pub width: String,
    pub basemap: &'static str,
    pub view: EsriViewport,
    pub layers: Vec<EsriLayer>,
}
