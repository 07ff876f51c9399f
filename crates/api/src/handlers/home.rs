//! Handler for the home page: the dam inventory map plus a drought
//! overview map.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use dam_inventory_core::catalog::{self, DEFAULT_MAP_CENTER};
use dam_inventory_core::geometry::{mean_center, FeatureCollection, GeoPoint};
use dam_inventory_core::gizmos::{
    Basemap, Button, CircleStyle, EsriMapConfig, EsriViewport, LayerSource, MapConfig, MapControl,
    MapLayer, MapViewport,
};
use dam_inventory_db::models::dam::Dam;
use dam_inventory_db::repositories::DamRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Home page payload: three map configurations and the Add Dam button.
#[derive(Debug, Serialize)]
pub struct HomeView {
    /// Full-height map showing the dam markers.
    pub inventory_map: MapConfig,
    /// Drought overview map with the national WMS layers.
    pub drought_overview_map: MapConfig,
    /// ESRI-rendered river gauge map (AHPS gauges over NLCD land cover).
    pub gauges_map: EsriMapConfig,
    pub add_dam_button: Button,
}

/// Vector layer with one circle marker per dam.
fn dams_layer(points: Vec<GeoPoint>) -> MapLayer {
    MapLayer::new(
        "Dams",
        LayerSource::GeoJson {
            collection: FeatureCollection::of_points(points),
        },
    )
    .style(CircleStyle {
        radius: 10,
        fill_color: "#d84e1f".to_string(),
        stroke_color: "#ffffff".to_string(),
        stroke_width: 1,
    })
}

/// GET /dam-inventory -- the home/map view.
///
/// The view centers on the arithmetic mean of all dam locations and falls
/// back to a fixed mid-CONUS coordinate when the inventory is empty.
pub async fn home(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<HomeView>>> {
    let dams = DamRepo::list_all(&state.pool).await?;
    let points: Vec<GeoPoint> = dams.iter().map(Dam::location).collect();

    let center = mean_center(&points)
        .map(|p| p.coordinates())
        .unwrap_or(DEFAULT_MAP_CENTER);
    let view = MapViewport::new(center, 5.5).with_zoom_bounds(5, 18);

    let inventory_map = MapConfig {
        height: "100%".to_string(),
        width: "100%".to_string(),
        basemaps: vec![
            Basemap::OpenStreetMap,
            Basemap::TileUrl {
                url: "http://tile.stamen.com/watercolor/{z}/{x}/{y}.jpg".to_string(),
                label: "Watercolor".to_string(),
            },
        ],
        controls: Vec::new(),
        layers: vec![dams_layer(points)],
        view: view.clone(),
        show_legend: false,
    };

    let drought_overview_map = MapConfig {
        height: "630px".to_string(),
        width: "70%".to_string(),
        basemaps: vec![Basemap::OpenStreetMap],
        controls: vec![
            MapControl::ZoomSlider,
            MapControl::Rotate,
            MapControl::FullScreen,
            MapControl::mouse_position(),
            MapControl::zoom_to_extent(catalog::conus_extent()),
        ],
        layers: vec![
            catalog::water_watch(true),
            catalog::usdm_current(),
            catalog::precip_7day(false),
            catalog::vegdri(false),
            catalog::quickdri(false),
            catalog::watersheds(true),
        ],
        view,
        show_legend: true,
    };

    let gauges_map = EsriMapConfig {
        height: "650px".to_string(),
        width: "100%".to_string(),
        basemap: "topo",
        view: EsriViewport {
            center: [-100.0, 40.0],
            zoom: 4.0,
        },
        layers: vec![catalog::nlcd_land_cover(), catalog::ahps_gauges()],
    };

    let add_dam_button = Button {
        display_text: "Add Dam".to_string(),
        name: "add-dam-button".to_string(),
        icon: Some("glyphicon glyphicon-plus".to_string()),
        style: Some("success".to_string()),
        href: Some("/dam-inventory/dams/add".to_string()),
        submit: false,
    };

    Ok(Json(DataResponse {
        data: HomeView {
            inventory_map,
            drought_overview_map,
            gauges_map,
            add_dam_button,
        },
    }))
}
