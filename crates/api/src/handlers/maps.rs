//! Handlers for the preconfigured drought map pages.
//!
//! Each page is a fixed composition of catalog layers over a shared Front
//! Range viewport; nothing here touches the database. The heavy lifting
//! (tile fetching, rendering, legends) happens in the mapping front-end.

use axum::Json;
use serde::Serialize;

use dam_inventory_core::catalog::{self, DROUGHT_MAP_CENTER};
use dam_inventory_core::gizmos::{Basemap, Extent, MapConfig, MapControl, MapLayer, MapViewport};

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// A single-map drought page.
#[derive(Debug, Serialize)]
pub struct MapPageView {
    pub map: MapConfig,
}

/// The four-pane comparison page.
#[derive(Debug, Serialize)]
pub struct FourPaneView {
    pub conditions: MapConfig,
    pub index: MapConfig,
    pub outlook: MapConfig,
    pub water: MapConfig,
}

fn drought_viewport() -> MapViewport {
    MapViewport::new(DROUGHT_MAP_CENTER, 7.0).with_zoom_bounds(5, 12)
}

fn standard_controls(zoom_extent: Extent) -> Vec<MapControl> {
    vec![
        MapControl::ZoomSlider,
        MapControl::Rotate,
        MapControl::FullScreen,
        MapControl::mouse_position(),
        MapControl::zoom_to_extent(zoom_extent),
    ]
}

fn drought_page(controls: Vec<MapControl>, layers: Vec<MapLayer>) -> MapPageView {
    MapPageView {
        map: MapConfig {
            height: "630px".to_string(),
            width: "100%".to_string(),
            basemaps: vec![Basemap::OpenStreetMap],
            controls,
            layers,
            view: drought_viewport(),
            show_legend: true,
        },
    }
}

/// GET /dam-inventory/drought -- current drought conditions.
pub async fn drought_map(_user: AuthUser) -> Json<DataResponse<MapPageView>> {
    Json(DataResponse {
        data: drought_page(
            standard_controls(catalog::conus_extent()),
            vec![
                catalog::tiger_boundaries(),
                catalog::nwm_streamflow(false, false),
                catalog::nwm_flow_anomaly(true, false),
                catalog::nwm_soil_moisture(false, false),
                catalog::snodas_swe(true, false),
                catalog::water_watch(true),
                catalog::swsi_kml(false),
                catalog::usdm_kml(false),
                catalog::precip_7day(false),
                catalog::vegdri(false),
                catalog::quickdri(false),
                catalog::watersheds(false),
            ],
        ),
    })
}

/// GET /dam-inventory/drought_fx -- forecast products (NWM analyses and
/// NCEP outlooks) with class legends.
pub async fn drought_forecast_map(_user: AuthUser) -> Json<DataResponse<MapPageView>> {
    Json(DataResponse {
        data: drought_page(
            standard_controls(Extent::new(-112.0, 36.3, -98.5, 41.66)),
            vec![
                catalog::tiger_boundaries(),
                catalog::nwm_flow_anomaly(true, true),
                catalog::nwm_streamflow(false, true),
                catalog::nwm_soil_moisture(true, true),
                catalog::ncep_monthly_outlook(false),
                catalog::ncep_seasonal_outlook(false),
                catalog::watersheds(false),
            ],
        ),
    })
}

/// GET /dam-inventory/drought_index -- drought index snapshots.
pub async fn drought_index_map(_user: AuthUser) -> Json<DataResponse<MapPageView>> {
    Json(DataResponse {
        data: drought_page(
            standard_controls(catalog::conus_extent()),
            vec![
                catalog::tiger_boundaries(),
                catalog::swsi_kml(true),
                catalog::usdm_kml(true),
                catalog::vegdri(false),
                catalog::quickdri(false),
                catalog::watersheds(false),
            ],
        ),
    })
}

/// GET /dam-inventory/drought_prec -- precipitation and snowpack.
pub async fn drought_precip_map(_user: AuthUser) -> Json<DataResponse<MapPageView>> {
    let mut controls = standard_controls(catalog::conus_extent());
    controls.insert(3, MapControl::ScaleLine);
    controls.insert(4, MapControl::WmsLegend);

    Json(DataResponse {
        data: drought_page(
            controls,
            vec![
                catalog::tiger_boundaries(),
                catalog::water_watch(true),
                catalog::snodas_swe(true, true),
                catalog::precip_7day(true),
                catalog::watersheds(false),
            ],
        ),
    })
}

/// GET /dam-inventory/drought_outlook -- NCEP monthly and seasonal
/// outlooks.
pub async fn drought_outlook_map(_user: AuthUser) -> Json<DataResponse<MapPageView>> {
    Json(DataResponse {
        data: drought_page(
            standard_controls(catalog::conus_extent()),
            vec![
                catalog::tiger_boundaries(),
                catalog::ncep_monthly_outlook(true),
                catalog::ncep_seasonal_outlook(false),
                catalog::watersheds(false),
            ],
        ),
    })
}

/// GET /dam-inventory/drought_veg_index -- vegetation drought indices.
pub async fn drought_veg_index_map(_user: AuthUser) -> Json<DataResponse<MapPageView>> {
    Json(DataResponse {
        data: drought_page(
            standard_controls(catalog::conus_extent()),
            vec![
                catalog::tiger_boundaries(),
                catalog::vegdri(true),
                catalog::quickdri(false),
                catalog::watersheds(false),
            ],
        ),
    })
}

fn pane(layers: Vec<MapLayer>) -> MapConfig {
    MapConfig {
        height: "400px".to_string(),
        width: "100%".to_string(),
        basemaps: vec![Basemap::OpenStreetMap],
        controls: Vec::new(),
        layers,
        view: MapViewport::new(DROUGHT_MAP_CENTER, 6.0),
        show_legend: false,
    }
}

/// GET /dam-inventory/drought_4pane -- compact side-by-side comparison of
/// current conditions, drought indices, the monthly outlook, and water
/// supply.
pub async fn drought_4pane(_user: AuthUser) -> Json<DataResponse<FourPaneView>> {
    Json(DataResponse {
        data: FourPaneView {
            conditions: pane(vec![catalog::tiger_boundaries(), catalog::usdm_current()]),
            index: pane(vec![
                catalog::tiger_boundaries(),
                catalog::ncei_spi6(),
                catalog::ncei_pdsi(),
            ]),
            outlook: pane(vec![
                catalog::tiger_boundaries(),
                catalog::ncep_monthly_outlook(true),
            ]),
            water: pane(vec![
                catalog::tiger_boundaries(),
                catalog::nwm_flow_anomaly(true, false),
                catalog::nwm_soil_moisture(true, false),
                catalog::snodas_swe(true, false),
            ]),
        },
    })
}
