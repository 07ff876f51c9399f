//! Static catalog of third-party drought/hydrology map layers.
//!
//! Each function builds one preconfigured layer descriptor (WMS, ArcGIS
//! REST, or KML) for the map-composition handlers. This is declarative
//! configuration data, typed so a bad URL/opacity/extent fails at
//! construction instead of at render time.

use crate::gizmos::map::{EsriLayer, Extent, LayerSource, LegendEntry, MapLayer};

/// Fallback home-map center when the inventory is empty.
pub const DEFAULT_MAP_CENTER: [f64; 2] = [-98.6, 39.8];

/// Center for the preconfigured drought map pages (Colorado Front Range).
pub const DROUGHT_MAP_CENTER: [f64; 2] = [-105.6, 39.0];

/// Continental US, used for zoom-to-extent controls.
pub fn conus_extent() -> Extent {
    Extent::new(-130.0, 22.0, -65.0, 54.0)
}

/// Legend extent shared by the national WMS products.
fn national_legend_extent() -> Extent {
    Extent::new(-126.0, 24.5, -66.2, 49.0)
}

/// Legend extent for the regional (Front Range) ArcGIS products.
fn regional_legend_extent() -> Extent {
    Extent::new(-112.0, 36.3, -98.5, 41.66)
}

const USDM_WMS_URL: &str =
    "http://ndmc-001.unl.edu:8080/cgi-bin/mapserv.exe?map=/ms4w/apps/usdm/service/usdm_current_wms.map&";
const USDM_LEGEND_URL: &str =
    "http://ndmc-001.unl.edu:8080/cgi-bin/mapserv.exe?map=/ms4w/apps/usdm/service/usdm_current_wms.map&version=1.3.0&service=WMS&request=GetLegendGraphic&sld_version=1.1.0&layer=usdm_current&format=image/png&STYLE=default";
const WATER_WATCH_WMS_URL: &str =
    "https://edcintl.cr.usgs.gov/geoserver/qdriwaterwatchshapefile/wms?";
const WATER_WATCH_LEGEND_URL: &str =
    "https://edcintl.cr.usgs.gov/geoserver/qdriwaterwatchshapefile/ows?service=WMS&request=GetLegendGraphic&format=image%2Fpng&width=20&height=20&layer=water_watch_today";
const VEGDRI_WMS_URL: &str = "https://vegdri.cr.usgs.gov/wms.php?";
const VEGDRI_LEGEND_URL: &str =
    "https://vegdri.cr.usgs.gov/wms.php?service=WMS&request=GetLegendGraphic&format=image%2Fpng&width=20&height=20&LAYER=DROUGHT_VDRI_EMODIS_1";
const QUICKDRI_LEGEND_URL: &str =
    "https://vegdri.cr.usgs.gov/wms.php?service=WMS&request=GetLegendGraphic&format=image%2Fpng&width=20&height=20&LAYER=DROUGHT_QDRI_EMODIS_1";
const PRECIP7_LEGEND_URL: &str =
    "https://vegdri.cr.usgs.gov/wms.php?service=WMS&request=GetLegendGraphic&format=image%2Fpng&width=20&height=20&LAYER=PRECIP_TP7";
const TIGER_URL: &str =
    "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb/State_County/MapServer";
const WATERSHEDS_URL: &str =
    "https://services.nationalmap.gov/arcgis/rest/services/wbd/MapServer";
const NWM_STREAM_URL: &str =
    "https://mapservice.nohrsc.noaa.gov/arcgis/rest/services/national_water_model/NWM_Stream_Analysis/MapServer";
const NWM_LAND_URL: &str =
    "https://mapservice.nohrsc.noaa.gov/arcgis/rest/services/national_water_model/NWM_Land_Analysis/MapServer";
const SNODAS_URL: &str =
    "https://idpgis.ncep.noaa.gov/arcgis/rest/services/NWS_Observations/NOHRSC_Snow_Analysis/MapServer";
const NCEP_OUTLOOK_URL: &str =
    "https://idpgis.ncep.noaa.gov/arcgis/rest/services/NWS_Climate_Outlooks/cpc_drought_outlk/MapServer";
const NCEI_INDICES_URL: &str =
    "https://gis.ncdc.noaa.gov/arcgis/rest/services/cdo/indices/MapServer";
const USDM_KML_PATH: &str = "/static/dam_inventory/data/usdm_current.kml";
const SWSI_KML_PATH: &str = "/static/dam_inventory/data/SWSI_2017Dec.kml";
const AHPS_GAUGES_URL: &str =
    "http://geoserver.byu.edu/arcgis/rest/services/gaugeviewer/AHPS_gauges/MapServer/0";
const NLCD_IMAGERY_URL: &str =
    "https://sampleserver6.arcgisonline.com/arcgis/rest/services/NLCDLandCover2001/ImageServer";

fn image_wms(url: &str, layers: &str) -> LayerSource {
    LayerSource::ImageWms {
        url: url.to_string(),
        layers: layers.to_string(),
        format: None,
        server_type: "geoserver",
    }
}

fn arcgis_rest(url: &str, layers: Option<&str>) -> LayerSource {
    LayerSource::TileArcGisRest {
        url: url.to_string(),
        layers: layers.map(str::to_string),
    }
}

/// TIGER state/county boundaries.
pub fn tiger_boundaries() -> MapLayer {
    MapLayer::new("State Boundaries", arcgis_rest(TIGER_URL, None))
        .opacity(0.8)
        .legend_extent(regional_legend_extent())
}

/// USGS HUC watershed boundaries.
pub fn watersheds(visible: bool) -> MapLayer {
    let layer = MapLayer::new("HUC Watersheds", arcgis_rest(WATERSHEDS_URL, None))
        .opacity(0.4)
        .legend_extent(regional_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// Current US Drought Monitor, served over WMS.
pub fn usdm_current() -> MapLayer {
    MapLayer::new("USDM", image_wms(USDM_WMS_URL, "usdm_current"))
        .opacity(0.5)
        .legend(vec![LegendEntry::image("Drought Category", USDM_LEGEND_URL)])
        .legend_extent(national_legend_extent())
}

/// Current US Drought Monitor as a server-hosted KML snapshot.
pub fn usdm_kml(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "USDM",
        LayerSource::Kml {
            url: USDM_KML_PATH.to_string(),
        },
    )
    .opacity(0.5)
    .legend(vec![LegendEntry::image("Drought Category", USDM_LEGEND_URL)])
    .legend_extent(national_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// USGS Water Watch current streamflow conditions.
pub fn water_watch(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "USGS Water Watch",
        image_wms(WATER_WATCH_WMS_URL, "water_watch_today"),
    )
    .opacity(0.5)
    .legend(vec![LegendEntry::image(
        "Current Streamflow",
        WATER_WATCH_LEGEND_URL,
    )])
    .legend_extent(national_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// 7-day precipitation total.
pub fn precip_7day(visible: bool) -> MapLayer {
    let layer = MapLayer::new("7-day Precip", image_wms(VEGDRI_WMS_URL, "PRECIP_TP7"))
        .opacity(0.5)
        .legend(vec![LegendEntry::image(
            "7-day Precip Total",
            PRECIP7_LEGEND_URL,
        )])
        .legend_extent(national_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// Vegetation Drought Response Index (weekly eMODIS product).
pub fn vegdri(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "VegDRI",
        image_wms(VEGDRI_WMS_URL, "DROUGHT_VDRI_EMODIS_1"),
    )
    .opacity(0.5)
    .legend(vec![LegendEntry::image("VegDRI Cat", VEGDRI_LEGEND_URL)])
    .legend_extent(national_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// QuickDRI rapid-onset drought index.
pub fn quickdri(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "QuickDRI",
        image_wms(VEGDRI_WMS_URL, "DROUGHT_QDRI_EMODIS_1"),
    )
    .opacity(0.5)
    .legend(vec![LegendEntry::image("QuickDRI Cat", QUICKDRI_LEGEND_URL)])
    .legend_extent(national_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// Surface Water Supply Index (Colorado), KML snapshot with selectable
/// basin polygons.
pub fn swsi_kml(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "SWSI",
        LayerSource::Kml {
            url: SWSI_KML_PATH.to_string(),
        },
    )
    .opacity(0.7)
    .selectable()
    .legend_extent(Extent::new(-110.0, 36.0, -101.5, 41.6));
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// National Water Model streamflow magnitude.
pub fn nwm_streamflow(visible: bool, with_legend: bool) -> MapLayer {
    let mut layer = MapLayer::new(
        "NWM Streamflow",
        arcgis_rest(NWM_STREAM_URL, Some("show:1,2,3,4,5,12")),
    )
    .legend_extent(regional_legend_extent());
    if with_legend {
        layer = layer.legend(vec![
            LegendEntry::line("> 1.25M", "rgba(75,0,115,0.9)"),
            LegendEntry::line("500K - 1.25M", "rgba(176,28,232,0.9)"),
            LegendEntry::line("100K - 500K", "rgba(246,82,213,0.9)"),
            LegendEntry::line("50K - 100K", "rgba(254,7,7,0.9)"),
            LegendEntry::line("25K - 50K", "rgba(252,138,23,0.9)"),
            LegendEntry::line("10K - 25K", "rgba(45,108,183,0.9)"),
            LegendEntry::line("5K - 10K", "rgba(27,127,254,0.9)"),
            LegendEntry::line("2.5K - 5K", "rgba(79,169,195,0.9)"),
            LegendEntry::line("250 - 2.5K", "rgba(122,219,250,0.9)"),
            LegendEntry::line("0 - 250", "rgba(206,222,251,0.9)"),
            LegendEntry::line("No Data", "rgba(195,199,201,0.9)"),
        ]);
    }
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// National Water Model streamflow anomaly.
pub fn nwm_flow_anomaly(visible: bool, with_legend: bool) -> MapLayer {
    let mut layer = MapLayer::new(
        "NWM Flow Anomaly",
        arcgis_rest(NWM_STREAM_URL, Some("show:7,8,9,10,11,12")),
    )
    .legend_extent(regional_legend_extent());
    if with_legend {
        layer = layer.legend(vec![
            LegendEntry::line("High", "rgba(176,28,232,0.9)"),
            LegendEntry::line("", "rgba(61,46,231,0.9)"),
            LegendEntry::line("", "rgba(52,231,181,0.9)"),
            LegendEntry::line("Moderate", "rgba(102,218,148,0.9)"),
            LegendEntry::line("", "rgba(241,156,77,0.9)"),
            LegendEntry::line("", "rgba(175,62,44,0.9)"),
            LegendEntry::line("Low", "rgba(241,42,90,0.9)"),
            LegendEntry::line("No Data", "rgba(195,199,201,0.9)"),
        ]);
    }
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// National Water Model soil moisture saturation.
pub fn nwm_soil_moisture(visible: bool, with_legend: bool) -> MapLayer {
    let mut layer = MapLayer::new("NWM Soil Moisture (%)", arcgis_rest(NWM_LAND_URL, None))
        .opacity(0.5)
        .legend_extent(regional_legend_extent());
    if with_legend {
        layer = layer.legend(vec![
            LegendEntry::polygon("0.95 - 1.0", "rgba(49,56,148,0.5)"),
            LegendEntry::polygon("0.85 - 0.95", "rgba(97,108,181,0.5)"),
            LegendEntry::polygon("0.75 - 0.85", "rgba(145,180,216,0.5)"),
            LegendEntry::polygon("0.65 - 0.75", "rgba(189,225,225,0.5)"),
            LegendEntry::polygon("0.55 - 0.65", "rgba(223,240,209,0.5)"),
            LegendEntry::polygon("0.45 - 0.55", "rgba(225,255,191,0.5)"),
            LegendEntry::polygon("0.35 - 0.45", "rgba(255,222,150,0.5)"),
            LegendEntry::polygon("0.25 - 0.35", "rgba(255,188,112,0.5)"),
            LegendEntry::polygon("0.15 - 0.25", "rgba(235,141,81,0.5)"),
            LegendEntry::polygon("0.05 - 0.15", "rgba(201,77,58,0.5)"),
            LegendEntry::polygon("0 - 0.05", "rgba(166,0,38,0.5)"),
        ]);
    }
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// SNODAS modeled snow water equivalent.
pub fn snodas_swe(visible: bool, with_legend: bool) -> MapLayer {
    let mut layer = MapLayer::new(
        "SNODAS Model SWE (in)",
        arcgis_rest(SNODAS_URL, Some("show:7")),
    )
    .opacity(0.7)
    .legend_extent(regional_legend_extent());
    if with_legend {
        layer = layer.legend(vec![
            LegendEntry::polygon("0.04", "rgba(144,175,180,0.7)"),
            LegendEntry::polygon("0.20", "rgba(128,165,192,0.7)"),
            LegendEntry::polygon("0.39", "rgba(95,126,181,0.7)"),
            LegendEntry::polygon("0.78", "rgba(69,73,171,0.7)"),
            LegendEntry::polygon("2.00", "rgba(71,46,167,0.7)"),
            LegendEntry::polygon("3.90", "rgba(79,20,144,0.7)"),
            LegendEntry::polygon("5.90", "rgba(135,33,164,0.7)"),
            LegendEntry::polygon("9.80", "rgba(155,53,148,0.7)"),
            LegendEntry::polygon("20", "rgba(189,88,154,0.7)"),
            LegendEntry::polygon("30", "rgba(189,115,144,0.7)"),
            LegendEntry::polygon("39", "rgba(195,142,150,0.7)"),
            LegendEntry::polygon("79", "rgba(179,158,153,0.7)"),
        ]);
    }
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

fn ncep_outlook_legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry::polygon("Persistence", "rgba(155,113,73,0.7)"),
        LegendEntry::polygon("Improvement", "rgba(226,213,192,0.7)"),
        LegendEntry::polygon("Removal", "rgba(178,173,105,0.7)"),
        LegendEntry::polygon("Development", "rgba(255,222,100,0.7)"),
    ]
}

/// NCEP monthly drought outlook.
pub fn ncep_monthly_outlook(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "NCEP Monthly Drought Outlook",
        arcgis_rest(NCEP_OUTLOOK_URL, Some("show:0")),
    )
    .opacity(0.7)
    .legend(ncep_outlook_legend())
    .legend_extent(regional_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// NCEP seasonal drought outlook.
pub fn ncep_seasonal_outlook(visible: bool) -> MapLayer {
    let layer = MapLayer::new(
        "NCEP Seasonal Drought Outlook",
        arcgis_rest(NCEP_OUTLOOK_URL, Some("show:1")),
    )
    .opacity(0.7)
    .legend(ncep_outlook_legend())
    .legend_extent(regional_legend_extent());
    if visible {
        layer
    } else {
        layer.hidden()
    }
}

/// NCEI 6-month Standardized Precipitation Index.
pub fn ncei_spi6() -> MapLayer {
    MapLayer::new("SPI (6-month)", arcgis_rest(NCEI_INDICES_URL, Some("show:14"))).opacity(0.6)
}

/// NCEI Palmer Drought Severity Index.
pub fn ncei_pdsi() -> MapLayer {
    MapLayer::new("PDSI", arcgis_rest(NCEI_INDICES_URL, Some("show:2"))).opacity(0.6)
}

/// AHPS river gauge points, for the ESRI map widget.
pub fn ahps_gauges() -> EsriLayer {
    EsriLayer::feature(AHPS_GAUGES_URL)
}

/// NLCD 2001 land cover imagery, for the ESRI map widget.
pub fn nlcd_land_cover() -> EsriLayer {
    EsriLayer::imagery(NLCD_IMAGERY_URL)
}
