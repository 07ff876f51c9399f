//! Route definitions for the home view and the drought map pages.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::{home, maps};
use crate::state::AppState;

/// Map page routes mounted at the app root.
///
/// ```text
/// GET  /                    -> home
/// GET  /drought             -> drought_map
/// GET  /drought_fx          -> drought_forecast_map
/// GET  /drought_nwmfx       -> drought_forecast_map (legacy path)
/// GET  /drought_index       -> drought_index_map
/// GET  /drought_prec        -> drought_precip_map
/// GET  /drought_outlook     -> drought_outlook_map
/// GET  /drought_veg_index   -> drought_veg_index_map
/// GET  /drought_4pane       -> drought_4pane
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/drought", get(maps::drought_map))
        .route("/drought_fx", get(maps::drought_forecast_map))
        .route("/drought_nwmfx", get(maps::drought_forecast_map))
        .route("/drought_index", get(maps::drought_index_map))
        .route("/drought_prec", get(maps::drought_precip_map))
        .route("/drought_outlook", get(maps::drought_outlook_map))
        .route("/drought_veg_index", get(maps::drought_veg_index_map))
        .route("/drought_4pane", get(maps::drought_4pane))
}
