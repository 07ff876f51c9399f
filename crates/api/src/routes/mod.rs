pub mod dams;
pub mod health;
pub mod maps;

use axum::Router;

use crate::state::AppState;

/// Build the `/dam-inventory` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                      home view (inventory + drought overview maps)
/// /drought               current drought conditions
/// /drought_fx            drought forecast products
/// /drought_nwmfx         drought forecast products (legacy path)
/// /drought_index         drought index snapshots
/// /drought_prec          precipitation and snowpack
/// /drought_outlook       NCEP monthly and seasonal outlooks
/// /drought_veg_index     vegetation drought indices
/// /drought_4pane         four-pane comparison view
///
/// /dams                  dam listing table
/// /dams/add              add-dam form (GET render, POST submit)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Home and the preconfigured drought map pages.
        .merge(maps::router())
        // Dam listing and creation.
        .nest("/dams", dams::router())
}
