//! Route definitions for the dam record store.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::dams;
use crate::state::AppState;

/// Dam routes mounted at `/dams`.
///
/// ```text
/// GET  /      -> list_dams
/// GET  /add   -> show_add_form
/// POST /add   -> submit_add_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dams::list_dams))
        .route("/add", get(dams::show_add_form).post(dams::submit_add_form))
}
