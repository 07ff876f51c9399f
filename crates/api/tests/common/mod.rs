use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use dam_inventory_api::auth::jwt::{generate_access_token, JwtConfig};
use dam_inventory_api::config::ServerConfig;
use dam_inventory_api::router::build_app_router;
use dam_inventory_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(max_dams: Option<i64>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_dams,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_limit(pool, None)
}

/// Like [`build_test_app`] but with a dam-count cap configured.
pub fn build_test_app_with_limit(pool: PgPool, max_dams: Option<i64>) -> Router {
    let config = test_config(max_dams);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// `Authorization` header value with a freshly minted token for `test-user`.
pub fn auth_header() -> String {
    let config = test_config(None);
    let token =
        generate_access_token("test-user", &config.jwt).expect("failed to generate test token");
    format!("Bearer {token}")
}

/// Percent-encode a form value (application/x-www-form-urlencoded).
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// Encode key/value pairs as an `application/x-www-form-urlencoded` body.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A valid single-point GeoJSON geometry string, as the draw widget emits.
pub fn point_geometry(longitude: f64, latitude: f64) -> String {
    format!(
        r#"{{"type":"Point","coordinates":[{longitude},{latitude}]}}"#
    )
}
