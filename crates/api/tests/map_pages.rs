//! Integration tests for the home view, the dam listing, and the drought
//! map pages.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use dam_inventory_db::models::dam::CreateDam;
use dam_inventory_db::repositories::DamRepo;

use common::{auth_header, build_test_app};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, auth_header())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    body_json(response).await
}

fn sample_dam(name: &str, longitude: f64, latitude: f64) -> CreateDam {
    CreateDam {
        name: name.to_string(),
        owner: "Reclamation".to_string(),
        river: "Colorado River".to_string(),
        date_built: NaiveDate::from_ymd_opt(1936, 3, 1).unwrap(),
        longitude,
        latitude,
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_home_uses_fallback_center(pool: PgPool) {
    let app = build_test_app(pool);

    let json = get_json(app, "/dam-inventory").await;
    let view = &json["data"]["inventory_map"]["view"];

    assert_eq!(view["center"][0], -98.6);
    assert_eq!(view["center"][1], 39.8);
    assert_eq!(view["zoom"], 5.5);
    assert_eq!(
        json["data"]["inventory_map"]["layers"][0]["source"]["collection"]["features"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_centers_on_mean_of_dam_locations(pool: PgPool) {
    DamRepo::insert(&pool, &sample_dam("West Dam", -110.0, 38.0))
        .await
        .unwrap();
    DamRepo::insert(&pool, &sample_dam("East Dam", -100.0, 42.0))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let json = get_json(app, "/dam-inventory").await;
    let view = &json["data"]["inventory_map"]["view"];

    assert_eq!(view["center"][0], -105.0);
    assert_eq!(view["center"][1], 40.0);

    let features = json["data"]["inventory_map"]["layers"][0]["source"]["collection"]["features"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["geometry"]["coordinates"][0], -110.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_includes_add_button_and_overview_layers(pool: PgPool) {
    let app = build_test_app(pool);

    let json = get_json(app, "/dam-inventory").await;

    assert_eq!(
        json["data"]["add_dam_button"]["href"],
        "/dam-inventory/dams/add"
    );
    let layers = json["data"]["drought_overview_map"]["layers"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(layers.len(), 6);
    assert_eq!(json["data"]["drought_overview_map"]["show_legend"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_includes_the_gauge_map(pool: PgPool) {
    let app = build_test_app(pool);

    let json = get_json(app, "/dam-inventory").await;
    let gauges = &json["data"]["gauges_map"];

    assert_eq!(gauges["basemap"], "topo");
    assert_eq!(gauges["height"], "650px");
    assert_eq!(gauges["view"]["center"][0], -100.0);
    assert_eq!(gauges["view"]["center"][1], 40.0);
    assert_eq!(gauges["view"]["zoom"], 4.0);

    let layers = gauges["layers"].as_array().unwrap().clone();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["kind"], "imagery_layer");
    assert_eq!(layers[1]["kind"], "feature_layer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_preserves_insertion_order_and_formats_dates(pool: PgPool) {
    DamRepo::insert(&pool, &sample_dam("Hoover Dam", -114.7, 36.0))
        .await
        .unwrap();
    DamRepo::insert(&pool, &sample_dam("Glen Canyon Dam", -111.5, 36.9))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let json = get_json(app, "/dam-inventory/dams").await;
    let rows = json["data"]["table"]["rows"].as_array().unwrap().clone();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Hoover Dam");
    assert_eq!(rows[1][0], "Glen Canyon Dam");
    // Display format has no zero-padded day.
    assert_eq!(rows[0][3], "March 1, 1936");
    assert_eq!(
        json["data"]["table"]["column_names"],
        serde_json::json!(["Name", "Owner", "River", "Date Built"])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn drought_pages_share_the_front_range_viewport(pool: PgPool) {
    let app = build_test_app(pool);

    for uri in [
        "/dam-inventory/drought",
        "/dam-inventory/drought_fx",
        "/dam-inventory/drought_index",
        "/dam-inventory/drought_prec",
        "/dam-inventory/drought_outlook",
        "/dam-inventory/drought_veg_index",
    ] {
        let json = get_json(app.clone(), uri).await;
        let view = &json["data"]["map"]["view"];
        assert_eq!(view["center"][0], -105.6, "center of {uri}");
        assert_eq!(view["center"][1], 39.0, "center of {uri}");
        assert_eq!(view["zoom"], 7.0, "zoom of {uri}");
        assert_eq!(json["data"]["map"]["height"], "630px");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn drought_page_layer_compositions(pool: PgPool) {
    let app = build_test_app(pool);

    let json = get_json(app.clone(), "/dam-inventory/drought").await;
    assert_eq!(json["data"]["map"]["layers"].as_array().unwrap().len(), 12);

    let json = get_json(app.clone(), "/dam-inventory/drought_outlook").await;
    let layers = json["data"]["map"]["layers"].as_array().unwrap().clone();
    assert_eq!(layers.len(), 4);
    // The monthly outlook starts visible, the seasonal outlook hidden.
    assert_eq!(layers[1]["visible"], true);
    assert_eq!(layers[2]["visible"], false);

    let json = get_json(app, "/dam-inventory/drought_veg_index").await;
    let layers = json["data"]["map"]["layers"].as_array().unwrap().clone();
    assert_eq!(layers.len(), 4);
    assert_eq!(layers[1]["visible"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn four_pane_view_has_compact_panes(pool: PgPool) {
    let app = build_test_app(pool);

    let json = get_json(app, "/dam-inventory/drought_4pane").await;

    for pane in ["conditions", "index", "outlook", "water"] {
        let map = &json["data"][pane];
        assert_eq!(map["height"], "400px", "height of {pane}");
        assert_eq!(map["show_legend"], false, "legend of {pane}");
        assert_eq!(map["view"]["zoom"], 6.0, "zoom of {pane}");
        assert!(map["controls"].as_array().unwrap().is_empty());
    }
    assert_eq!(json["data"]["water"]["layers"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_endpoint_reports_db_status(pool: PgPool) {
    let app = build_test_app(pool);

    // No auth required for health.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
