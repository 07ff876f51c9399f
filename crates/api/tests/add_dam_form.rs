//! Integration tests for the add-dam form flow.
//!
//! Each test gets a fresh migrated database via `#[sqlx::test]` and drives
//! the full router (middleware included) with `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{auth_header, build_test_app, build_test_app_with_limit, form_body, point_geometry};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/dam-inventory/dams/add")
        .header(header::AUTHORIZATION, auth_header())
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body))
        .unwrap()
}

async fn dam_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM dams")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn valid_submission() -> String {
    form_body(&[
        ("add-button", "submit"),
        ("geometry", &point_geometry(-104.9, 39.7)),
        ("name", "Cherry Creek Dam"),
        ("owner", "Army Corp"),
        ("river", "Cherry Creek"),
        ("date-built", "August 1, 1950"),
    ])
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_form_renders_defaults(pool: PgPool) {
    let app = build_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/dam-inventory/dams/add")
                .header(header::AUTHORIZATION, auth_header())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let form = &json["data"]["form"];

    assert_eq!(form["owner_input"]["initial"], "Reclamation");
    assert_eq!(form["name_input"]["initial"], "");
    assert_eq!(form["river_input"]["initial"], "");
    assert_eq!(form["date_built_input"]["format"], "MM d, yyyy");
    assert_eq!(form["owner_input"]["options"].as_array().unwrap().len(), 3);
    assert!(json["data"]["notice"].is_null());
    assert!(form["name_input"]["error"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_submission_creates_dam_and_redirects(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = app.oneshot(form_request(valid_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/dam-inventory"
    );
    assert_eq!(dam_count(&pool).await, 1);

    let (name, owner): (String, String) =
        sqlx::query_as("SELECT name, owner FROM dams")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(name, "Cherry Creek Dam");
    assert_eq!(owner, "Army Corp");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_location_re_renders_with_error(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let body = form_body(&[
        ("add-button", "submit"),
        ("geometry", ""),
        ("name", "Cherry Creek Dam"),
        ("owner", "Army Corp"),
        ("river", "Cherry Creek"),
        ("date-built", "August 1, 1950"),
    ]);
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(dam_count(&pool).await, 0);

    let json = body_json(response).await;
    assert_eq!(json["data"]["notice"], "Please fix errors.");
    assert_eq!(
        json["data"]["form"]["location_error"],
        "Location is required."
    );
    // Submitted values survive the round trip.
    assert_eq!(json["data"]["form"]["name_input"]["initial"], "Cherry Creek Dam");
    assert_eq!(json["data"]["form"]["river_input"]["initial"], "Cherry Creek");
    assert_eq!(
        json["data"]["form"]["date_built_input"]["initial"],
        "August 1, 1950"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_submission_reports_every_field(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let body = form_body(&[("add-button", "submit")]);
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(dam_count(&pool).await, 0);

    let json = body_json(response).await;
    let form = &json["data"]["form"];
    assert_eq!(form["location_error"], "Location is required.");
    assert_eq!(form["name_input"]["error"], "Name is required.");
    assert_eq!(form["owner_input"]["error"], "Owner is required.");
    assert_eq!(form["river_input"]["error"], "River is required.");
    assert_eq!(
        form["date_built_input"]["error"],
        "Date Built is required."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unparseable_date_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let body = form_body(&[
        ("add-button", "submit"),
        ("geometry", &point_geometry(-104.9, 39.7)),
        ("name", "Cherry Creek Dam"),
        ("owner", "Army Corp"),
        ("river", "Cherry Creek"),
        ("date-built", "not a date"),
    ]);
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(dam_count(&pool).await, 0);

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["form"]["date_built_input"]["error"],
        "Date Built must be a valid date."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_without_marker_renders_defaults(pool: PgPool) {
    let app = build_test_app(pool.clone());

    // No add-button field at all: not a submission, just render the form.
    let body = form_body(&[("name", "Cherry Creek Dam")]);
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(dam_count(&pool).await, 0);

    let json = body_json(response).await;
    assert_eq!(json["data"]["form"]["name_input"]["initial"], "");
    assert_eq!(json["data"]["form"]["owner_input"]["initial"], "Reclamation");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dam_cap_rejects_submission_with_conflict(pool: PgPool) {
    let app = build_test_app_with_limit(pool.clone(), Some(1));

    let first = app
        .clone()
        .oneshot(form_request(valid_submission()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = app.oneshot(form_request(valid_submission())).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(dam_count(&pool).await, 1);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Maximum number of dams reached");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unauthenticated_request_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/dam-inventory/dams/add")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}
