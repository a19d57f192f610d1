use axum::http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::{Value, json};

use cinema_catalog_schema::ratings;

use crate::helpers::{MovieSeed, database, from_ip, http_server, seed_movie, server};

#[tokio::test]
async fn should_create_rating_for_client() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = server(&db);

    let response = from_ip(server.post("/ratings"), "10.0.0.1")
        .json(&json!({ "star": 4, "movie": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body, json!({ "star": 4, "movie": 1 }));

    let rows = ratings::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ip, "10.0.0.1");
}

#[tokio::test]
async fn should_overwrite_previous_rating_from_same_client() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = server(&db);

    for star in [2, 5] {
        let response = from_ip(server.post("/ratings"), "10.0.0.1")
            .json(&json!({ "star": star, "movie": 1 }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let rows = ratings::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].star, 5);
}

#[tokio::test]
async fn should_keep_separate_rows_per_client() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = server(&db);

    for ip in ["10.0.0.1", "10.0.0.2"] {
        from_ip(server.post("/ratings"), ip)
            .json(&json!({ "star": 3, "movie": 1 }))
            .await;
    }

    assert_eq!(ratings::Entity::find().all(&db).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_key_rating_by_peer_address_without_forwarded_for() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = http_server(&db);

    let response = server
        .post("/ratings")
        .json(&json!({ "star": 1, "movie": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let rows = ratings::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows[0].ip, "127.0.0.1");
}

#[tokio::test]
async fn should_reject_star_out_of_range() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = server(&db);

    let response = from_ip(server.post("/ratings"), "10.0.0.1")
        .json(&json!({ "star": 6, "movie": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_FIELD");
    assert_eq!(body["field"], "star");
    assert!(ratings::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_rating_for_draft_movie() {
    let db = database().await;
    seed_movie(&db, MovieSeed::draft(1)).await;
    let server = server(&db);

    let response = from_ip(server.post("/ratings"), "10.0.0.1")
        .json(&json!({ "star": 3, "movie": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "movie");
}

#[tokio::test]
async fn should_reject_body_missing_movie() {
    let db = database().await;
    let server = server(&db);

    let response = from_ip(server.post("/ratings"), "10.0.0.1")
        .json(&json!({ "star": 3 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MALFORMED_BODY");
}
