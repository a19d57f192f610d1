use axum::http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::{Value, json};

use cinema_catalog_schema::reviews;

use crate::helpers::{MovieSeed, database, seed_movie, seed_review, server};

fn review_body(movie: i32, parent: Option<i32>) -> Value {
    json!({
        "email": "viewer@example.com",
        "name": "Viewer",
        "text": "The third act drags.",
        "movie": movie,
        "parent": parent,
    })
}

#[tokio::test]
async fn should_create_root_review() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = server(&db);

    let response = server.post("/reviews").json(&review_body(1, None)).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["email"], "viewer@example.com");
    assert_eq!(body["name"], "Viewer");
    assert_eq!(body["movie"], 1);
    assert!(body["parent"].is_null());
    assert!(body["id"].as_i64().is_some());
    assert!(body["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn should_nest_reply_under_parent_in_movie_detail() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    seed_review(&db, 1, 1, None).await;
    let server = server(&db);

    let response = server.post("/reviews").json(&review_body(1, Some(1))).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let detail: Value = server.get("/movies/1").await.json();
    let roots = detail["reviews"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "viewer 1");
    assert_eq!(roots[0]["children"][0]["text"], "The third act drags.");
}

#[tokio::test]
async fn should_reject_parent_from_another_movie() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    seed_movie(&db, MovieSeed::published(2)).await;
    seed_review(&db, 1, 2, None).await;
    let server = server(&db);

    let response = server.post("/reviews").json(&review_body(1, Some(1))).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_FIELD");
    assert_eq!(body["field"], "parent");
    assert_eq!(reviews::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_review_for_draft_movie() {
    let db = database().await;
    seed_movie(&db, MovieSeed::draft(1)).await;
    let server = server(&db);

    let response = server.post("/reviews").json(&review_body(1, None)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "movie");
}

#[tokio::test]
async fn should_reject_invalid_email() {
    let db = database().await;
    seed_movie(&db, MovieSeed::published(1)).await;
    let server = server(&db);

    let mut body = review_body(1, None);
    body["email"] = json!("viewer.example.com");
    let response = server.post("/reviews").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "email");
}
