use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{database, seed_actor, server};

#[tokio::test]
async fn should_list_actors_by_page() {
    let db = database().await;
    for id in 1..=3 {
        seed_actor(&db, id, &format!("Actor {id}")).await;
    }
    let server = server(&db);

    let response = server
        .get("/actors")
        .add_raw_query_param("per-page=2&page=2")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([{ "id": 3, "name": "Actor 3", "image": "actors/3.jpg" }])
    );
}

#[tokio::test]
async fn should_return_actor_detail() {
    let db = database().await;
    seed_actor(&db, 1, "Lead").await;
    let server = server(&db);

    let body: Value = server.get("/actors/1").await.json();

    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Lead",
            "age": 50,
            "description": "About Lead",
            "image": "actors/1.jpg",
        })
    );
}

#[tokio::test]
async fn should_return_not_found_for_unknown_actor() {
    let db = database().await;
    let server = server(&db);

    let response = server.get("/actors/7").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "ACTOR_NOT_FOUND");
}

#[tokio::test]
async fn should_report_ready_when_database_answers() {
    let db = database().await;
    let server = server(&db);

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}
