mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn create_item(app: &TestApp, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .post_authenticated("/api/items", token)
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"].clone()
}

#[tokio::test]
async fn test_items_require_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/items")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post("/api/items")
        .json(&json!({ "name": "Hammer" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_get_item() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    let item = create_item(
        &app,
        &token,
        json!({ "name": "Hammer", "description": "Claw hammer", "category": "tools" }),
    )
    .await;

    assert_eq!(item["name"], "Hammer");
    assert_eq!(item["description"], "Claw hammer");
    assert_eq!(item["category"], "tools");
    assert_eq!(item["is_active"], true);
    assert_eq!(item["created_at"], item["updated_at"]);

    let id = item["id"].as_str().unwrap();
    let response = app
        .get_authenticated(&format!("/api/items/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"], item);
}

#[tokio::test]
async fn test_create_item_invalid_name() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    let response = app
        .post_authenticated("/api/items", &token)
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_items() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    create_item(&app, &token, json!({ "name": "First" })).await;
    create_item(&app, &token, json!({ "name": "Second" })).await;

    let response = app
        .get_authenticated("/api/items", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_update_item_replaces_fields() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    let item = create_item(
        &app,
        &token,
        json!({ "name": "Hammer", "description": "Claw hammer", "category": "tools" }),
    )
    .await;
    let id = item["id"].as_str().unwrap();

    let response = app
        .put_authenticated(&format!("/api/items/{}", id), &token)
        .json(&json!({ "name": "Sledgehammer" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .get_authenticated(&format!("/api/items/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], item["id"]);
    assert_eq!(body["data"]["name"], "Sledgehammer");
    assert!(body["data"]["description"].is_null());
    assert_eq!(body["data"]["category"], "");
    assert_eq!(body["data"]["created_at"], item["created_at"]);
    assert_ne!(body["data"]["updated_at"], item["updated_at"]);
}

#[tokio::test]
async fn test_delete_item_is_soft() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    let item = create_item(&app, &token, json!({ "name": "Hammer" })).await;
    let path = format!("/api/items/{}", item["id"].as_str().unwrap());

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .get_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .put_authenticated(&path, &token)
        .json(&json!({ "name": "Revived" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get_authenticated("/api/items", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_item_id_must_be_uuid() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    let response = app
        .get_authenticated("/api/items/42", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_item() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@b.com", "secret_pw").await;

    let response = app
        .get_authenticated(&format!("/api/items/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
