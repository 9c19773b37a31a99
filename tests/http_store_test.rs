use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use catalog_admin::framework::mock::ScriptedConfirm;
use catalog_admin::framework::{EntityManager, SubmitOutcome, SyncError, ViewPhase};
use catalog_admin::messages::Messages;
use catalog_admin::model::Category;
use catalog_admin::store::{HttpStore, RemoteStore, StoreError, StoreRequest};
use serde_json::{json, Value};
use std::sync::Arc;

async fn list_categories() -> Json<Value> {
    Json(json!({ "success": true, "data": [{ "id": 1, "name": "Beverages" }] }))
}

async fn create_category(Json(body): Json<Value>) -> Json<Value> {
    if body.get("name").and_then(Value::as_str) == Some("Snacks") {
        Json(json!({ "success": true, "id": 7 }))
    } else {
        Json(json!({ "success": false, "message": "Unexpected body" }))
    }
}

async fn delete_product(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CONFLICT,
        Json(json!({ "success": false, "message": format!("Product {id} has dependent orders") })),
    )
}

async fn broken_products() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal Server Error</html>")
}

/// Starts a catalog API stub on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/categorias", get(list_categories).post(create_category))
        .route("/api/productos", get(broken_products))
        .route("/api/productos/{id}", delete(delete_product));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_http_store_round_trip() {
    let store = HttpStore::new(&spawn_server().await, None).unwrap();

    let reply = store.send(StoreRequest::get("/api/categorias")).await.unwrap();
    assert_eq!(reply.status, 200);
    assert!(reply.envelope().unwrap().success);

    let reply = store.send(StoreRequest::delete("/api/productos/3")).await.unwrap();
    assert_eq!(reply.status, 409);
    assert_eq!(
        reply.envelope().unwrap().message.as_deref(),
        Some("Product 3 has dependent orders")
    );
}

#[tokio::test]
async fn test_non_json_body_becomes_null() {
    let store = HttpStore::new(&spawn_server().await, None).unwrap();

    let reply = store.send(StoreRequest::get("/api/productos")).await.unwrap();
    assert_eq!(reply.status, 500);
    assert_eq!(reply.body, Value::Null);
}

#[tokio::test]
async fn test_manager_over_http() {
    let store = HttpStore::new(&spawn_server().await, None).unwrap();
    let mut manager: EntityManager<Category, HttpStore> = EntityManager::new(
        store,
        Arc::new(ScriptedConfirm::default()),
        Arc::new(Messages::default()),
    );

    manager.initial_load().await.unwrap();
    manager.update_field("name", "Snacks").unwrap();
    assert_eq!(manager.submit().await.unwrap(), SubmitOutcome::Created(7));
    assert_eq!(
        manager.state().collection,
        vec![Category::new(1, "Beverages"), Category::new(7, "Snacks")]
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpStore::new(&format!("http://{}", addr), None).unwrap();
    let err = store.send(StoreRequest::get("/api/categorias")).await.unwrap_err();
    assert!(matches!(err, StoreError::Http(_)));

    let mut manager: EntityManager<Category, HttpStore> = EntityManager::new(
        store,
        Arc::new(ScriptedConfirm::default()),
        Arc::new(Messages::default()),
    );
    let err = manager.initial_load().await.unwrap_err();
    assert_eq!(
        err,
        SyncError::Transport { status: None, message: "Error al cargar categorías".into() }
    );
    assert_eq!(manager.state().phase(), ViewPhase::Error("Error al cargar categorías"));
}
