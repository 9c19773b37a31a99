use catalog_admin::framework::mock::{MockStore, ScriptedConfirm};
use catalog_admin::framework::{
    EditMode, EntityManager, RemoveOutcome, SubmitOutcome, SyncError, ViewPhase,
};
use catalog_admin::messages::{Locale, Messages};
use catalog_admin::model::Category;
use catalog_admin::store::Method;
use serde_json::{json, Value};
use std::sync::Arc;

fn manager(store: &MockStore, confirm: &ScriptedConfirm) -> EntityManager<Category, MockStore> {
    EntityManager::new(store.clone(), Arc::new(confirm.clone()), Arc::new(Messages::default()))
}

fn expect_beverages(store: &MockStore) {
    store.expect(Method::Get, "/api/categorias").return_json(json!({
        "success": true,
        "data": [{ "id": 1, "name": "Beverages" }]
    }));
}

#[tokio::test]
async fn test_initial_load_replaces_collection() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    expect_beverages(&store);

    let mut manager = manager(&store, &confirm);
    assert_eq!(manager.state().phase(), ViewPhase::Loading);

    manager.initial_load().await.unwrap();

    let state = manager.state();
    assert_eq!(state.collection, vec![Category::new(1, "Beverages")]);
    assert!(!state.loading);
    assert_eq!(state.phase(), ViewPhase::Ready { banner: None });
    store.verify();
}

#[tokio::test]
async fn test_load_failure_replaces_the_view() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    store
        .expect(Method::Get, "/api/categorias")
        .return_status(500, Value::Null);

    let mut manager = manager(&store, &confirm);
    let err = manager.initial_load().await.unwrap_err();

    assert_eq!(
        err,
        SyncError::Transport { status: Some(500), message: "Error al cargar categorías".into() }
    );
    assert_eq!(manager.state().phase(), ViewPhase::Error("Error al cargar categorías"));
    assert!(manager.state().collection.is_empty());
}

#[tokio::test]
async fn test_load_without_success_flag() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    store
        .expect(Method::Get, "/api/categorias")
        .return_json(json!({ "data": [] }));

    let mut manager = manager(&store, &confirm);
    let err = manager.initial_load().await.unwrap_err();

    assert_eq!(err, SyncError::Application("Error en los datos recibidos".into()));
    assert!(!manager.state().loading);
}

#[tokio::test]
async fn test_create_appends_and_clears_form() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    expect_beverages(&store);
    store
        .expect(Method::Post, "/api/categorias")
        .return_json(json!({ "success": true, "id": 7 }));

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();
    manager.update_field("name", "Snacks").unwrap();

    let outcome = manager.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Created(7));
    assert_eq!(
        manager.state().collection,
        vec![Category::new(1, "Beverages"), Category::new(7, "Snacks")]
    );
    assert_eq!(manager.state().edit_buffer.mode(), EditMode::Create);
    assert_eq!(manager.state().edit_buffer.fields.name, "");

    let sent = store.requests();
    assert_eq!(sent[1].body, Some(json!({ "name": "Snacks" })));
    store.verify();
}

#[tokio::test]
async fn test_update_merges_by_id() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    expect_beverages(&store);
    store
        .expect(Method::Put, "/api/categorias/1")
        .return_json(json!({ "success": true }));

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();

    let beverages = manager.state().collection[0].clone();
    manager.begin_edit(&beverages);
    assert_eq!(manager.state().edit_buffer.mode(), EditMode::Edit(1));
    assert_eq!(manager.state().edit_buffer.fields.name, "Beverages");

    manager.update_field("name", "Drinks").unwrap();
    assert_eq!(manager.submit().await.unwrap(), SubmitOutcome::Updated(1));

    assert_eq!(manager.state().collection, vec![Category::new(1, "Drinks")]);
    assert!(!manager.state().edit_buffer.is_edit_mode());
    assert_eq!(store.requests()[1].body, Some(json!({ "name": "Drinks" })));
}

#[tokio::test]
async fn test_failed_submit_keeps_buffer_and_shows_server_message() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    expect_beverages(&store);
    store
        .expect(Method::Post, "/api/categorias")
        .return_json(json!({ "success": false, "message": "Category already exists" }));

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();
    manager.update_field("name", "Beverages").unwrap();

    let err = manager.submit().await.unwrap_err();

    assert_eq!(err, SyncError::Application("Category already exists".into()));
    assert_eq!(
        manager.state().phase(),
        ViewPhase::Ready { banner: Some("Category already exists") }
    );
    assert_eq!(manager.state().collection.len(), 1);
    assert_eq!(manager.state().edit_buffer.fields.name, "Beverages");
}

#[tokio::test]
async fn test_unreachable_server_uses_save_fallback() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    store
        .expect(Method::Post, "/api/categorias")
        .return_unreachable("connection refused");

    let mut manager = manager(&store, &confirm);
    manager.update_field("name", "Snacks").unwrap();

    let err = manager.submit().await.unwrap_err();
    assert_eq!(err, SyncError::Transport { status: None, message: "Error al guardar".into() });
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_empty_name_sends_nothing() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    expect_beverages(&store);

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();

    let err = manager.submit().await.unwrap_err();

    assert_eq!(err, SyncError::Validation("El nombre de la categoría es obligatorio".into()));
    assert_eq!(store.request_count(), 1);
    assert_eq!(
        manager.state().phase(),
        ViewPhase::Ready { banner: Some("El nombre de la categoría es obligatorio") }
    );
}

#[tokio::test]
async fn test_successful_submit_clears_previous_error() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    store
        .expect(Method::Post, "/api/categorias")
        .return_json(json!({ "success": true, "id": 2 }));

    let mut manager = manager(&store, &confirm);
    assert!(manager.submit().await.is_err());
    assert!(manager.state().error_message.is_some());

    manager.update_field("name", "Tea").unwrap();
    manager.submit().await.unwrap();
    assert_eq!(manager.state().error_message, None);
}

#[tokio::test]
async fn test_delete_after_confirmation() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::new([true]);
    expect_beverages(&store);
    store
        .expect(Method::Delete, "/api/categorias/1")
        .return_json(json!({ "success": true }));

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();

    assert_eq!(manager.remove(1).await.unwrap(), RemoveOutcome::Removed(1));
    assert!(manager.state().collection.is_empty());
    assert_eq!(
        confirm.prompts(),
        vec!["¿Estás seguro de eliminar esta categoría?".to_string()]
    );
    store.verify();
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::new([false]);
    expect_beverages(&store);

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();

    assert_eq!(manager.remove(1).await.unwrap(), RemoveOutcome::Declined);
    assert_eq!(manager.state().collection.len(), 1);
    assert_eq!(store.request_count(), 1);
}

#[tokio::test]
async fn test_cancel_edit_discards_changes() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    expect_beverages(&store);

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();

    let beverages = manager.state().collection[0].clone();
    manager.begin_edit(&beverages);
    manager.update_field("name", "Changed").unwrap();
    manager.cancel_edit();

    assert_eq!(manager.state().edit_buffer.mode(), EditMode::Create);
    assert_eq!(manager.state().edit_buffer.fields.name, "");
    assert_eq!(manager.state().collection, vec![Category::new(1, "Beverages")]);
}

#[tokio::test]
async fn test_english_fallbacks() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::default();
    store
        .expect(Method::Get, "/api/categorias")
        .return_status(503, json!({ "success": false }));

    let mut manager: EntityManager<Category, MockStore> = EntityManager::new(
        store.clone(),
        Arc::new(confirm),
        Arc::new(Messages::new(Locale::English)),
    );
    manager.initial_load().await.unwrap_err();

    assert_eq!(manager.state().phase(), ViewPhase::Error("Failed to load categories"));
}

#[tokio::test]
async fn test_writes_touch_only_their_record() {
    let store = MockStore::new();
    let confirm = ScriptedConfirm::new([true]);
    store.expect(Method::Get, "/api/categorias").return_json(json!({
        "success": true,
        "data": [
            { "id": 1, "name": "Beverages" },
            { "id": 2, "name": "Snacks" },
            { "id": 3, "name": "Dairy" }
        ]
    }));
    store
        .expect(Method::Put, "/api/categorias/2")
        .return_json(json!({ "success": true }));
    store
        .expect(Method::Delete, "/api/categorias/1")
        .return_json(json!({ "success": true }));

    let mut manager = manager(&store, &confirm);
    manager.initial_load().await.unwrap();

    let snacks = manager.state().find(2).cloned().unwrap();
    manager.begin_edit(&snacks);
    manager.update_field("name", "Chips").unwrap();
    manager.submit().await.unwrap();

    assert_eq!(
        manager.state().collection,
        vec![
            Category::new(1, "Beverages"),
            Category::new(2, "Chips"),
            Category::new(3, "Dairy"),
        ]
    );

    assert_eq!(manager.state().collection.len(), 3);
    manager.remove(1).await.unwrap();
    assert_eq!(manager.state().collection.len(), 2);
    assert!(manager.state().find(1).is_none());
    assert_eq!(
        manager.state().collection,
        vec![Category::new(2, "Chips"), Category::new(3, "Dairy")]
    );
    store.verify();
}
