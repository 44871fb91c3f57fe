#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

mod common;

use async_trait::async_trait;
use common::{registry_with, seeded_users, UserController, SEEDED_USERS};
use reanimate::{
    FlashRedirector, ModelAccessor, ModelError, ModelRecord, ModelRegistry, PrimaryKey,
    ReanimateError, Redirector, RestoreCoordinator, FLASH_MESSAGE_KEY,
};
use std::sync::Arc;
use std::sync::Mutex;

#[tokio::test]
async fn test_seeded_data_is_initialized() {
    let users = seeded_users().await;
    assert_eq!(users.count().await, SEEDED_USERS);
}

#[tokio::test]
async fn test_restore_success() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);
    users.soft_delete(1).await.unwrap();

    let redirect = controller.undo_delete(1).await.unwrap();

    assert_eq!(redirect.route, "userIndex");
    assert_eq!(redirect.message(), Some("user.undo.restored"));
    assert_eq!(users.is_trashed(&PrimaryKey::Int(1)).await, Some(false));
    assert_eq!(users.count().await, SEEDED_USERS);
}

#[tokio::test]
async fn test_restore_failing() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);
    users.soft_delete(2).await.unwrap();

    let redirect = controller.undo_delete(10000).await.unwrap();

    assert_eq!(redirect.route, "userIndex");
    assert_eq!(redirect.message(), Some("user.undo.invalid"));
    assert_eq!(users.is_trashed(&PrimaryKey::Int(2)).await, Some(true));
    assert_eq!(users.count().await, SEEDED_USERS - 1);
}

#[tokio::test]
async fn test_restore_row_inserted_with_numeric_string_key() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);
    users.insert("5").await;
    users.soft_delete("5").await.unwrap();

    let redirect = controller.undo_delete(5).await.unwrap();

    assert_eq!(redirect.message(), Some("user.undo.restored"));
    assert_eq!(users.is_trashed(&PrimaryKey::from("5")).await, Some(false));
    assert_eq!(users.count().await, SEEDED_USERS + 1);
}

#[tokio::test]
async fn test_restore_custom_index_route() {
    let users = seeded_users().await;
    let mut controller = UserController::new(&users);
    controller.undo = controller.undo.with_index_route("customIndex");

    let redirect = controller.undo_delete(10000).await.unwrap();

    assert_eq!(redirect.route, "customIndex");
    assert_eq!(redirect.message(), Some("user.undo.invalid"));
}

#[tokio::test]
async fn test_custom_restore_valid() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);
    users.soft_delete(1).await.unwrap();

    let redirect = controller
        .undo
        .restore_or_report(&PrimaryKey::Int(1), &*users, None)
        .await
        .unwrap();

    assert_eq!(redirect.route, "userIndex");
    assert_eq!(redirect.message(), Some("user.undo.restored"));
    assert_eq!(users.is_trashed(&PrimaryKey::Int(1)).await, Some(false));
}

#[tokio::test]
async fn test_custom_restore_invalid_uses_configured_route() {
    let users = seeded_users().await;
    let mut controller = UserController::new(&users);
    controller.undo = controller.undo.with_index_route("customIndex");

    let redirect = controller
        .undo
        .restore_or_report(&PrimaryKey::Int(10000), &*users, None)
        .await
        .unwrap();

    assert_eq!(redirect.route, "customIndex");
    assert_eq!(redirect.message(), Some("user.undo.invalid"));
}

#[tokio::test]
async fn test_custom_restore_route_argument() {
    let users = seeded_users().await;
    let mut controller = UserController::new(&users);
    controller.undo = controller.undo.with_index_route("configuredIndex");

    let redirect = controller
        .undo
        .restore_or_report(&PrimaryKey::Int(10000), &*users, Some("customIndex"))
        .await
        .unwrap();

    assert_eq!(redirect.route, "customIndex");
    assert_eq!(redirect.message(), Some("user.undo.invalid"));
}

#[tokio::test]
async fn test_restore_of_live_record_reports_restored() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);

    let redirect = controller.undo_delete(3).await.unwrap();

    assert_eq!(redirect.message(), Some("user.undo.restored"));
    assert_eq!(users.count().await, SEEDED_USERS);
}

#[tokio::test]
async fn test_string_identifier_is_coerced() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);
    users.soft_delete(4).await.unwrap();

    let redirect = controller.undo_delete("4").await.unwrap();

    assert_eq!(redirect.message(), Some("user.undo.restored"));
    assert_eq!(users.is_trashed(&PrimaryKey::Int(4)).await, Some(false));
}

#[tokio::test]
async fn test_non_numeric_identifier_misses() {
    let users = seeded_users().await;
    let controller = UserController::new(&users);
    users.soft_delete(1).await.unwrap();

    let redirect = controller.undo_delete("abc").await.unwrap();

    assert_eq!(redirect.message(), Some("user.undo.invalid"));
    assert_eq!(users.is_trashed(&PrimaryKey::Int(1)).await, Some(true));
}

#[tokio::test]
async fn test_index_route_is_lcfirst_and_message_is_lowercase() {
    let posts = Arc::new(reanimate::InMemoryModel::new("BlogPost"));
    posts.insert(7_i64).await;
    posts.soft_delete(7_i64).await.unwrap();
    let coordinator = RestoreCoordinator::new(FlashRedirector, Arc::new(ModelRegistry::new()));

    let redirect = coordinator
        .restore_or_report(&PrimaryKey::Int(7), &*posts, None)
        .await
        .unwrap();

    assert_eq!(redirect.route, "blogPostIndex");
    assert_eq!(redirect.message(), Some("blogpost.undo.restored"));
}

/// Accessor whose storage is unreachable
struct BrokenStore;

#[async_trait]
impl ModelAccessor for BrokenStore {
    fn model_name(&self) -> &str {
        "User"
    }

    async fn find_with_trashed(
        &self,
        _key: &PrimaryKey,
    ) -> Result<Option<ModelRecord>, ModelError> {
        Err(ModelError::Backend("connection refused".to_string()))
    }

    async fn restore(&self, _record: &ModelRecord) -> Result<(), ModelError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_storage_error_propagates() {
    let users = seeded_users().await;
    let coordinator = RestoreCoordinator::new(FlashRedirector, registry_with(&users));

    let err = coordinator
        .restore_or_report(&PrimaryKey::Int(1), &BrokenStore, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ReanimateError::Storage(ref msg) if msg.contains("connection refused")));
}

/// Router that records every call it receives
#[derive(Default)]
struct RecordingRedirector {
    calls: Mutex<Vec<String>>,
}

impl Redirector for RecordingRedirector {
    type Redirect = usize;

    fn to_route(&self, route: &str, params: &[PrimaryKey]) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(format!("route:{route}:{}", params.len()));
        calls.len()
    }

    fn with_flash(&self, redirect: usize, key: &str, value: &str) -> usize {
        self.calls.lock().unwrap().push(format!("flash:{key}={value}"));
        redirect
    }
}

#[tokio::test]
async fn test_router_output_passes_through() {
    let users = seeded_users().await;
    users.soft_delete(1).await.unwrap();
    let coordinator = RestoreCoordinator::new(RecordingRedirector::default(), registry_with(&users));

    let redirect = coordinator
        .undo_delete("UserController", &PrimaryKey::Int(1))
        .await
        .unwrap();

    assert_eq!(redirect, 1);
    let calls = coordinator_calls(&coordinator);
    assert_eq!(
        calls,
        vec![
            "route:userIndex:0".to_string(),
            format!("flash:{FLASH_MESSAGE_KEY}=user.undo.restored"),
        ]
    );
}

fn coordinator_calls(coordinator: &RestoreCoordinator<RecordingRedirector>) -> Vec<String> {
    coordinator.redirector().calls.lock().unwrap().clone()
}
