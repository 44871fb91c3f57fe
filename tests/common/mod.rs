//! Common test utilities

use reanimate::{
    short_type_name, FlashRedirector, InMemoryModel, ModelRegistry, PrimaryKey,
    RedirectInstruction, ReanimateError, RestoreCoordinator, UndoPayload,
};
use std::sync::Arc;

/// Number of users seeded by [`seeded_users`]
#[allow(dead_code)] // Test utility for integration tests
pub const SEEDED_USERS: usize = 4;

/// Create a `User` model with live rows 1..=4
#[allow(dead_code)] // Test utility for integration tests
pub async fn seeded_users() -> Arc<InMemoryModel> {
    let users = Arc::new(InMemoryModel::new("User"));
    for id in 1..=4_i64 {
        users.insert(id).await;
    }
    users
}

/// Registry containing only the given users model
#[allow(dead_code)] // Test utility for integration tests
pub fn registry_with(users: &Arc<InMemoryModel>) -> Arc<ModelRegistry> {
    let users: Arc<InMemoryModel> = Arc::clone(users);
    Arc::new(ModelRegistry::new().with_model(users))
}

/// Controller whose model is found by convention (`User`)
#[allow(dead_code)] // Test utility for integration tests
pub struct UserController {
    pub undo: RestoreCoordinator<FlashRedirector>,
    users: Arc<InMemoryModel>,
}

impl UserController {
    #[allow(dead_code)] // Test utility for integration tests
    pub fn new(users: &Arc<InMemoryModel>) -> Self {
        Self {
            undo: RestoreCoordinator::new(FlashRedirector, registry_with(users)),
            users: Arc::clone(users),
        }
    }

    /// Soft-delete a user and return the undo flash data
    #[allow(dead_code)] // Test utility for integration tests
    pub async fn delete_model(&self, id: i64, custom_route: Option<&str>) -> UndoPayload {
        let user = self
            .users
            .soft_delete(id)
            .await
            .expect("seeded user should be deletable");
        self.undo.build_undo_payload(&user, custom_route)
    }

    #[allow(dead_code)] // Test utility for integration tests
    pub async fn undo_delete(
        &self,
        id: impl Into<PrimaryKey>,
    ) -> Result<RedirectInstruction, ReanimateError> {
        self.undo
            .undo_delete(short_type_name::<Self>(), &id.into())
            .await
    }
}

/// Controller with no model named after it
#[allow(dead_code)] // Test utility for integration tests
pub struct NoMatchingModelController {
    pub undo: RestoreCoordinator<FlashRedirector>,
}

#[allow(dead_code)] // Test utility for integration tests
impl NoMatchingModelController {
    pub fn new(users: &Arc<InMemoryModel>) -> Self {
        Self {
            undo: RestoreCoordinator::new(FlashRedirector, registry_with(users)),
        }
    }

    pub async fn undo_delete(
        &self,
        id: impl Into<PrimaryKey>,
    ) -> Result<RedirectInstruction, ReanimateError> {
        self.undo
            .undo_delete(short_type_name::<Self>(), &id.into())
            .await
    }
}
