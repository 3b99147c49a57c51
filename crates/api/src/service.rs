//! Role management operations.
//!
//! Every operation runs the same straight line: admin gate, payload
//! validation, a single store call, then an [`Envelope`]. Nothing here
//! depends on axum request types, so the service can be driven directly
//! from tests.

use std::sync::Arc;

use axum::http::StatusCode;
use warden_core::auth::{AuthorizationGate, Caller};
use warden_core::error::CoreError;
use warden_core::roles::{CREATE_NAME_RULE, NO_CHANGE_MESSAGE, UPDATE_NAME_RULE};
use warden_core::types::DbId;
use warden_db::models::role::{CreateRole, Role, UpdateRole};
use warden_db::store::RoleStore;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;

/// Message returned to callers that fail the administrator gate.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized Access.";

/// Admin-only CRUD over roles.
pub struct RoleService {
    store: Arc<dyn RoleStore>,
    gate: Arc<dyn AuthorizationGate>,
}

impl RoleService {
    pub fn new(store: Arc<dyn RoleStore>, gate: Arc<dyn AuthorizationGate>) -> Self {
        Self { store, gate }
    }

    /// Reject callers that are not administrators.
    pub fn authorize(&self, caller: &Caller) -> AppResult<()> {
        if self.gate.is_administrator(caller) {
            return Ok(());
        }
        tracing::warn!(
            user_id = ?caller.user_id,
            role = ?caller.role,
            "Rejected non-administrator caller",
        );
        Err(AppError::Core(CoreError::Unauthorized(
            UNAUTHORIZED_MESSAGE.into(),
        )))
    }

    /// List every role.
    pub async fn list(&self, caller: &Caller) -> AppResult<Envelope<Vec<Role>>> {
        self.authorize(caller)?;

        let roles = self.store.list_all().await?;
        Ok(Envelope::success(roles))
    }

    /// Create a role. Answers 201.
    ///
    /// Surrounding whitespace is stripped from the name before validation.
    pub async fn create(&self, caller: &Caller, input: CreateRole) -> AppResult<Envelope<Role>> {
        self.authorize(caller)?;

        let input = input.trimmed();
        CREATE_NAME_RULE
            .check(input.name.as_deref())
            .map_err(CoreError::from)?;
        let Some(name) = input.name.as_deref() else {
            return Err(CoreError::Internal("role name missing after validation".into()).into());
        };

        let role = self.store.insert(name).await?;

        tracing::info!(
            role_id = role.id,
            name = %role.name,
            user_id = ?caller.user_id,
            "Role created",
        );

        Ok(Envelope::with_status(role, StatusCode::CREATED))
    }

    /// Fetch a single role.
    pub async fn get(&self, caller: &Caller, id: DbId) -> AppResult<Envelope<Role>> {
        self.authorize(caller)?;

        let role = self.store.find_by_id(id).await?;
        Ok(Envelope::success(role))
    }

    /// Rename a role.
    ///
    /// The name is trimmed and validated before the lookup; the change check runs
    /// after it and before any write. A payload that would leave the row as
    /// it is gets a 422 and nothing is persisted. Success answers 201.
    pub async fn update(
        &self,
        caller: &Caller,
        id: DbId,
        input: UpdateRole,
    ) -> AppResult<Envelope<Role>> {
        self.authorize(caller)?;

        let input = input.trimmed();
        UPDATE_NAME_RULE
            .check(input.name.as_deref())
            .map_err(CoreError::from)?;

        let current = self.store.find_by_id(id).await?;
        let Some(candidate) = current.apply(&input) else {
            return Err(AppError::Core(CoreError::Validation(
                NO_CHANGE_MESSAGE.into(),
            )));
        };

        let role = self.store.update(id, Some(&candidate.name)).await?;

        tracing::info!(
            role_id = role.id,
            old_name = %current.name,
            new_name = %role.name,
            user_id = ?caller.user_id,
            "Role updated",
        );

        Ok(Envelope::with_status(role, StatusCode::CREATED))
    }

    /// Delete a role, answering with its last state.
    pub async fn delete(&self, caller: &Caller, id: DbId) -> AppResult<Envelope<Role>> {
        self.authorize(caller)?;

        let role = self.store.delete(id).await?;

        tracing::info!(
            role_id = role.id,
            name = %role.name,
            user_id = ?caller.user_id,
            "Role deleted",
        );

        Ok(Envelope::success(role))
    }
}
