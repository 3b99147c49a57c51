//! Handlers for role management (admin only).
//!
//! Request parsing never answers before the administrator gate does: an
//! unreadable body is treated as an empty payload and a non-numeric `{id}`
//! becomes a 404 only after the caller has been authorized.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use warden_core::auth::Caller;
use warden_core::types::DbId;
use warden_db::models::role::{CreateRole, Role, UpdateRole};

use crate::error::{AppError, AppResult};
use crate::middleware::caller::ResolvedCaller;
use crate::response::Envelope;
use crate::state::AppState;

/// Unwrap a JSON body, falling back to the payload's default when it is
/// missing or malformed.
fn payload_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable role payload, treating as empty");
            T::default()
        }
    }
}

/// Parse the `{id}` path segment.
fn role_id(state: &AppState, caller: &Caller, raw: &str) -> AppResult<DbId> {
    match raw.parse::<DbId>() {
        Ok(id) => Ok(id),
        Err(_) => {
            state.roles.authorize(caller)?;
            Err(AppError::NotFound(format!("Role with id {raw} not found")))
        }
    }
}

/// GET /api/v1/roles
pub async fn list_roles(
    ResolvedCaller(caller): ResolvedCaller,
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<Role>>> {
    state.roles.list(&caller).await
}

/// POST /api/v1/roles
pub async fn create_role(
    ResolvedCaller(caller): ResolvedCaller,
    State(state): State<AppState>,
    payload: Result<Json<CreateRole>, JsonRejection>,
) -> AppResult<Envelope<Role>> {
    state.roles.create(&caller, payload_or_default(payload)).await
}

/// GET /api/v1/roles/{id}
pub async fn get_role(
    ResolvedCaller(caller): ResolvedCaller,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Role>> {
    let id = role_id(&state, &caller, &raw_id)?;
    state.roles.get(&caller, id).await
}

/// PUT/PATCH /api/v1/roles/{id}
pub async fn update_role(
    ResolvedCaller(caller): ResolvedCaller,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateRole>, JsonRejection>,
) -> AppResult<Envelope<Role>> {
    let id = role_id(&state, &caller, &raw_id)?;
    state
        .roles
        .update(&caller, id, payload_or_default(payload))
        .await
}

/// DELETE /api/v1/roles/{id}
pub async fn delete_role(
    ResolvedCaller(caller): ResolvedCaller,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Role>> {
    let id = role_id(&state, &caller, &raw_id)?;
    state.roles.delete(&caller, id).await
}
