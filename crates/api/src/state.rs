use std::sync::Arc;

use warden_core::auth::RoleNameGate;
use warden_db::store::RoleStore;

use crate::config::ServerConfig;
use crate::service::RoleService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the caller extractor).
    pub config: Arc<ServerConfig>,
    /// Role persistence, also probed by the health endpoint.
    pub store: Arc<dyn RoleStore>,
    /// Gate + validation + store orchestration for the role endpoints.
    pub roles: Arc<RoleService>,
}

impl AppState {
    /// Wire the role service to `store`, gated on `config.admin_role`.
    pub fn new(config: ServerConfig, store: Arc<dyn RoleStore>) -> Self {
        let gate = Arc::new(RoleNameGate::new(config.admin_role.clone()));
        let roles = Arc::new(RoleService::new(Arc::clone(&store), gate));
        Self {
            config: Arc::new(config),
            store,
            roles,
        }
    }
}
