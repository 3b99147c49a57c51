pub mod health;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles                                           list, create (admin only)
/// /roles/{id}                                      get, update, delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/roles", roles::router())
}
