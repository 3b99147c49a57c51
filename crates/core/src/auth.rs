//! Caller identity and the administrator gate.
//!
//! The HTTP layer resolves a [`Caller`] per request and hands it to the
//! service explicitly. Nothing here reads ambient state.

use crate::types::DbId;

/// Role name granted administrator privilege unless configured otherwise.
pub const ROLE_ADMIN: &str = "admin";

/// Identity of whoever issued the current request.
///
/// Both fields are `None` for an anonymous caller, i.e. one whose
/// credentials were missing or could not be verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Option<DbId>,
    pub role: Option<String>,
}

impl Caller {
    /// A caller with no resolved identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A resolved caller holding `role`.
    pub fn with_role(user_id: DbId, role: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            role: Some(role.into()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none() && self.role.is_none()
    }
}

/// Decides whether a caller holds administrator privilege.
///
/// Implementations must be pure and must answer `false` for an anonymous
/// caller.
pub trait AuthorizationGate: Send + Sync {
    fn is_administrator(&self, caller: &Caller) -> bool;
}

/// Grants administrator privilege to callers whose role name matches exactly.
#[derive(Debug, Clone)]
pub struct RoleNameGate {
    admin_role: String,
}

impl RoleNameGate {
    pub fn new(admin_role: impl Into<String>) -> Self {
        Self {
            admin_role: admin_role.into(),
        }
    }
}

impl Default for RoleNameGate {
    fn default() -> Self {
        Self::new(ROLE_ADMIN)
    }
}

impl AuthorizationGate for RoleNameGate {
    fn is_administrator(&self, caller: &Caller) -> bool {
        caller.role.as_deref() == Some(self.admin_role.as_str())
    }
}
