//! Role entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use warden_core::types::{DbId, Timestamp};

/// A role row from the `roles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Role {
    /// Apply `changes` to a copy of this role, or `None` if no field would differ.
    ///
    /// Timestamps are bookkeeping and never count as a change.
    pub fn apply(&self, changes: &UpdateRole) -> Option<Role> {
        let mut candidate = self.clone();
        if let Some(name) = &changes.name {
            candidate.name.clone_from(name);
        }
        (candidate.name != self.name).then_some(candidate)
    }
}

/// Payload for creating a role. `name` is optional here so that a missing
/// field reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRole {
    pub name: Option<String>,
}

impl CreateRole {
    /// Strip surrounding whitespace from string fields.
    pub fn trimmed(self) -> Self {
        Self {
            name: trim_field(self.name),
        }
    }
}

/// Payload for partially updating a role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRole {
    pub name: Option<String>,
}

impl UpdateRole {
    /// Strip surrounding whitespace from string fields.
    pub fn trimmed(self) -> Self {
        Self {
            name: trim_field(self.name),
        }
    }
}

fn trim_field(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        let now = chrono::Utc::now();
        Role {
            id: 1,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn apply_without_fields_is_no_change() {
        assert!(role("editor").apply(&UpdateRole::default()).is_none());
    }

    #[test]
    fn apply_same_name_is_no_change() {
        let changes = UpdateRole {
            name: Some("editor".into()),
        };
        assert!(role("editor").apply(&changes).is_none());
    }

    #[test]
    fn apply_new_name_produces_candidate() {
        let changes = UpdateRole {
            name: Some("editor2".into()),
        };
        let candidate = role("editor").apply(&changes).expect("name differs");
        assert_eq!(candidate.id, 1);
        assert_eq!(candidate.name, "editor2");
    }

    #[test]
    fn apply_is_case_sensitive() {
        let changes = UpdateRole {
            name: Some("Editor".into()),
        };
        assert!(role("editor").apply(&changes).is_some());
    }

    #[test]
    fn trimmed_payload_matches_stored_name() {
        let changes = UpdateRole {
            name: Some("  editor \t".into()),
        }
        .trimmed();
        assert_eq!(changes.name.as_deref(), Some("editor"));
        assert!(role("editor").apply(&changes).is_none());
    }

    #[test]
    fn trimmed_keeps_absent_name_absent() {
        assert_eq!(CreateRole::default().trimmed().name, None);
    }
}
