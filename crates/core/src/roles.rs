//! Role payload validation.
//!
//! Each operation that accepts a payload has a fixed [`FieldRule`] describing
//! the `name` field. [`FieldRule::check`] is pure and returns a structured
//! [`FieldViolation`] that the service turns into a 422.

use std::fmt;

use crate::error::CoreError;

/// Maximum length of a role name, in characters.
pub const ROLE_NAME_MAX_CHARS: usize = 255;

/// Message returned when an update would not change any field.
pub const NO_CHANGE_MESSAGE: &str = "You must specify a new value to update";

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Whether a field has to be present in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Validation rule for a single string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    pub max_chars: usize,
}

/// `name` on create: required, at most 255 characters.
pub const CREATE_NAME_RULE: FieldRule = FieldRule {
    field: "name",
    presence: Presence::Required,
    max_chars: ROLE_NAME_MAX_CHARS,
};

/// `name` on update: optional, at most 255 characters when supplied.
pub const UPDATE_NAME_RULE: FieldRule = FieldRule {
    field: "name",
    presence: Presence::Optional,
    max_chars: ROLE_NAME_MAX_CHARS,
};

/// Why a field failed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// Required field absent or blank.
    Missing { field: &'static str },
    /// Optional field supplied but blank.
    Empty { field: &'static str },
    /// Longer than the rule allows.
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldViolation::Missing { field } => write!(f, "The {field} field is required."),
            FieldViolation::Empty { field } => write!(f, "The {field} field must not be empty."),
            FieldViolation::TooLong { field, max } => {
                write!(f, "The {field} may not be greater than {max} characters.")
            }
        }
    }
}

impl From<FieldViolation> for CoreError {
    fn from(violation: FieldViolation) -> Self {
        CoreError::Validation(violation.to_string())
    }
}

impl FieldRule {
    /// Check a (possibly absent) field value against this rule.
    ///
    /// Length is counted in characters, not bytes.
    pub fn check(&self, value: Option<&str>) -> Result<(), FieldViolation> {
        let Some(value) = value else {
            return match self.presence {
                Presence::Required => Err(FieldViolation::Missing { field: self.field }),
                Presence::Optional => Ok(()),
            };
        };

        if value.trim().is_empty() {
            return Err(match self.presence {
                Presence::Required => FieldViolation::Missing { field: self.field },
                Presence::Optional => FieldViolation::Empty { field: self.field },
            });
        }

        if value.chars().count() > self.max_chars {
            return Err(FieldViolation::TooLong {
                field: self.field,
                max: self.max_chars,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- create ---------------------------------------------------------------

    #[test]
    fn create_accepts_plain_name() {
        assert!(CREATE_NAME_RULE.check(Some("editor")).is_ok());
    }

    #[test]
    fn create_requires_name() {
        assert_eq!(
            CREATE_NAME_RULE.check(None),
            Err(FieldViolation::Missing { field: "name" })
        );
        assert_eq!(
            CREATE_NAME_RULE.check(Some("   ")),
            Err(FieldViolation::Missing { field: "name" })
        );
    }

    #[test]
    fn create_length_boundary() {
        let at_limit = "a".repeat(ROLE_NAME_MAX_CHARS);
        assert!(CREATE_NAME_RULE.check(Some(&at_limit)).is_ok());

        let over = "a".repeat(ROLE_NAME_MAX_CHARS + 1);
        assert_eq!(
            CREATE_NAME_RULE.check(Some(&over)),
            Err(FieldViolation::TooLong {
                field: "name",
                max: ROLE_NAME_MAX_CHARS
            })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 255 two-byte characters: 510 bytes, still within the limit.
        let wide = "é".repeat(ROLE_NAME_MAX_CHARS);
        assert!(CREATE_NAME_RULE.check(Some(&wide)).is_ok());
    }

    // -- update ---------------------------------------------------------------

    #[test]
    fn update_allows_absent_name() {
        assert!(UPDATE_NAME_RULE.check(None).is_ok());
    }

    #[test]
    fn update_rejects_blank_name() {
        assert_eq!(
            UPDATE_NAME_RULE.check(Some("")),
            Err(FieldViolation::Empty { field: "name" })
        );
    }

    #[test]
    fn update_rejects_oversized_name() {
        let over = "x".repeat(300);
        assert!(matches!(
            UPDATE_NAME_RULE.check(Some(&over)),
            Err(FieldViolation::TooLong { .. })
        ));
    }

    // -- messages -------------------------------------------------------------

    #[test]
    fn violation_messages() {
        assert_eq!(
            FieldViolation::Missing { field: "name" }.to_string(),
            "The name field is required."
        );
        assert_eq!(
            FieldViolation::TooLong {
                field: "name",
                max: 255
            }
            .to_string(),
            "The name may not be greater than 255 characters."
        );
    }

    #[test]
    fn violation_converts_to_validation_error() {
        let err: CoreError = FieldViolation::Empty { field: "name" }.into();
        match err {
            CoreError::Validation(msg) => assert_eq!(msg, "The name field must not be empty."),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
