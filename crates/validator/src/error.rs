//! Configuration-time errors
//!
//! These surface from [`Validator::configure`](crate::Validator::configure)
//! and never from `validate`: a rule set that configured cleanly always runs.

/// Errors raised while describing a record's fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two descriptors resolved to the same dotted path.
    #[error("record `{record}` declares field `{path}` more than once")]
    DuplicateField {
        /// Record type name.
        record: &'static str,
        /// The repeated path.
        path: String,
    },

    /// Nested record descriptions went deeper than the supported limit.
    #[error("nested record at `{path}` exceeds the maximum depth of {limit}")]
    NestingTooDeep {
        /// Path of the nested record that crossed the limit.
        path: String,
        /// The limit.
        limit: usize,
    },
}

/// Errors raised while configuring rules for a record type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No field with this path and representation exists on the record.
    #[error("field not found: `{path}` on `{record}` as `{expected}`")]
    FieldNotFound {
        /// Record type name.
        record: &'static str,
        /// Path the rule targeted.
        path: String,
        /// Representation the entry point expected.
        expected: &'static str,
        /// Declared type of the field, when the path exists but the type
        /// does not match.
        found: Option<&'static str>,
    },

    /// The record's field description is malformed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A custom bundle rejected its arguments.
    #[error("invalid rule for `{path}`: {reason}")]
    InvalidRule {
        /// Path the rule targeted.
        path: String,
        /// Why the rule was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an [`InvalidRule`](Self::InvalidRule) error.
    pub fn invalid_rule(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for [`FieldNotFound`](Self::FieldNotFound).
    pub const fn is_field_not_found(&self) -> bool {
        matches!(self, Self::FieldNotFound { .. })
    }
}
