//! Prelude module for convenient imports.
//!
//! Provides a single `use rulebook::prelude::*;` import that brings in the
//! validator, the rule vocabulary, and the record description types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulebook::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator.configure::<User>(|rules| {
//!     rules.string("name")?.required();
//!     Ok(())
//! })?;
//! ```

// ============================================================================
// VALIDATOR: Configuration and execution
// ============================================================================

pub use crate::validator::{Rules, Validator, ValidatorBuilder};

// ============================================================================
// FOUNDATION: Errors, context, representations
// ============================================================================

pub use crate::error::ConfigError;
pub use crate::foundation::{
    Canonical, Slot, ValidationContext, ValidationContextBuilder, ValidationError,
    ValidationErrors,
};
pub use crate::helper::FieldHelper;

// ============================================================================
// RULES: Shared vocabulary and options
// ============================================================================

pub use crate::rules::{FieldRules, RegexpOptions};

// ============================================================================
// RECORDS: Field descriptions
// ============================================================================

pub use crate::record;
pub use crate::registry::{FieldDescriptor, FieldSet, Record};

// ============================================================================
// LOCALE: Translators and params
// ============================================================================

pub use rulebook_locale::{InMemoryTranslator, Translator, param};

pub use regex::Regex;
