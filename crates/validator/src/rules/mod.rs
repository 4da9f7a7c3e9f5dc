//! Rule families and the machinery they share
//!
//! A family is a [`Bundle`] of entry points (`string`, `int`, `int_slice`)
//! that resolve a field path and hand back a builder. Builders append one
//! rule per method call into the pending configuration; nothing is visible
//! to `validate` until the configuration commits.
//!
//! ## Built-in families
//!
//! | Bundle | Entry points | Rules |
//! |--------|--------------|-------|
//! | [`StringBundle`] | `string`, `string_opt` | `trim`, `required`, `min_len`, `max_len`, `len`, `regexp`, `any_of` |
//! | [`IntBundle`] | `int`, `int_opt` | `required`, `min`, `max`, `any_of` |
//! | [`IntSliceBundle`] | `int_slice`, `int_slice_opt` | `required`, `min`, `max` |
//!
//! Every builder also supports `custom`, `when` and `when_opt` through
//! [`FieldRules`].

mod builder;
mod deps;
mod gate;
pub mod int;
pub mod int_slice;
mod sink;
pub mod string;

pub use builder::{FieldRules, RuleBuilder};
pub use deps::{Bundle, BundleDeps};
pub use gate::GateId;
pub use int::{IntBuilder, IntBundle};
pub use int_slice::{IntSliceBuilder, IntSliceBundle};
pub use string::{RegexpOptions, StringBuilder, StringBundle};

pub(crate) use sink::{CompiledRule, RuleSink};

/// Locale keys not tied to a rule family.
pub mod keys {
    /// A rule panicked while validating; `{reason}` is the panic message.
    pub const RULE_PANICKED: &str = "validation:rule:Rule failed unexpectedly: {reason}";
}
