//! The validator: rule storage, configuration and execution
//!
//! ```rust,ignore
//! use rulebook::prelude::*;
//!
//! struct User { name: String, age: i32 }
//! rulebook::record! { User { name, age } }
//!
//! let mut validator = Validator::new();
//! validator.configure::<User>(|rules| {
//!     rules.string("name")?.trim().required().max_len(32);
//!     rules.int::<i32>("age")?.min(18);
//!     Ok(())
//! })?;
//!
//! let mut user = User { name: "  ann ".into(), age: 17 };
//! let errors = validator.validate(&ValidationContext::new(), &mut user);
//! assert_eq!(user.name, "ann");
//! assert_eq!(errors.len(), 1);
//! ```

mod builder;
mod store;

pub use builder::ValidatorBuilder;

use crate::error::ConfigError;
use crate::foundation::{Integer, Slot, ValidationContext, ValidationError};
use crate::helper::{FieldHelper, Helper};
use crate::registry::{self, FieldIndex, FieldResolver, Record, RecordInfo};
use crate::rules::{
    Bundle, BundleDeps, IntBuilder, IntBundle, IntSliceBuilder, IntSliceBundle, RuleSink,
    StringBuilder, StringBundle, keys,
};
use rulebook_locale::param;
use std::any::Any;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use store::RuleStore;

/// Post-processes the errors of one `validate` call.
pub type ErrorsTransformer<E> = Arc<dyn Fn(Vec<ValidationError>) -> Vec<E> + Send + Sync>;

/// Holds validation rules per record type and runs them.
///
/// Configure with `&mut self`, then share the validator (e.g. in an `Arc`)
/// and call [`validate`](Self::validate) from any number of threads.
pub struct Validator<E = ValidationError> {
    store: RuleStore,
    helper: Helper,
    transform: ErrorsTransformer<E>,
}

impl Validator<ValidationError> {
    /// Creates a validator with default options.
    pub fn new() -> Self {
        ValidatorBuilder::new().build()
    }

    /// Starts building a validator with custom options.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }
}

impl Default for Validator<ValidationError> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Validator<E> {
    /// Declares rules for record type `R`.
    ///
    /// `declare` receives a [`Rules`] handle for `R`. The rules it appends
    /// are committed together when it returns `Ok`; on `Err`, nothing it
    /// appended is kept and the validator is unchanged. Calling `configure`
    /// again for the same type adds rules after the existing ones.
    pub fn configure<R: Record>(
        &mut self,
        declare: impl FnOnce(&mut Rules<'_, R>) -> Result<(), ConfigError>,
    ) -> Result<(), ConfigError> {
        let resolver = FieldResolver::new(registry::describe_fields::<R>()?);
        let mut sink = RuleSink::default();
        declare(&mut Rules::new(BundleDeps::new(&mut sink, &resolver, &self.helper)))?;

        let added = sink.len();
        let total = self.store.extend(resolver.record(), sink.compile());
        tracing::debug!(
            record = resolver.record().name(),
            added,
            total,
            "committed validation rules"
        );
        Ok(())
    }

    /// Runs every rule configured for the runtime type of `instance`.
    ///
    /// Rules run in declaration order and may mutate the instance (`trim`).
    /// A type with no configuration yields no errors. A rule that panics is
    /// reported as a [`keys::RULE_PANICKED`] error and the remaining rules
    /// still run.
    ///
    /// Recovery does not silence the process panic hook: the default hook
    /// still prints each panic to stderr. Install a hook with
    /// [`std::panic::set_hook`] for quiet recovery.
    pub fn validate(&self, ctx: &ValidationContext, instance: &mut dyn Any) -> Vec<E> {
        let Some(entry) = self.store.get((*instance).type_id()) else {
            return Vec::new();
        };

        let mut errors = Vec::new();
        for rule in &entry.rules {
            let helper = FieldHelper::new(&self.helper, &rule.field);
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                let slot = rule.field.locate(&mut *instance);
                (rule.check)(ctx, &helper, &rule.gate, slot)
            }));
            match outcome {
                Ok(failed) => errors.extend(failed),
                Err(payload) => {
                    let reason = panic_reason(payload.as_ref());
                    tracing::warn!(
                        record = entry.record.name(),
                        field = rule.field.path(),
                        %reason,
                        "validation rule panicked"
                    );
                    errors.push(helper.error_t(
                        ctx,
                        None,
                        keys::RULE_PANICKED,
                        &[param("reason", reason)],
                    ));
                }
            }
        }

        tracing::trace!(
            record = entry.record.name(),
            rules = entry.rules.len(),
            errors = errors.len(),
            "validated record"
        );
        (self.transform)(errors)
    }

    /// Returns true if rules were committed for `R`.
    pub fn is_configured<R: Any>(&self) -> bool {
        self.store.get(RecordInfo::of::<R>().id()).is_some()
    }

    /// Number of rules committed for `R`.
    pub fn rule_count<R: Any>(&self) -> usize {
        self.store.rule_count(RecordInfo::of::<R>().id())
    }

    /// Number of record types with committed rules.
    pub fn configured_records(&self) -> usize {
        self.store.records()
    }

    /// The error helper rules report through.
    pub const fn helper(&self) -> &Helper {
        &self.helper
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

// ============================================================================
// CONFIGURATION HANDLE
// ============================================================================

/// Rule entry points for record type `R`, valid during one `configure` call.
pub struct Rules<'c, R> {
    deps: BundleDeps<'c>,
    _record: PhantomData<fn() -> R>,
}

impl<'c, R: Record> Rules<'c, R> {
    const fn new(deps: BundleDeps<'c>) -> Self {
        Self {
            deps,
            _record: PhantomData,
        }
    }

    /// Creates any bundle, including third-party ones.
    pub fn bundle<'s, B: Bundle<'s>>(&'s mut self) -> B {
        B::new(self.deps.reborrow())
    }

    /// The string family.
    pub fn strings(&mut self) -> StringBundle<'_> {
        self.bundle()
    }

    /// The integer family.
    pub fn ints(&mut self) -> IntBundle<'_> {
        self.bundle()
    }

    /// The integer-sequence family.
    pub fn int_slices(&mut self) -> IntSliceBundle<'_> {
        self.bundle()
    }

    /// Rules for a `String` field.
    pub fn string(&mut self, path: &str) -> Result<StringBuilder<'_, String>, ConfigError> {
        self.strings().string(path)
    }

    /// Rules for an `Option<String>` field.
    pub fn string_opt(
        &mut self,
        path: &str,
    ) -> Result<StringBuilder<'_, Option<String>>, ConfigError> {
        self.strings().string_opt(path)
    }

    /// Rules for an integer field of type `T`.
    pub fn int<T: Integer>(&mut self, path: &str) -> Result<IntBuilder<'_, T>, ConfigError>
    where
        T: Slot<Value = T>,
    {
        self.ints().int(path)
    }

    /// Rules for an `Option<T>` integer field.
    pub fn int_opt<T: Integer>(
        &mut self,
        path: &str,
    ) -> Result<IntBuilder<'_, Option<T>>, ConfigError>
    where
        Option<T>: Slot<Value = T>,
    {
        self.ints().int_opt(path)
    }

    /// Rules for a `Vec<T>` integer-sequence field.
    pub fn int_slice<T: Integer>(
        &mut self,
        path: &str,
    ) -> Result<IntSliceBuilder<'_, Vec<T>>, ConfigError> {
        self.int_slices().int_slice(path)
    }

    /// Rules for an `Option<Vec<T>>` integer-sequence field.
    pub fn int_slice_opt<T: Integer>(
        &mut self,
        path: &str,
    ) -> Result<IntSliceBuilder<'_, Option<Vec<T>>>, ConfigError> {
        self.int_slices().int_slice_opt(path)
    }

    /// The record's fields.
    pub fn fields(&self) -> &FieldIndex {
        self.deps.fields()
    }

    /// The record being configured.
    pub fn record(&self) -> RecordInfo {
        self.deps.record()
    }
}
