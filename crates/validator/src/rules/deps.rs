//! What a rule bundle is constructed with

use super::gate::{GateId, erase_predicate};
use super::sink::{RuleSink, erase_check};
use crate::error::ConfigError;
use crate::foundation::{Slot, ValidationContext, ValidationError};
use crate::helper::{FieldHelper, Helper};
use crate::registry::{FieldDescriptor, FieldIndex, FieldResolver, RecordInfo};
use std::sync::Arc;

/// A family of rule entry points, e.g. strings or integers.
///
/// Bundles are created from [`BundleDeps`] by
/// [`Rules::bundle`](crate::Rules::bundle); third-party families implement
/// this trait to plug in next to the built-in ones.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::rules::{Bundle, BundleDeps, RuleBuilder};
///
/// pub struct Flags<'c> { deps: BundleDeps<'c> }
///
/// impl<'c> Bundle<'c> for Flags<'c> {
///     fn new(deps: BundleDeps<'c>) -> Self { Self { deps } }
/// }
///
/// impl<'c> Flags<'c> {
///     pub fn flag(self, path: &str) -> Result<RuleBuilder<'c, bool>, rulebook::ConfigError> {
///         let field = self.deps.resolve::<bool>(path)?;
///         Ok(RuleBuilder::new(self.deps, field, "flags:Invalid flag"))
///     }
/// }
/// ```
pub trait Bundle<'c>: Sized {
    /// Builds the bundle.
    fn new(deps: BundleDeps<'c>) -> Self;
}

/// Everything a bundle needs: the pending rule list, field resolution for the
/// record being configured, and the validator's error helper.
pub struct BundleDeps<'c> {
    sink: &'c mut RuleSink,
    resolver: &'c FieldResolver,
    helper: &'c Helper,
}

impl<'c> BundleDeps<'c> {
    pub(crate) const fn new(
        sink: &'c mut RuleSink,
        resolver: &'c FieldResolver,
        helper: &'c Helper,
    ) -> Self {
        Self {
            sink,
            resolver,
            helper,
        }
    }

    /// Shortens the borrow so the dependencies can be handed out again.
    pub fn reborrow(&mut self) -> BundleDeps<'_> {
        BundleDeps {
            sink: &mut *self.sink,
            resolver: self.resolver,
            helper: self.helper,
        }
    }

    /// The record being configured.
    pub fn record(&self) -> RecordInfo {
        self.resolver.record()
    }

    /// The record's fields.
    pub fn fields(&self) -> &FieldIndex {
        self.resolver.index()
    }

    /// The validator's error helper.
    pub const fn helper(&self) -> &Helper {
        self.helper
    }

    /// Resolves `path` as a field declared with type `S`.
    pub fn resolve<S: Slot>(&self, path: &str) -> Result<Arc<FieldDescriptor>, ConfigError> {
        self.resolver.resolve::<S>(path)
    }

    /// Opens a new, empty gate.
    pub fn open_gate(&mut self) -> GateId {
        self.sink.open_gate()
    }

    /// Appends a predicate to `gate`.
    ///
    /// The predicate sees the canonical value of a field of type `S`, or
    /// `None` when the field is absent or unreachable.
    pub fn gate<S, P>(&mut self, gate: GateId, predicate: P)
    where
        S: Slot,
        P: Fn(&ValidationContext, Option<&S::Value>) -> bool + Send + Sync + 'static,
    {
        self.sink.add_predicate(
            gate,
            erase_predicate(move |ctx, slot| {
                let value = slot
                    .and_then(|any| any.downcast_ref::<S>())
                    .and_then(|slot| slot.peek());
                predicate(ctx, value)
            }),
        );
    }

    /// Appends a rule for a field of type `S`, guarded by `gate`.
    ///
    /// `check` receives `None` when the field is unreachable. A closed gate
    /// skips the rule before anything else. When the located value is not
    /// an `S`, the rule reports `invalid_key` instead of running.
    pub fn append<S, F>(
        &mut self,
        field: &Arc<FieldDescriptor>,
        gate: GateId,
        invalid_key: &'static str,
        check: F,
    ) where
        S: Slot,
        F: Fn(&ValidationContext, &FieldHelper<'_>, Option<&mut S>) -> Vec<ValidationError>
            + Send
            + Sync
            + 'static,
    {
        self.sink.append(
            Arc::clone(field),
            gate,
            erase_check(move |ctx, helper, rule_gate, slot| {
                if !rule_gate.allows(ctx, slot.as_deref()) {
                    return Vec::new();
                }
                let typed = match slot {
                    None => None,
                    Some(any) => match any.downcast_mut::<S>() {
                        Some(value) => Some(value),
                        None => return vec![helper.error_t(ctx, None, invalid_key, &[])],
                    },
                };
                check(ctx, helper, typed)
            }),
        );
    }

    /// Number of rules staged so far in this configuration.
    pub fn staged(&self) -> usize {
        self.sink.len()
    }
}
