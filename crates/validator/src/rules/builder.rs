//! Shared rule-builder core and the common rule vocabulary

use super::deps::BundleDeps;
use super::gate::GateId;
use crate::foundation::{Canonical, Slot, ValidationContext, ValidationError};
use crate::helper::FieldHelper;
use crate::registry::FieldDescriptor;
use std::marker::PhantomData;
use std::sync::Arc;

/// Appends rules for one resolved field of declared type `S`.
///
/// Every family builder wraps one of these. Each rule method appends exactly
/// one rule immediately; all rules appended through the same builder share
/// its gate.
pub struct RuleBuilder<'c, S: Slot> {
    deps: BundleDeps<'c>,
    field: Arc<FieldDescriptor>,
    gate: GateId,
    invalid_key: &'static str,
    _slot: PhantomData<fn(&mut S)>,
}

impl<'c, S: Slot> RuleBuilder<'c, S> {
    /// Creates a builder for `field` with a fresh gate.
    ///
    /// `invalid_key` is reported if the located value is not an `S`.
    pub fn new(
        mut deps: BundleDeps<'c>,
        field: Arc<FieldDescriptor>,
        invalid_key: &'static str,
    ) -> Self {
        let gate = deps.open_gate();
        Self {
            deps,
            field,
            gate,
            invalid_key,
            _slot: PhantomData,
        }
    }

    /// The targeted field.
    pub fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    /// Appends a rule over the canonical value.
    ///
    /// The check returns `Some(error)` to fail. Unreachable fields arrive as
    /// [`Canonical::Absent`].
    pub fn check<F>(&mut self, check: F)
    where
        F: Fn(&ValidationContext, &FieldHelper<'_>, Canonical<'_, S::Value>) -> Option<ValidationError>
            + Send
            + Sync
            + 'static,
    {
        self.deps.append::<S, _>(
            &self.field,
            self.gate,
            self.invalid_key,
            move |ctx, helper, slot| check(ctx, helper, Canonical::of(slot)).into_iter().collect(),
        );
    }

    /// Appends a user rule over the declared representation.
    ///
    /// Skipped while the field is unreachable.
    pub fn custom<F>(&mut self, rule: F)
    where
        F: Fn(&ValidationContext, &FieldHelper<'_>, &mut S) -> Vec<ValidationError>
            + Send
            + Sync
            + 'static,
    {
        self.deps.append::<S, _>(
            &self.field,
            self.gate,
            self.invalid_key,
            move |ctx, helper, slot| match slot {
                Some(value) => rule(ctx, helper, value),
                None => Vec::new(),
            },
        );
    }

    /// Adds a predicate to this builder's gate.
    pub fn when<P>(&mut self, predicate: P)
    where
        P: Fn(&ValidationContext, Option<&S::Value>) -> bool + Send + Sync + 'static,
    {
        self.deps.gate::<S, _>(self.gate, predicate);
    }
}

/// Rule methods every family supports.
///
/// Methods consume and return the builder so declarations chain:
///
/// ```rust,ignore
/// rules.string("name")?.trim().required().when(|_, v| v.is_some());
/// ```
pub trait FieldRules<'c>: Sized {
    /// The declared representation of the targeted field.
    type Slot: Slot;

    /// Access to the shared builder core.
    fn core(&mut self) -> &mut RuleBuilder<'c, Self::Slot>;

    /// Fails when the field holds no value.
    ///
    /// What counts as "no value" depends on the family: an empty string, an
    /// empty sequence, or an absent optional.
    fn required(self) -> Self;

    /// Appends a user rule over the declared representation.
    ///
    /// The rule gets a [`FieldHelper`] bound to the field for building
    /// localized errors. It may mutate the value.
    fn custom<F>(mut self, rule: F) -> Self
    where
        F: Fn(&ValidationContext, &FieldHelper<'_>, &mut Self::Slot) -> Vec<ValidationError>
            + Send
            + Sync
            + 'static,
    {
        self.core().custom(rule);
        self
    }

    /// Gates every rule of this builder, before and after this call.
    ///
    /// Multiple predicates must all hold; they run in declaration order and
    /// stop at the first `false`. The predicate sees `None` for an absent
    /// or unreachable value.
    fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&ValidationContext, Option<&<Self::Slot as Slot>::Value>) -> bool
            + Send
            + Sync
            + 'static,
    {
        self.core().when(predicate);
        self
    }

    /// Like [`when`](Self::when); `None` leaves the gate unchanged.
    fn when_opt<P>(mut self, predicate: Option<P>) -> Self
    where
        P: Fn(&ValidationContext, Option<&<Self::Slot as Slot>::Value>) -> bool
            + Send
            + Sync
            + 'static,
    {
        if let Some(predicate) = predicate {
            self.core().when(predicate);
        }
        self
    }
}
