//! Integer-sequence rules
//!
//! Bound checks report the first offending element only, with that element
//! as the error value and its position as the `index` parameter. An absent
//! optional sequence fails every bound check.

use super::builder::{FieldRules, RuleBuilder};
use super::deps::{Bundle, BundleDeps};
use crate::error::ConfigError;
use crate::foundation::{IntSequence, Integer, Slot};
use rulebook_locale::param;

/// Locale keys reported by integer-sequence rules.
pub mod keys {
    /// `required` failed.
    pub const REQUIRED: &str = "validation:int_slice:Should contain at least one element";
    /// `min` failed.
    pub const MIN: &str = "validation:int_slice:Each element cannot be less than {min}";
    /// `max` failed.
    pub const MAX: &str = "validation:int_slice:Each element cannot be greater than {max}";
    /// The field did not hold an integer sequence.
    pub const INVALID: &str = "validation:int_slice:Invalid integer sequence";
}

/// Entry points for integer-sequence fields.
pub struct IntSliceBundle<'c> {
    deps: BundleDeps<'c>,
}

impl<'c> Bundle<'c> for IntSliceBundle<'c> {
    fn new(deps: BundleDeps<'c>) -> Self {
        Self { deps }
    }
}

impl<'c> IntSliceBundle<'c> {
    /// Rules for a field declared as `Vec<T>`.
    pub fn int_slice<T: Integer>(self, path: &str) -> Result<IntSliceBuilder<'c, Vec<T>>, ConfigError> {
        self.builder(path)
    }

    /// Rules for a field declared as `Option<Vec<T>>`.
    pub fn int_slice_opt<T: Integer>(
        self,
        path: &str,
    ) -> Result<IntSliceBuilder<'c, Option<Vec<T>>>, ConfigError> {
        self.builder(path)
    }

    fn builder<S>(self, path: &str) -> Result<IntSliceBuilder<'c, S>, ConfigError>
    where
        S: Slot,
        S::Value: IntSequence,
    {
        let field = self.deps.resolve::<S>(path)?;
        Ok(IntSliceBuilder {
            core: RuleBuilder::new(self.deps, field, keys::INVALID),
        })
    }
}

/// Rules for an integer-sequence field declared as `S`.
pub struct IntSliceBuilder<'c, S>
where
    S: Slot,
    S::Value: IntSequence,
{
    core: RuleBuilder<'c, S>,
}

impl<'c, S> FieldRules<'c> for IntSliceBuilder<'c, S>
where
    S: Slot,
    S::Value: IntSequence,
{
    type Slot = S;

    fn core(&mut self) -> &mut RuleBuilder<'c, S> {
        &mut self.core
    }

    /// Fails on an absent or empty sequence.
    fn required(mut self) -> Self {
        self.core.check(|ctx, helper, value| {
            value
                .get()
                .is_none_or(|seq| seq.elements().is_empty())
                .then(|| helper.error_t(ctx, None, keys::REQUIRED, &[]))
        });
        self
    }
}

impl<S> IntSliceBuilder<'_, S>
where
    S: Slot,
    S::Value: IntSequence,
{
    /// Fails when any element is less than `min`.
    pub fn min(mut self, min: impl Integer) -> Self {
        let bound = min.widen();
        self.core.check(move |ctx, helper, value| {
            let params = |index: Option<usize>| {
                let mut params = vec![param("min", min.to_string())];
                params.extend(index.map(|i| param("index", i.to_string())));
                params
            };
            match value.get() {
                None => Some(helper.error_t(ctx, None, keys::MIN, &params(None))),
                Some(seq) => first_offending(seq.elements(), |n| n < bound).map(|(i, n)| {
                    helper.error_t(ctx, Some(&n), keys::MIN, &params(Some(i)))
                }),
            }
        });
        self
    }

    /// Fails when any element is greater than `max`.
    pub fn max(mut self, max: impl Integer) -> Self {
        let bound = max.widen();
        self.core.check(move |ctx, helper, value| {
            let params = |index: Option<usize>| {
                let mut params = vec![param("max", max.to_string())];
                params.extend(index.map(|i| param("index", i.to_string())));
                params
            };
            match value.get() {
                None => Some(helper.error_t(ctx, None, keys::MAX, &params(None))),
                Some(seq) => first_offending(seq.elements(), |n| n > bound).map(|(i, n)| {
                    helper.error_t(ctx, Some(&n), keys::MAX, &params(Some(i)))
                }),
            }
        });
        self
    }
}

fn first_offending<T: Integer>(
    elements: &[T],
    offends: impl Fn(i128) -> bool,
) -> Option<(usize, T)> {
    elements
        .iter()
        .copied()
        .enumerate()
        .find(|(_, n)| offends(n.widen()))
}
