//! Integer rules
//!
//! Work for every primitive integer width. Bounds take any primitive integer
//! and are inclusive; comparisons widen both sides to `i128` so `u64::MAX`
//! never wraps. An absent optional
//! integer fails every bound check.

use super::builder::{FieldRules, RuleBuilder};
use super::deps::{Bundle, BundleDeps};
use crate::error::ConfigError;
use crate::foundation::{Integer, Slot};
use rulebook_locale::param;

/// Locale keys reported by integer rules.
pub mod keys {
    /// `required` failed.
    pub const REQUIRED: &str = "validation:int:Should be fulfilled";
    /// `min` failed.
    pub const MIN: &str = "validation:int:Cannot be less than {min}";
    /// `max` failed.
    pub const MAX: &str = "validation:int:Cannot be greater than {max}";
    /// `any_of` failed.
    pub const ANY_OF: &str = "validation:int:Only {allowed} values are allowed";
    /// The field did not hold an integer.
    pub const INVALID: &str = "validation:int:Invalid integer value";
}

/// Entry points for integer fields.
pub struct IntBundle<'c> {
    deps: BundleDeps<'c>,
}

impl<'c> Bundle<'c> for IntBundle<'c> {
    fn new(deps: BundleDeps<'c>) -> Self {
        Self { deps }
    }
}

impl<'c> IntBundle<'c> {
    /// Rules for a field declared as the integer type `T`.
    pub fn int<T>(self, path: &str) -> Result<IntBuilder<'c, T>, ConfigError>
    where
        T: Integer + Slot<Value = T>,
    {
        self.builder(path)
    }

    /// Rules for a field declared as `Option<T>`.
    pub fn int_opt<T>(self, path: &str) -> Result<IntBuilder<'c, Option<T>>, ConfigError>
    where
        T: Integer,
        Option<T>: Slot<Value = T>,
    {
        self.builder(path)
    }

    fn builder<S>(self, path: &str) -> Result<IntBuilder<'c, S>, ConfigError>
    where
        S: Slot,
        S::Value: Integer,
    {
        let field = self.deps.resolve::<S>(path)?;
        Ok(IntBuilder {
            core: RuleBuilder::new(self.deps, field, keys::INVALID),
        })
    }
}

/// Rules for an integer field declared as `S` (`T` or `Option<T>`).
pub struct IntBuilder<'c, S>
where
    S: Slot,
    S::Value: Integer,
{
    core: RuleBuilder<'c, S>,
}

impl<'c, S> FieldRules<'c> for IntBuilder<'c, S>
where
    S: Slot,
    S::Value: Integer,
{
    type Slot = S;

    fn core(&mut self) -> &mut RuleBuilder<'c, S> {
        &mut self.core
    }

    /// Fails on an absent optional. Zero is a value.
    fn required(mut self) -> Self {
        self.core.check(|ctx, helper, value| {
            value
                .is_absent()
                .then(|| helper.error_t(ctx, None, keys::REQUIRED, &[]))
        });
        self
    }
}

impl<S> IntBuilder<'_, S>
where
    S: Slot,
    S::Value: Integer,
{
    /// Fails when less than `min`.
    pub fn min(mut self, min: impl Integer) -> Self {
        let bound = min.widen();
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|n| n.widen() >= bound);
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::MIN, &[param("min", min.to_string())])
            })
        });
        self
    }

    /// Fails when greater than `max`.
    pub fn max(mut self, max: impl Integer) -> Self {
        let bound = max.widen();
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|n| n.widen() <= bound);
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::MAX, &[param("max", max.to_string())])
            })
        });
        self
    }

    /// Fails unless the value equals one of `allowed`.
    pub fn any_of<I>(mut self, allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Integer,
    {
        let allowed: Vec<i128> = allowed.into_iter().map(Integer::widen).collect();
        let rendered = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|n| allowed.contains(&n.widen()));
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::ANY_OF, &[param("allowed", rendered.clone())])
            })
        });
        self
    }
}
