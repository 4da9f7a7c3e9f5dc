//! String rules
//!
//! Lengths count characters (Unicode scalar values), not bytes. Bounds are
//! inclusive. Content rules on an absent optional string fail the same way
//! an out-of-range value does; only `trim` tolerates absence silently.

use super::builder::{FieldRules, RuleBuilder};
use super::deps::{Bundle, BundleDeps};
use crate::error::ConfigError;
use crate::foundation::Slot;
use regex::Regex;
use rulebook_locale::param;
use std::borrow::Cow;

/// Locale keys reported by string rules.
pub mod keys {
    /// `required` failed.
    pub const REQUIRED: &str = "validation:string:Should be fulfilled";
    /// `min_len` failed.
    pub const MIN_LEN: &str = "validation:string:Cannot be shorter than {min} characters";
    /// `max_len` failed.
    pub const MAX_LEN: &str = "validation:string:Cannot be longer than {max} characters";
    /// `len` failed.
    pub const LEN: &str = "validation:string:Should be exactly {len} characters long";
    /// `regexp` failed.
    pub const REGEXP: &str = "validation:string:Doesn't match required regexp pattern";
    /// `any_of` failed.
    pub const ANY_OF: &str = "validation:string:Only {allowed} values are allowed";
    /// The field did not hold a string.
    pub const INVALID: &str = "validation:string:Invalid string value";
}

/// Entry points for string fields.
pub struct StringBundle<'c> {
    deps: BundleDeps<'c>,
}

impl<'c> Bundle<'c> for StringBundle<'c> {
    fn new(deps: BundleDeps<'c>) -> Self {
        Self { deps }
    }
}

impl<'c> StringBundle<'c> {
    /// Rules for a field declared as `String`.
    pub fn string(self, path: &str) -> Result<StringBuilder<'c, String>, ConfigError> {
        self.builder(path)
    }

    /// Rules for a field declared as `Option<String>`.
    pub fn string_opt(self, path: &str) -> Result<StringBuilder<'c, Option<String>>, ConfigError> {
        self.builder(path)
    }

    fn builder<S>(self, path: &str) -> Result<StringBuilder<'c, S>, ConfigError>
    where
        S: Slot<Value = String>,
    {
        let field = self.deps.resolve::<S>(path)?;
        Ok(StringBuilder {
            core: RuleBuilder::new(self.deps, field, keys::INVALID),
        })
    }
}

/// Options for [`StringBuilder::regexp_with`].
#[derive(Debug, Clone)]
pub struct RegexpOptions {
    locale_key: Cow<'static, str>,
}

impl RegexpOptions {
    /// Options with the default locale key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `key` instead of the default locale key on mismatch.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.locale_key = key.into();
        self
    }
}

impl Default for RegexpOptions {
    fn default() -> Self {
        Self {
            locale_key: Cow::Borrowed(keys::REGEXP),
        }
    }
}

/// Rules for a string field declared as `S` (`String` or `Option<String>`).
pub struct StringBuilder<'c, S: Slot<Value = String>> {
    core: RuleBuilder<'c, S>,
}

impl<'c, S: Slot<Value = String>> FieldRules<'c> for StringBuilder<'c, S> {
    type Slot = S;

    fn core(&mut self) -> &mut RuleBuilder<'c, S> {
        &mut self.core
    }

    /// Fails on an absent or empty string.
    fn required(mut self) -> Self {
        self.core.check(|ctx, helper, value| {
            value
                .get()
                .is_none_or(String::is_empty)
                .then(|| helper.error_t(ctx, value.display(), keys::REQUIRED, &[]))
        });
        self
    }
}

impl<S: Slot<Value = String>> StringBuilder<'_, S> {
    /// Strips leading and trailing whitespace in place.
    ///
    /// Rules declared after `trim` see the trimmed value.
    pub fn trim(mut self) -> Self {
        self.core.check(|_, _, mut value| {
            if let Some(text) = value.get_mut() {
                let trimmed = text.trim();
                if trimmed.len() != text.len() {
                    *text = trimmed.to_owned();
                }
            }
            None
        });
        self
    }

    /// Fails when shorter than `min` characters.
    pub fn min_len(mut self, min: usize) -> Self {
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|text| text.chars().count() >= min);
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::MIN_LEN, &[param("min", min.to_string())])
            })
        });
        self
    }

    /// Fails when longer than `max` characters.
    pub fn max_len(mut self, max: usize) -> Self {
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|text| text.chars().count() <= max);
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::MAX_LEN, &[param("max", max.to_string())])
            })
        });
        self
    }

    /// Fails unless exactly `len` characters long.
    pub fn len(mut self, len: usize) -> Self {
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|text| text.chars().count() == len);
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::LEN, &[param("len", len.to_string())])
            })
        });
        self
    }

    /// Fails unless `pattern` finds a non-empty match.
    pub fn regexp(self, pattern: Regex) -> Self {
        self.regexp_with(pattern, RegexpOptions::default())
    }

    /// Like [`regexp`](Self::regexp), with options.
    pub fn regexp_with(mut self, pattern: Regex, options: RegexpOptions) -> Self {
        let key = options.locale_key;
        self.core.check(move |ctx, helper, value| {
            let ok = value
                .get()
                .and_then(|text| pattern.find(text))
                .is_some_and(|found| !found.is_empty());
            (!ok).then(|| helper.error_t(ctx, value.display(), key.clone(), &[]))
        });
        self
    }

    /// Fails unless the value equals one of `allowed`.
    pub fn any_of<I>(mut self, allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let rendered = allowed
            .iter()
            .map(|option| format!("\"{option}\""))
            .collect::<Vec<_>>()
            .join(",");
        self.core.check(move |ctx, helper, value| {
            let ok = value.get().is_some_and(|text| allowed.contains(text));
            (!ok).then(|| {
                helper.error_t(ctx, value.display(), keys::ANY_OF, &[param("allowed", rendered.clone())])
            })
        });
        self
    }
}
