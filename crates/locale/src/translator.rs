//! The translator boundary

use crate::template::{Param, render};
use std::fmt::Debug;

/// Turns a locale key plus parameters into display text.
///
/// Implementations are shared across validation threads and must tolerate
/// concurrent `translate` calls.
pub trait Translator: Debug + Send + Sync {
    /// Renders `key` for `locale`.
    ///
    /// `locale` is the locale active for the current validation call, if any.
    /// Implementations fall back to their default locale and finally to the
    /// raw key text, so this never fails.
    fn translate(&self, locale: Option<&str>, key: &str, params: &[Param]) -> String;

    /// Returns the locale used when the requested one lacks a key.
    fn default_locale(&self) -> Option<&str> {
        None
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn translate(&self, locale: Option<&str>, key: &str, params: &[Param]) -> String {
        (**self).translate(locale, key, params)
    }

    fn default_locale(&self) -> Option<&str> {
        (**self).default_locale()
    }
}

/// Translator with no catalogs: every key renders as itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopTranslator;

impl Translator for NoopTranslator {
    fn translate(&self, _locale: Option<&str>, key: &str, params: &[Param]) -> String {
        render(key, params)
    }
}
