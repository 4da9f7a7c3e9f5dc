//! Per-call validation context
//!
//! Carries the active locale plus arbitrary typed values that gate
//! predicates and custom rules can consult (feature flags, the current user,
//! a reference date). Contexts chain to a parent, so a request-scoped context
//! can layer over an application-wide one.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Values available to rules during one `validate` call.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::ValidationContext;
///
/// let ctx = ValidationContext::builder()
///     .locale("de")
///     .with("strict", true)
///     .build();
///
/// assert_eq!(ctx.locale(), Some("de"));
/// assert_eq!(ctx.get::<bool>("strict"), Some(&true));
/// ```
#[derive(Clone, Default)]
pub struct ValidationContext {
    locale: Option<String>,
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
    parent: Option<Arc<ValidationContext>>,
}

impl ValidationContext {
    /// Creates an empty context with no locale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a context.
    #[must_use]
    pub fn builder() -> ValidationContextBuilder {
        ValidationContextBuilder::new()
    }

    /// Creates an empty context that falls back to `parent` for lookups.
    #[must_use]
    pub fn with_parent(parent: Arc<Self>) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Creates an empty context with an active locale.
    #[must_use]
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..Self::default()
        }
    }

    /// Sets the active locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    /// Returns the active locale, inherited from the parent when unset.
    pub fn locale(&self) -> Option<&str> {
        match &self.locale {
            Some(locale) => Some(locale),
            None => self.parent.as_deref().and_then(Self::locale),
        }
    }

    /// Stores a typed value under `key`, replacing any previous one.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Arc::new(value));
    }

    /// Returns the value under `key` if it exists and has type `T`.
    ///
    /// Looks in this context first, then up the parent chain.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        match self.values.get(key) {
            Some(value) => value.downcast_ref::<T>(),
            None => self.parent.as_deref().and_then(|p| p.get(key)),
        }
    }

    /// Returns true if `key` is set here or in a parent.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key) || self.parent.as_deref().is_some_and(|p| p.contains(key))
    }

    /// Number of values stored directly in this context.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this context stores no values of its own.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ValidationContext")
            .field("locale", &self.locale)
            .field("keys", &keys)
            .field("parent", &self.parent)
            .finish()
    }
}

/// Builder for [`ValidationContext`].
#[derive(Debug, Default)]
pub struct ValidationContextBuilder {
    context: ValidationContext,
}

impl ValidationContextBuilder {
    /// Creates a builder for an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.context.set_locale(locale);
        self
    }

    /// Stores a typed value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.context.insert(key, value);
        self
    }

    /// Sets the parent context.
    #[must_use = "builder methods must be chained or built"]
    pub fn parent(mut self, parent: Arc<ValidationContext>) -> Self {
        self.context.parent = Some(parent);
        self
    }

    /// Builds the context.
    #[must_use]
    pub fn build(self) -> ValidationContext {
        self.context
    }
}
