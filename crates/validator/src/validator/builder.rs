//! Validator construction options

use super::{ErrorsTransformer, Validator};
use crate::foundation::ValidationError;
use crate::helper::{FieldNamingFn, Helper, field_path_naming};
use crate::registry::FieldDescriptor;
use rulebook_locale::{NoopTranslator, Translator};
use std::sync::Arc;

/// Builder for [`Validator`].
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::{InMemoryTranslator, Validator};
///
/// let validator = Validator::builder()
///     .translator(InMemoryTranslator::with_default_locale("en"))
///     .field_location_naming(|field| format!("body.{}", field.path()))
///     .errors_transformer(|errors| errors.into_iter().map(|e| e.message.into_owned()).collect())
///     .build();
/// ```
pub struct ValidatorBuilder<E = ValidationError> {
    translator: Arc<dyn Translator>,
    naming: FieldNamingFn,
    transform: ErrorsTransformer<E>,
}

impl ValidatorBuilder<ValidationError> {
    /// Starts from the defaults: the no-op translator, dotted-path locations
    /// and unchanged errors.
    pub fn new() -> Self {
        Self {
            translator: Arc::new(NoopTranslator),
            naming: field_path_naming(),
            transform: Arc::new(|errors: Vec<ValidationError>| errors),
        }
    }
}

impl Default for ValidatorBuilder<ValidationError> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ValidatorBuilder<E> {
    /// Renders locale keys through `translator`.
    ///
    /// Pass an `Arc` to keep registering catalogs after the validator is
    /// built.
    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Like [`translator`](Self::translator); `None` keeps the current one.
    pub fn translator_opt(mut self, translator: Option<Arc<dyn Translator>>) -> Self {
        if let Some(translator) = translator {
            self.translator = translator;
        }
        self
    }

    /// Computes reported field locations with `naming`.
    pub fn field_location_naming<F>(mut self, naming: F) -> Self
    where
        F: Fn(&FieldDescriptor) -> String + Send + Sync + 'static,
    {
        self.naming = Arc::new(naming);
        self
    }

    /// Like [`field_location_naming`](Self::field_location_naming); `None`
    /// keeps the current function.
    pub fn field_location_naming_opt(mut self, naming: Option<FieldNamingFn>) -> Self {
        if let Some(naming) = naming {
            self.naming = naming;
        }
        self
    }

    /// Post-processes every `validate` result with `transform`.
    ///
    /// The transformer decides the validator's error type.
    pub fn errors_transformer<E2, F>(self, transform: F) -> ValidatorBuilder<E2>
    where
        F: Fn(Vec<ValidationError>) -> Vec<E2> + Send + Sync + 'static,
    {
        ValidatorBuilder {
            translator: self.translator,
            naming: self.naming,
            transform: Arc::new(transform),
        }
    }

    /// Replaces the transformer when `Some`; `None` keeps the current one.
    pub fn errors_transformer_opt(mut self, transform: Option<ErrorsTransformer<E>>) -> Self {
        if let Some(transform) = transform {
            self.transform = transform;
        }
        self
    }

    /// Builds the validator.
    pub fn build(self) -> Validator<E> {
        Validator {
            store: super::store::RuleStore::default(),
            helper: Helper::new(self.translator, self.naming),
            transform: self.transform,
        }
    }
}
