//! Error construction and localization
//!
//! [`Helper`] turns a failing rule into a [`ValidationError`]: it computes
//! the field location through the naming function and renders the locale key
//! through the translator, in the locale carried by the validation context.
//! [`FieldHelper`] binds a helper to one field and is what custom rules get.

use crate::foundation::{ValidationContext, ValidationError};
use crate::registry::FieldDescriptor;
use rulebook_locale::{NoopTranslator, Param, Translator};
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Computes the location reported for a field.
pub type FieldNamingFn = Arc<dyn Fn(&FieldDescriptor) -> String + Send + Sync>;

/// The default naming function: the dotted field path.
///
/// For a top-level field this is its declared name. A field inside a nested
/// record reports the full path (`address.city`), not the bare name (`city`);
/// use [`FieldDescriptor::name`] in a custom naming function for the latter.
pub fn field_path_naming() -> FieldNamingFn {
    Arc::new(|field: &FieldDescriptor| field.path().to_owned())
}

/// Shared error builder, owned by a validator.
#[derive(Clone)]
pub struct Helper {
    translator: Arc<dyn Translator>,
    naming: FieldNamingFn,
}

impl Helper {
    /// Creates a helper from a translator and a naming function.
    pub fn new(translator: Arc<dyn Translator>, naming: FieldNamingFn) -> Self {
        Self { translator, naming }
    }

    /// The active translator.
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Location reported for `field`.
    pub fn field_location(&self, field: &FieldDescriptor) -> String {
        (self.naming)(field)
    }

    /// Builds a localized error for `field`.
    ///
    /// `value` is the offending value, if the field held one.
    pub fn error_t(
        &self,
        ctx: &ValidationContext,
        field: &FieldDescriptor,
        value: Option<&dyn Display>,
        key: impl Into<Cow<'static, str>>,
        params: &[Param],
    ) -> ValidationError {
        let key = key.into();
        let message = self.translator.translate(ctx.locale(), &key, params);
        let error = ValidationError::new(key, message)
            .with_field(self.field_location(field))
            .with_params(params.iter().cloned());
        match value {
            Some(value) => error.with_value(value.to_string()),
            None => error,
        }
    }
}

impl Default for Helper {
    fn default() -> Self {
        Self::new(Arc::new(NoopTranslator), field_path_naming())
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helper")
            .field("translator", &self.translator)
            .field("naming", &"<fn>")
            .finish()
    }
}

/// A [`Helper`] bound to the field a rule targets.
#[derive(Debug, Clone, Copy)]
pub struct FieldHelper<'a> {
    helper: &'a Helper,
    field: &'a FieldDescriptor,
}

impl<'a> FieldHelper<'a> {
    pub(crate) const fn new(helper: &'a Helper, field: &'a FieldDescriptor) -> Self {
        Self { helper, field }
    }

    /// The field being validated.
    pub const fn field(&self) -> &'a FieldDescriptor {
        self.field
    }

    /// Location reported for the field.
    pub fn location(&self) -> String {
        self.helper.field_location(self.field)
    }

    /// Builds a localized error for the bound field.
    pub fn error_t(
        &self,
        ctx: &ValidationContext,
        value: Option<&dyn Display>,
        key: impl Into<Cow<'static, str>>,
        params: &[Param],
    ) -> ValidationError {
        self.helper.error_t(ctx, self.field, value, key, params)
    }
}
