//! Path and representation resolution

use super::descriptor::{FieldDescriptor, RecordInfo};
use super::index::FieldIndex;
use crate::error::ConfigError;
use crate::foundation::Slot;
use std::any::{TypeId, type_name};
use std::sync::Arc;

/// Resolves rule targets against one record's field index.
///
/// A target resolves when the path exists and the field is declared with
/// exactly the representation the rule entry point asks for: a rule built
/// with `string("nickname")` does not match a field declared as
/// `Option<String>`.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    index: Arc<FieldIndex>,
}

impl FieldResolver {
    /// Wraps a field index.
    pub const fn new(index: Arc<FieldIndex>) -> Self {
        Self { index }
    }

    /// The record being configured.
    pub fn record(&self) -> RecordInfo {
        self.index.record()
    }

    /// The underlying index.
    pub fn index(&self) -> &FieldIndex {
        &self.index
    }

    /// Resolves `path` as a field of declared type `S`.
    pub fn resolve<S: Slot>(&self, path: &str) -> Result<Arc<FieldDescriptor>, ConfigError> {
        match self.index.get(path) {
            Some(field) if field.value_type() == TypeId::of::<S>() => Ok(Arc::clone(field)),
            found => Err(ConfigError::FieldNotFound {
                record: self.record().name(),
                path: path.to_owned(),
                expected: type_name::<S>(),
                found: found.map(|field| field.value_type_name()),
            }),
        }
    }
}
