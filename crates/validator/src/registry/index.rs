//! Ordered field index of one record type

use super::Record;
use super::descriptor::{FieldDescriptor, RecordInfo};
use super::field_set::FieldSet;
use crate::error::RegistryError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;

/// Every leaf field of a record, keyed by dotted path, in declaration order.
#[derive(Debug)]
pub struct FieldIndex {
    record: RecordInfo,
    fields: IndexMap<String, Arc<FieldDescriptor>>,
}

impl FieldIndex {
    pub(crate) fn build<R: Record>() -> Result<Self, RegistryError> {
        let record = RecordInfo::of::<R>();
        let mut set = FieldSet::<R>::root();
        R::describe(&mut set);

        let entries = set.finish()?;
        let mut fields = IndexMap::with_capacity(entries.len());
        for entry in entries {
            match fields.entry(entry.path().to_owned()) {
                Entry::Occupied(slot) => {
                    return Err(RegistryError::DuplicateField {
                        record: record.name(),
                        path: slot.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(entry.into_descriptor(record)));
                }
            }
        }

        Ok(Self { record, fields })
    }

    /// The record these fields belong to.
    pub const fn record(&self) -> RecordInfo {
        self.record
    }

    /// Looks up a field by dotted path.
    pub fn get(&self, path: &str) -> Option<&Arc<FieldDescriptor>> {
        self.fields.get(path)
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<FieldDescriptor>> {
        self.fields.values()
    }

    /// Dotted paths in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of leaf fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
