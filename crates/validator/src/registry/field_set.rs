//! Field descriptions
//!
//! A record lists its fields by handing [`FieldSet`] one accessor per field.
//! Nested records contribute their own fields under a dotted prefix; the
//! accessors are composed so a descriptor always starts from the root record.

use super::Record;
use super::descriptor::{Accessor, FieldDescriptor, RecordInfo};
use crate::error::RegistryError;
use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;

/// Maximum nesting depth of record descriptions.
pub const MAX_NESTING_DEPTH: usize = 16;

pub(crate) struct FieldEntry {
    path: String,
    name: &'static str,
    value_type: TypeId,
    value_type_name: &'static str,
    behind_optional: bool,
    accessor: Accessor,
}

impl FieldEntry {
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn into_descriptor(self, record: RecordInfo) -> FieldDescriptor {
        FieldDescriptor {
            record,
            path: self.path,
            name: self.name,
            value_type: self.value_type,
            value_type_name: self.value_type_name,
            behind_optional: self.behind_optional,
            accessor: self.accessor,
        }
    }
}

/// Collects the fields of record `R`.
///
/// Usually filled in by the [`record!`](crate::record) macro; implement
/// [`Record::describe`] by hand for renamed paths or computed accessors.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::registry::{FieldSet, Record};
///
/// struct Address { city: String }
/// struct User { name: String, address: Option<Address> }
///
/// impl Record for Address {
///     fn describe(fields: &mut FieldSet<Self>) {
///         fields.field("city", |a| &mut a.city);
///     }
/// }
///
/// impl Record for User {
///     fn describe(fields: &mut FieldSet<Self>) {
///         fields
///             .field("name", |u| &mut u.name)
///             .nested_opt("address", |u| &mut u.address);
///     }
/// }
/// ```
pub struct FieldSet<R> {
    prefix: String,
    depth: usize,
    entries: Vec<FieldEntry>,
    error: Option<RegistryError>,
    _record: PhantomData<fn(&mut R)>,
}

impl<R: Record> FieldSet<R> {
    pub(crate) fn root() -> Self {
        Self::at(String::new(), 0)
    }

    fn at(prefix: String, depth: usize) -> Self {
        Self {
            prefix,
            depth,
            entries: Vec::new(),
            error: None,
            _record: PhantomData,
        }
    }

    /// Declares a field of type `V`.
    pub fn field<V, F>(&mut self, name: &'static str, get: F) -> &mut Self
    where
        V: Any,
        F: Fn(&mut R) -> &mut V + Send + Sync + 'static,
    {
        self.entries.push(FieldEntry {
            path: format!("{}{name}", self.prefix),
            name,
            value_type: TypeId::of::<V>(),
            value_type_name: type_name::<V>(),
            behind_optional: false,
            accessor: Accessor::project(get),
        });
        self
    }

    /// Declares a nested record whose fields appear as `name.<field>`.
    pub fn nested<C, F>(&mut self, name: &'static str, get: F) -> &mut Self
    where
        C: Record,
        F: Fn(&mut R) -> &mut C + Send + Sync + 'static,
    {
        self.descend::<C>(name, &Accessor::project(get), false)
    }

    /// Declares an optional nested record.
    ///
    /// Its fields are unreachable while the record is `None`; rules then see
    /// them as absent.
    pub fn nested_opt<C, F>(&mut self, name: &'static str, get: F) -> &mut Self
    where
        C: Record,
        F: Fn(&mut R) -> &mut Option<C> + Send + Sync + 'static,
    {
        self.descend::<C>(name, &Accessor::project_optional(get), true)
    }

    fn descend<C: Record>(
        &mut self,
        name: &'static str,
        parent: &Accessor,
        optional: bool,
    ) -> &mut Self {
        if self.error.is_some() {
            return self;
        }

        let path = format!("{}{name}", self.prefix);
        if self.depth >= MAX_NESTING_DEPTH {
            self.error = Some(RegistryError::NestingTooDeep {
                path,
                limit: MAX_NESTING_DEPTH,
            });
            return self;
        }

        let mut child = FieldSet::<C>::at(format!("{path}."), self.depth + 1);
        C::describe(&mut child);
        if let Some(err) = child.error {
            self.error = Some(err);
            return self;
        }

        self.entries.extend(child.entries.into_iter().map(|entry| FieldEntry {
            accessor: parent.then(&entry.accessor),
            behind_optional: optional || entry.behind_optional,
            ..entry
        }));
        self
    }

    /// Number of leaf fields declared so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no fields were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn finish(self) -> Result<Vec<FieldEntry>, RegistryError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.entries),
        }
    }
}
