//! Field descriptors and accessors

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// Identity of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordInfo {
    id: TypeId,
    name: &'static str,
}

impl RecordInfo {
    /// Identity of `R`.
    pub fn of<R: Any>() -> Self {
        Self {
            id: TypeId::of::<R>(),
            name: type_name::<R>(),
        }
    }

    /// Runtime type identity.
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Type name, for diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

type AccessFn = dyn for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Any> + Send + Sync;

/// Type-erased path from a record to one of its fields.
///
/// Returns `None` when an optional record along the path is absent or the
/// instance is not the record type the accessor was built for.
#[derive(Clone)]
pub(crate) struct Accessor(Arc<AccessFn>);

impl Accessor {
    fn new<F>(access: F) -> Self
    where
        F: for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Any> + Send + Sync + 'static,
    {
        Self(Arc::new(access))
    }

    /// Projects `R` onto one of its fields.
    pub(crate) fn project<R, V, F>(get: F) -> Self
    where
        R: Any,
        V: Any,
        F: Fn(&mut R) -> &mut V + Send + Sync + 'static,
    {
        Self::new(move |record| {
            record
                .downcast_mut::<R>()
                .map(|record| get(record) as &mut dyn Any)
        })
    }

    /// Projects `R` onto an optional nested record, stopping when it is `None`.
    pub(crate) fn project_optional<R, C, F>(get: F) -> Self
    where
        R: Any,
        C: Any,
        F: Fn(&mut R) -> &mut Option<C> + Send + Sync + 'static,
    {
        Self::new(move |record| {
            record
                .downcast_mut::<R>()
                .and_then(|record| get(record).as_mut())
                .map(|child| child as &mut dyn Any)
        })
    }

    /// Composes `self` (record → child) with `inner` (child → field).
    pub(crate) fn then(&self, inner: &Self) -> Self {
        let outer = self.clone();
        let inner = inner.clone();
        Self::new(move |record| outer.get(record).and_then(|child| inner.get(child)))
    }

    pub(crate) fn get<'a>(&self, record: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        (self.0)(record)
    }
}

/// One addressable field of a record.
///
/// Built once per record type by the registry and shared by every rule that
/// targets the field.
pub struct FieldDescriptor {
    pub(crate) record: RecordInfo,
    pub(crate) path: String,
    pub(crate) name: &'static str,
    pub(crate) value_type: TypeId,
    pub(crate) value_type_name: &'static str,
    pub(crate) behind_optional: bool,
    pub(crate) accessor: Accessor,
}

impl FieldDescriptor {
    /// The record type this field belongs to.
    pub const fn record(&self) -> RecordInfo {
        self.record
    }

    /// Dotted path from the record root, e.g. `"address.city"`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name the field was declared with, without its parents.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field.
    pub const fn value_type(&self) -> TypeId {
        self.value_type
    }

    /// Declared type name, for diagnostics.
    pub const fn value_type_name(&self) -> &'static str {
        self.value_type_name
    }

    /// True if the field sits under at least one optional nested record.
    pub const fn is_behind_optional(&self) -> bool {
        self.behind_optional
    }

    /// Locates the field inside `record`.
    ///
    /// `None` means the field is currently unreachable.
    pub fn locate<'a>(&self, record: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        self.accessor.get(record)
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("record", &self.record.name)
            .field("path", &self.path)
            .field("value_type", &self.value_type_name)
            .field("behind_optional", &self.behind_optional)
            .field("accessor", &"<accessor>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inner {
        city: String,
    }

    struct Outer {
        inner: Option<Inner>,
    }

    #[test]
    fn composed_accessor_reaches_nested_field() {
        let outer = Accessor::project_optional(|o: &mut Outer| &mut o.inner);
        let city = Accessor::project(|i: &mut Inner| &mut i.city);
        let path = outer.then(&city);

        let mut record = Outer {
            inner: Some(Inner { city: "Oslo".into() }),
        };
        let slot = path.get(&mut record).and_then(|f| f.downcast_mut::<String>());
        assert_eq!(slot.map(|s| s.as_str()), Some("Oslo"));
    }

    #[test]
    fn absent_optional_is_unreachable() {
        let outer = Accessor::project_optional(|o: &mut Outer| &mut o.inner);
        let city = Accessor::project(|i: &mut Inner| &mut i.city);
        let mut record = Outer { inner: None };
        assert!(outer.then(&city).get(&mut record).is_none());
    }

    #[test]
    fn wrong_record_type_is_unreachable() {
        let city = Accessor::project(|i: &mut Inner| &mut i.city);
        let mut other = 5_u32;
        assert!(city.get(&mut other).is_none());
    }
}
