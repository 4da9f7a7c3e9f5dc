//! Field registry
//!
//! Maps a record type to the ordered list of its addressable fields. Records
//! describe themselves once through [`Record::describe`]; the resulting
//! [`FieldIndex`] is cached process-wide and shared by every validator.
//!
//! # Thread Safety
//!
//! The cache uses `parking_lot::RwLock`. Lookups of an already-described
//! record only take the read lock.

mod descriptor;
mod field_set;
mod index;
mod resolve;

pub use descriptor::{FieldDescriptor, RecordInfo};
pub use field_set::{FieldSet, MAX_NESTING_DEPTH};
pub use index::FieldIndex;
pub use resolve::FieldResolver;

use crate::error::RegistryError;
use parking_lot::RwLock;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// A structured record whose fields can carry validation rules.
///
/// Implement with the [`record!`](crate::record) macro or by hand.
pub trait Record: Any + Sized {
    /// Declares the record's fields.
    fn describe(fields: &mut FieldSet<Self>);
}

static CACHE: LazyLock<RwLock<HashMap<TypeId, Arc<FieldIndex>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the field index of `R`, describing it on first use.
///
/// Concurrent first calls may both build the index; the first one stored
/// wins and both callers get it.
pub fn describe_fields<R: Record>() -> Result<Arc<FieldIndex>, RegistryError> {
    let id = TypeId::of::<R>();
    if let Some(index) = CACHE.read().get(&id) {
        return Ok(Arc::clone(index));
    }

    let built = Arc::new(FieldIndex::build::<R>()?);
    let mut cache = CACHE.write();
    let index = cache.entry(id).or_insert(built);
    tracing::debug!(
        record = type_name::<R>(),
        fields = index.len(),
        "described record fields"
    );
    Ok(Arc::clone(index))
}
