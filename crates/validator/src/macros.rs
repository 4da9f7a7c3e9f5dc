//! Macros for describing records with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`]: implement [`Record`](crate::registry::Record) from a field list
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulebook::record;
//!
//! struct Address { city: String, zip: Option<String> }
//! struct User { name: String, tags: Vec<u16>, address: Address, billing: Option<Address> }
//!
//! record! {
//!     Address { city, zip }
//!     User {
//!         name,
//!         tags as "labels",
//!         #[nested] address: Address,
//!         #[nested(optional)] billing: Address,
//!     }
//! }
//! ```

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Implements [`Record`](crate::registry::Record) for one or more structs.
///
/// Each entry lists the fields rules may target:
///
/// | Syntax | Declares |
/// |--------|----------|
/// | `field` | a leaf field at path `"field"` |
/// | `field as "path"` | a leaf field at a custom path |
/// | `#[nested] field: Type` | the fields of `Type` under `"field."` |
/// | `#[nested(optional)] field: Type` | same, for an `Option<Type>` field |
///
/// Nested types must implement `Record` themselves.
#[macro_export]
macro_rules! record {
    // ── Entry: one or more records ───────────────────────────────────────
    ($($name:ident { $($body:tt)* })+) => {
        $(
            impl $crate::registry::Record for $name {
                fn describe(fields: &mut $crate::registry::FieldSet<Self>) {
                    $crate::record!(@fields fields, $name; $($body)*);
                }
            }
        )+
    };

    // ── Field list exhausted ─────────────────────────────────────────────
    (@fields $fs:ident, $name:ident;) => {};

    // ── Required nested record ───────────────────────────────────────────
    (@fields $fs:ident, $name:ident;
        #[nested] $field:ident : $child:ty $(, $($rest:tt)*)?
    ) => {
        $fs.nested::<$child, _>(stringify!($field), |record: &mut $name| &mut record.$field);
        $crate::record!(@fields $fs, $name; $($($rest)*)?);
    };

    // ── Optional nested record ───────────────────────────────────────────
    (@fields $fs:ident, $name:ident;
        #[nested(optional)] $field:ident : $child:ty $(, $($rest:tt)*)?
    ) => {
        $fs.nested_opt::<$child, _>(stringify!($field), |record: &mut $name| &mut record.$field);
        $crate::record!(@fields $fs, $name; $($($rest)*)?);
    };

    // ── Leaf field with a custom path ────────────────────────────────────
    (@fields $fs:ident, $name:ident;
        $field:ident as $path:literal $(, $($rest:tt)*)?
    ) => {
        $fs.field($path, |record: &mut $name| &mut record.$field);
        $crate::record!(@fields $fs, $name; $($($rest)*)?);
    };

    // ── Leaf field ───────────────────────────────────────────────────────
    (@fields $fs:ident, $name:ident;
        $field:ident $(, $($rest:tt)*)?
    ) => {
        $fs.field(stringify!($field), |record: &mut $name| &mut record.$field);
        $crate::record!(@fields $fs, $name; $($($rest)*)?);
    };
}
