//! Field representations
//!
//! A field can be declared as a plain value (`String`, `i32`, `Vec<u8>`) or
//! as an optional one (`Option<String>`). Rules are written once against the
//! canonical form: [`Slot::canonical`] turns either representation into
//! [`Canonical::Present`] or [`Canonical::Absent`], and the rule body never
//! looks at the declared type again.

use std::any::Any;
use std::fmt::{self, Display};

// ============================================================================
// CANONICAL VIEW
// ============================================================================

/// A field value normalized to "present, here it is" or "absent".
#[derive(Debug)]
pub enum Canonical<'a, V: ?Sized> {
    /// The field holds a value.
    Present(&'a mut V),
    /// The field is an empty optional or sits under an absent optional record.
    Absent,
}

impl<'a, V: ?Sized> Canonical<'a, V> {
    /// Normalizes a located slot; `None` means the field was unreachable.
    pub fn of<S>(slot: Option<&'a mut S>) -> Self
    where
        S: Slot<Value = V>,
    {
        match slot {
            Some(slot) => slot.canonical(),
            None => Self::Absent,
        }
    }

    /// Returns true if the field holds no value.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Shared access to the value.
    pub fn get(&self) -> Option<&V> {
        match self {
            Self::Present(value) => Some(&**value),
            Self::Absent => None,
        }
    }

    /// Mutable access to the value.
    pub fn get_mut(&mut self) -> Option<&mut V> {
        match self {
            Self::Present(value) => Some(&mut **value),
            Self::Absent => None,
        }
    }

    /// Consumes the view, returning the value reference.
    pub fn into_inner(self) -> Option<&'a mut V> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// The value as a display trait object, for error reporting.
    pub fn display(&self) -> Option<&dyn Display>
    where
        V: Display + Sized,
    {
        self.get().map(|value| value as &dyn Display)
    }
}

// ============================================================================
// SLOT
// ============================================================================

/// A declared field type that rules can target.
///
/// Implemented for `String`, every primitive integer, and `Vec<T>`, each in a
/// required and an `Option` form. Custom bundles implement it for their own
/// value types.
pub trait Slot: Any + Send + Sync {
    /// The canonical value type rules operate on.
    type Value: ?Sized;

    /// Normalizes the field for mutation and inspection.
    fn canonical(&mut self) -> Canonical<'_, Self::Value>;

    /// Read-only view used by gate predicates.
    fn peek(&self) -> Option<&Self::Value>;
}

macro_rules! impl_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                type Value = $ty;

                fn canonical(&mut self) -> Canonical<'_, $ty> {
                    Canonical::Present(self)
                }

                fn peek(&self) -> Option<&$ty> {
                    Some(self)
                }
            }

            impl Slot for Option<$ty> {
                type Value = $ty;

                fn canonical(&mut self) -> Canonical<'_, $ty> {
                    match self {
                        Some(value) => Canonical::Present(value),
                        None => Canonical::Absent,
                    }
                }

                fn peek(&self) -> Option<&$ty> {
                    self.as_ref()
                }
            }
        )*
    };
}

impl_slot!(
    String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool
);

impl<T: Send + Sync + 'static> Slot for Vec<T> {
    type Value = Self;

    fn canonical(&mut self) -> Canonical<'_, Self> {
        Canonical::Present(self)
    }

    fn peek(&self) -> Option<&Self> {
        Some(self)
    }
}

impl<T: Send + Sync + 'static> Slot for Option<Vec<T>> {
    type Value = Vec<T>;

    fn canonical(&mut self) -> Canonical<'_, Vec<T>> {
        match self {
            Some(value) => Canonical::Present(value),
            None => Canonical::Absent,
        }
    }

    fn peek(&self) -> Option<&Vec<T>> {
        self.as_ref()
    }
}

// ============================================================================
// INTEGERS
// ============================================================================

/// Primitive integers, widened losslessly for bound comparisons.
pub trait Integer: Copy + Display + fmt::Debug + Send + Sync + 'static {
    /// Widens to `i128`, which holds every `i64` and `u64` value.
    fn widen(self) -> i128;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                #[inline]
                fn widen(self) -> i128 {
                    i128::from(self)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Integer for isize {
    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

impl Integer for usize {
    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }
}

/// A sequence of integers, as held by an integer-sequence field.
pub trait IntSequence: Send + Sync + 'static {
    /// Element type.
    type Elem: Integer;

    /// The elements in order.
    fn elements(&self) -> &[Self::Elem];
}

impl<T: Integer> IntSequence for Vec<T> {
    type Elem = T;

    fn elements(&self) -> &[T] {
        self
    }
}
