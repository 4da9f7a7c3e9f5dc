//! Foundation types shared by every rule family
//!
//! - [`ValidationError`] / [`ValidationErrors`]: what a failing rule reports
//! - [`ValidationContext`]: per-call locale and typed values
//! - [`Slot`] / [`Canonical`]: how declared field types map onto the single
//!   shape rules are written against

mod context;
mod error;
mod slot;

pub use context::{ValidationContext, ValidationContextBuilder};
pub use error::{ValidationError, ValidationErrors};
pub use slot::{Canonical, IntSequence, Integer, Slot};
