//! Conditional gates
//!
//! Every rule builder owns one gate. `when` appends a predicate to it, and
//! the gate applies to every rule on that builder, including rules declared
//! before the `when` call. Predicates are frozen when configuration commits
//! and evaluated left to right, stopping at the first `false`.

use crate::foundation::ValidationContext;
use std::any::Any;
use std::sync::Arc;

/// A predicate over the located field slot.
///
/// Receives `None` when the field is unreachable.
pub(crate) type ErasedPredicate =
    Box<dyn Fn(&ValidationContext, Option<&dyn Any>) -> bool + Send + Sync>;

pub(crate) fn erase_predicate<P>(predicate: P) -> ErasedPredicate
where
    P: Fn(&ValidationContext, Option<&dyn Any>) -> bool + Send + Sync + 'static,
{
    Box::new(predicate)
}

/// Handle to a builder's gate inside a pending configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateId(pub(crate) usize);

/// A frozen conjunction of predicates.
#[derive(Clone, Default)]
pub(crate) struct Gate {
    predicates: Arc<[ErasedPredicate]>,
}

impl Gate {
    pub(crate) fn new(predicates: Vec<ErasedPredicate>) -> Self {
        Self {
            predicates: predicates.into(),
        }
    }

    pub(crate) fn allows(&self, ctx: &ValidationContext, slot: Option<&dyn Any>) -> bool {
        self.predicates.iter().all(|predicate| predicate(ctx, slot))
    }
}
