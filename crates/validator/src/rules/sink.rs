//! Staging area for rules of one pending configuration

use super::gate::{ErasedPredicate, Gate, GateId};
use crate::foundation::{ValidationContext, ValidationError};
use crate::helper::FieldHelper;
use crate::registry::FieldDescriptor;
use std::any::Any;
use std::sync::Arc;

/// A rule with its representation erased.
///
/// Receives the located slot (`None` when unreachable) and the rule's gate;
/// the typed wrapper decides where the gate is evaluated.
pub(crate) type ErasedCheck = Box<
    dyn Fn(&ValidationContext, &FieldHelper<'_>, &Gate, Option<&mut dyn Any>) -> Vec<ValidationError>
        + Send
        + Sync,
>;

pub(crate) fn erase_check<F>(check: F) -> ErasedCheck
where
    F: Fn(&ValidationContext, &FieldHelper<'_>, &Gate, Option<&mut dyn Any>) -> Vec<ValidationError>
        + Send
        + Sync
        + 'static,
{
    Box::new(check)
}

struct StagedRule {
    field: Arc<FieldDescriptor>,
    gate: GateId,
    check: ErasedCheck,
}

/// A committed rule.
pub(crate) struct CompiledRule {
    pub(crate) field: Arc<FieldDescriptor>,
    pub(crate) gate: Gate,
    pub(crate) check: ErasedCheck,
}

/// Collects rules and gate predicates until the configuration commits.
#[derive(Default)]
pub(crate) struct RuleSink {
    rules: Vec<StagedRule>,
    gates: Vec<Vec<ErasedPredicate>>,
}

impl RuleSink {
    pub(crate) fn open_gate(&mut self) -> GateId {
        self.gates.push(Vec::new());
        GateId(self.gates.len() - 1)
    }

    pub(crate) fn add_predicate(&mut self, gate: GateId, predicate: ErasedPredicate) {
        if let Some(predicates) = self.gates.get_mut(gate.0) {
            predicates.push(predicate);
        }
    }

    pub(crate) fn append(&mut self, field: Arc<FieldDescriptor>, gate: GateId, check: ErasedCheck) {
        self.rules.push(StagedRule { field, gate, check });
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }

    /// Freezes every gate and pairs each rule with its gate.
    pub(crate) fn compile(self) -> Vec<CompiledRule> {
        let gates: Vec<Gate> = self.gates.into_iter().map(Gate::new).collect();
        self.rules
            .into_iter()
            .map(|rule| CompiledRule {
                field: rule.field,
                gate: gates.get(rule.gate.0).cloned().unwrap_or_default(),
                check: rule.check,
            })
            .collect()
    }
}
