//! Committed rules, keyed by record type

use crate::registry::RecordInfo;
use crate::rules::CompiledRule;
use std::any::TypeId;
use std::collections::HashMap;

pub(crate) struct RecordRules {
    pub(crate) record: RecordInfo,
    pub(crate) rules: Vec<CompiledRule>,
}

#[derive(Default)]
pub(crate) struct RuleStore {
    records: HashMap<TypeId, RecordRules>,
}

impl RuleStore {
    /// Appends `rules` after any already committed for `record`.
    ///
    /// Returns the record's new rule count.
    pub(crate) fn extend(&mut self, record: RecordInfo, rules: Vec<CompiledRule>) -> usize {
        let entry = self.records.entry(record.id()).or_insert_with(|| RecordRules {
            record,
            rules: Vec::new(),
        });
        entry.rules.extend(rules);
        entry.rules.len()
    }

    pub(crate) fn get(&self, id: TypeId) -> Option<&RecordRules> {
        self.records.get(&id)
    }

    pub(crate) fn rule_count(&self, id: TypeId) -> usize {
        self.records.get(&id).map_or(0, |entry| entry.rules.len())
    }

    pub(crate) fn records(&self) -> usize {
        self.records.len()
    }
}
