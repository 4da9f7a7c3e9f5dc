//! Third-party rule families plugged in through `Bundle`.

use pretty_assertions::assert_eq;
use rulebook::prelude::*;
use rulebook::rules::{Bundle, BundleDeps, RuleBuilder};

// ============================================================================
// A FLAG FAMILY FOR bool FIELDS
// ============================================================================

const MUST_BE_SET: &str = "flags:Must be set";
const INVALID_FLAG: &str = "flags:Invalid flag";

struct Flags<'c> {
    deps: BundleDeps<'c>,
}

impl<'c> Bundle<'c> for Flags<'c> {
    fn new(deps: BundleDeps<'c>) -> Self {
        Self { deps }
    }
}

impl<'c> Flags<'c> {
    fn flag(self, path: &str) -> Result<FlagBuilder<'c, bool>, ConfigError> {
        self.builder(path)
    }

    fn flag_opt(self, path: &str) -> Result<FlagBuilder<'c, Option<bool>>, ConfigError> {
        self.builder(path)
    }

    fn builder<S: Slot<Value = bool>>(self, path: &str) -> Result<FlagBuilder<'c, S>, ConfigError> {
        let field = self.deps.resolve::<S>(path)?;
        Ok(FlagBuilder {
            core: RuleBuilder::new(self.deps, field, INVALID_FLAG),
        })
    }
}

impl Flags<'_> {
    /// Installs a flag rule against a field declared as text.
    fn misapplied(mut self, path: &str, gated_off: bool) -> Result<(), ConfigError> {
        let field = self.deps.resolve::<String>(path)?;
        let gate = self.deps.open_gate();
        if gated_off {
            self.deps
                .gate::<bool, _>(gate, |_, flag: Option<&bool>| flag.is_some());
        }
        self.deps
            .append::<bool, _>(&field, gate, INVALID_FLAG, |_, _, _| Vec::new());
        Ok(())
    }
}

struct FlagBuilder<'c, S: Slot<Value = bool>> {
    core: RuleBuilder<'c, S>,
}

impl<'c, S: Slot<Value = bool>> FieldRules<'c> for FlagBuilder<'c, S> {
    type Slot = S;

    fn core(&mut self) -> &mut RuleBuilder<'c, S> {
        &mut self.core
    }

    fn required(mut self) -> Self {
        self.core.check(|ctx, helper, value| {
            value
                .is_absent()
                .then(|| helper.error_t(ctx, None, MUST_BE_SET, &[]))
        });
        self
    }
}

impl<S: Slot<Value = bool>> FlagBuilder<'_, S> {
    fn set(mut self) -> Self {
        self.core.check(|ctx, helper, value| {
            (value.get() != Some(&true)).then(|| helper.error_t(ctx, value.display(), MUST_BE_SET, &[]))
        });
        self
    }
}

struct Terms {
    accepted: bool,
    newsletter: Option<bool>,
    name: String,
}

rulebook::record! {
    Terms { accepted, newsletter, name }
}

fn terms(accepted: bool, newsletter: Option<bool>) -> Terms {
    Terms {
        accepted,
        newsletter,
        name: "ann".into(),
    }
}

#[test]
fn custom_family_runs_beside_built_ins() {
    let mut validator = Validator::new();
    validator
        .configure::<Terms>(|rules| {
            rules.string("name")?.max_len(2);
            let flags: Flags<'_> = rules.bundle();
            flags.flag("accepted")?.set();
            rules.bundle::<Flags<'_>>().flag_opt("newsletter")?.required();
            Ok(())
        })
        .expect("configures");

    let errors = validator.validate(&ValidationContext::new(), &mut terms(false, None));
    let fields: Vec<Option<&str>> = errors.iter().map(ValidationError::field).collect();
    assert_eq!(fields, [Some("name"), Some("accepted"), Some("newsletter")]);
    assert_eq!(errors[1].code, MUST_BE_SET);
    assert_eq!(errors[1].value.as_deref(), Some("false"));

    let errors = validator.validate(&ValidationContext::new(), &mut terms(true, Some(false)));
    assert_eq!(errors.len(), 1);
}

#[test]
fn custom_family_gets_gates_and_custom_rules() {
    let mut validator = Validator::new();
    validator
        .configure::<Terms>(|rules| {
            rules
                .bundle::<Flags<'_>>()
                .flag_opt("newsletter")?
                .set()
                .when(|_, subscribed| subscribed.is_some())
                .custom(|ctx, helper, subscribed| {
                    if subscribed.is_none() {
                        *subscribed = Some(false);
                        return vec![helper.error_t(ctx, None, "flags:Defaulted", &[])];
                    }
                    Vec::new()
                });
            Ok(())
        })
        .expect("configures");

    let mut value = terms(true, None);
    let errors = validator.validate(&ValidationContext::new(), &mut value);
    assert!(errors.is_empty(), "gate skips both rules while absent: {errors:?}");
    assert_eq!(value.newsletter, None);

    value.newsletter = Some(false);
    let errors = validator.validate(&ValidationContext::new(), &mut value);
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, [MUST_BE_SET]);
}

#[test]
fn custom_family_resolves_representations_strictly() {
    let mut validator = Validator::new();
    let err = validator
        .configure::<Terms>(|rules| {
            rules.bundle::<Flags<'_>>().flag("newsletter")?.set();
            Ok(())
        })
        .unwrap_err();
    assert!(err.is_field_not_found());
}

#[test]
fn bundle_sees_configuration_state() {
    let mut validator = Validator::new();
    validator
        .configure::<Terms>(|rules| {
            assert_eq!(rules.fields().len(), 3);
            assert_eq!(rules.record().name(), std::any::type_name::<Terms>());

            rules.string("name")?.required().max_len(10);
            let flags: Flags<'_> = rules.bundle();
            assert_eq!(flags.deps.staged(), 2);
            Ok(())
        })
        .expect("configures");
    assert_eq!(validator.rule_count::<Terms>(), 2);
}

#[test]
fn bundle_can_reject_arguments() {
    let mut validator = Validator::new();
    let err = validator
        .configure::<Terms>(|rules| {
            let flags: Flags<'_> = rules.bundle();
            let path = "accepted";
            if flags.deps.fields().get(path).is_some() {
                return Err(ConfigError::invalid_rule(path, "flags cannot be configured twice"));
            }
            Ok(())
        })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid rule for `accepted`: flags cannot be configured twice"
    );
    assert!(!validator.is_configured::<Terms>());
}

#[test]
fn mismatched_representation_reports_invalid_once() {
    let mut validator = Validator::new();
    validator
        .configure::<Terms>(|rules| {
            rules.bundle::<Flags<'_>>().misapplied("name", false)?;
            rules.bundle::<Flags<'_>>().flag("accepted")?.set();
            Ok(())
        })
        .expect("configures");

    let errors = validator.validate(&ValidationContext::new(), &mut terms(false, None));
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, [INVALID_FLAG, MUST_BE_SET]);
    assert_eq!(errors[0].field(), Some("name"));
    assert_eq!(errors[0].value, None);
}

#[test]
fn closed_gate_skips_representation_check() {
    let mut validator = Validator::new();
    validator
        .configure::<Terms>(|rules| {
            rules.bundle::<Flags<'_>>().misapplied("name", true)?;
            rules.bundle::<Flags<'_>>().flag("accepted")?.set();
            Ok(())
        })
        .expect("configures");

    let errors = validator.validate(&ValidationContext::new(), &mut terms(false, None));
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, [MUST_BE_SET]);
}
