//! Conditional gates (`when`) across families.

use pretty_assertions::assert_eq;
use rulebook::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Contact {
    kind: String,
    phone: Option<String>,
    retries: i32,
    extra: Option<Extra>,
}

struct Extra {
    note: String,
}

rulebook::record! {
    Extra { note }
    Contact {
        kind,
        phone,
        retries,
        #[nested(optional)] extra: Extra,
    }
}

fn contact(kind: &str, phone: Option<&str>) -> Contact {
    Contact {
        kind: kind.to_owned(),
        phone: phone.map(str::to_owned),
        retries: 0,
        extra: None,
    }
}

fn validate(
    value: &mut Contact,
    configure: impl FnOnce(&mut Rules<'_, Contact>) -> Result<(), ConfigError>,
) -> Vec<ValidationError> {
    let mut validator = Validator::new();
    validator.configure::<Contact>(configure).expect("configures");
    validator.validate(&ValidationContext::new(), value)
}

fn international_phone(rules: &mut Rules<'_, Contact>) -> Result<(), ConfigError> {
    rules
        .string_opt("phone")?
        .required()
        .when(|_, phone| phone.is_some_and(|p| p.starts_with('+')))
        .min_len(20);
    Ok(())
}

#[test]
fn gate_covers_rules_declared_before_and_after() {
    let configure = international_phone;

    let mut skipped = contact("mail", Some("555"));
    assert!(validate(&mut skipped, configure).is_empty());

    let mut absent = contact("mail", None);
    assert!(validate(&mut absent, configure).is_empty());

    let mut checked = contact("mail", Some("+4712345678"));
    let errors = validate(&mut checked, configure);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, rulebook::rules::string::keys::MIN_LEN);
}

#[test]
fn predicates_run_in_order_and_short_circuit() {
    let later_calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&later_calls);

    let mut value = contact("", None);
    let errors = validate(&mut value, move |rules| {
        rules
            .string("kind")?
            .required()
            .when(|_, kind| kind.is_some_and(|k| !k.is_empty()))
            .when(move |_, _| {
                counted.fetch_add(1, Ordering::SeqCst);
                true
            });
        Ok(())
    });

    assert!(errors.is_empty());
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn all_predicates_must_hold() {
    let mut value = contact("x", None);
    let errors = validate(&mut value, |rules| {
        rules
            .int::<i32>("retries")?
            .min(1)
            .when(|_, _| true)
            .when(|_, retries| retries.is_some_and(|r| *r > 5));
        Ok(())
    });
    assert!(errors.is_empty());
}

#[test]
fn gates_do_not_leak_between_builders() {
    let mut value = contact("", None);
    let errors = validate(&mut value, |rules| {
        rules.string("kind")?.required().when(|_, _| false);
        rules.string("kind")?.required();
        Ok(())
    });
    assert_eq!(errors.len(), 1);
}

fn never(_: &ValidationContext, _: Option<&String>) -> bool {
    false
}

#[test]
fn when_opt_none_leaves_gate_unchanged() {
    type Predicate = fn(&ValidationContext, Option<&String>) -> bool;

    let mut value = contact("", None);
    let errors = validate(&mut value, |rules| {
        rules.string("kind")?.required().when_opt(None::<Predicate>);
        rules.string("kind")?.required().when_opt(Some(never));
        Ok(())
    });
    assert_eq!(errors.len(), 1);
}

fn kind_when_strict(rules: &mut Rules<'_, Contact>) -> Result<(), ConfigError> {
    rules
        .string("kind")?
        .required()
        .when(|ctx, _| ctx.get::<bool>("strict").copied().unwrap_or(false));
    Ok(())
}

#[test]
fn predicate_reads_context() {
    let mut validator = Validator::new();
    validator.configure::<Contact>(kind_when_strict).expect("configures");

    let mut value = contact("", None);
    let lenient = validator.validate(&ValidationContext::new(), &mut value);
    assert!(lenient.is_empty());

    let strict = ValidationContext::builder().with("strict", true).build();
    assert_eq!(validator.validate(&strict, &mut value).len(), 1);
}

#[test]
fn unreachable_field_is_none_to_predicates() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&seen);

    let mut value = contact("x", None);
    let errors = validate(&mut value, move |rules| {
        rules.string("extra.note")?.required().when(move |_, note| {
            if note.is_none() {
                counted.fetch_add(1, Ordering::SeqCst);
            }
            true
        });
        Ok(())
    });

    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), Some("extra.note"));
}

#[test]
fn gate_sees_trimmed_value() {
    let mut value = contact("  ", None);
    let errors = validate(&mut value, |rules| {
        rules.string("kind")?.trim();
        rules
            .string("kind")?
            .min_len(5)
            .when(|_, kind| kind.is_some_and(|k| k.len() == 2));
        Ok(())
    });
    assert!(errors.is_empty());
    assert_eq!(value.kind, "");
}
