//! Benchmarks for rule execution
//!
//! Measures:
//! - Configuration cost for a small record
//! - Validation of a passing and a failing record
//! - Gate overhead when every rule is skipped

use criterion::{Criterion, criterion_group, criterion_main};
use rulebook::prelude::*;
use std::hint::black_box;

struct Signup {
    email: String,
    nickname: Option<String>,
    age: u8,
    scores: Vec<i32>,
}

rulebook::record! {
    Signup { email, nickname, age, scores }
}

fn declare(rules: &mut Rules<'_, Signup>) -> Result<(), ConfigError> {
    rules
        .string("email")?
        .trim()
        .required()
        .max_len(64)
        .regexp(Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid pattern"));
    rules.string_opt("nickname")?.min_len(3).when(|_, nick| nick.is_some());
    rules.int::<u8>("age")?.min(18).max(120);
    rules.int_slice::<i32>("scores")?.required().min(0).max(100);
    Ok(())
}

fn gated(rules: &mut Rules<'_, Signup>) -> Result<(), ConfigError> {
    rules
        .string("email")?
        .required()
        .max_len(64)
        .when(|ctx, _| ctx.contains("strict"));
    rules
        .int::<u8>("age")?
        .min(18)
        .when(|ctx, _| ctx.contains("strict"));
    Ok(())
}

fn passing() -> Signup {
    Signup {
        email: "ann@example.com".into(),
        nickname: Some("annie".into()),
        age: 30,
        scores: vec![10, 55, 99],
    }
}

fn failing() -> Signup {
    Signup {
        email: "  not-an-email ".into(),
        nickname: Some("a".into()),
        age: 12,
        scores: vec![10, -5, 101],
    }
}

fn configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("rulebook/configure");

    group.bench_function("signup", |b| {
        b.iter(|| {
            let mut validator = Validator::new();
            validator.configure::<Signup>(declare).expect("configures");
            black_box(validator)
        });
    });

    group.finish();
}

fn validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rulebook/validate");
    let ctx = ValidationContext::new();

    let mut validator = Validator::new();
    validator.configure::<Signup>(declare).expect("configures");

    group.bench_function("passing", |b| {
        b.iter(|| {
            let mut value = passing();
            black_box(validator.validate(&ctx, &mut value))
        });
    });

    group.bench_function("failing", |b| {
        b.iter(|| {
            let mut value = failing();
            black_box(validator.validate(&ctx, &mut value))
        });
    });

    let mut skipped = Validator::new();
    skipped.configure::<Signup>(gated).expect("configures");

    group.bench_function("gated_off", |b| {
        let mut value = failing();
        b.iter(|| black_box(skipped.validate(&ctx, &mut value)));
    });

    group.finish();
}

criterion_group!(benches, configuration, validation);
criterion_main!(benches);
