//! Integer-sequence rule behaviour through the public API.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rulebook::prelude::*;
use rulebook::rules::int_slice::keys;

struct Survey {
    scores: Vec<u8>,
    offsets: Option<Vec<i64>>,
}

rulebook::record! {
    Survey { scores, offsets }
}

fn validate(
    survey: &mut Survey,
    configure: impl FnOnce(&mut Rules<'_, Survey>) -> Result<(), ConfigError>,
) -> Vec<ValidationError> {
    let mut validator = Validator::new();
    validator.configure::<Survey>(configure).expect("configures");
    validator.validate(&ValidationContext::new(), survey)
}

#[rstest]
#[case(vec![], None, vec![keys::REQUIRED, keys::REQUIRED])]
#[case(vec![1], Some(vec![]), vec![keys::REQUIRED])]
#[case(vec![], Some(vec![0]), vec![keys::REQUIRED])]
#[case(vec![1], Some(vec![-1]), vec![])]
fn required_means_non_empty(
    #[case] scores: Vec<u8>,
    #[case] offsets: Option<Vec<i64>>,
    #[case] expected: Vec<&str>,
) {
    let mut survey = Survey { scores, offsets };
    let errors = validate(&mut survey, |rules| {
        rules.int_slice::<u8>("scores")?.required();
        rules.int_slice_opt::<i64>("offsets")?.required();
        Ok(())
    });

    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, expected);
}

#[test]
fn bounds_report_first_offending_element() {
    let mut survey = Survey {
        scores: vec![3, 11, 12, 0],
        offsets: None,
    };
    let errors = validate(&mut survey, |rules| {
        rules.int_slice::<u8>("scores")?.min(1).max(10);
        Ok(())
    });

    assert_eq!(errors.len(), 2);

    let low = &errors[0];
    assert_eq!(low.code, keys::MIN);
    assert_eq!(low.value.as_deref(), Some("0"));
    assert_eq!(low.param("index"), Some("3"));
    assert_eq!(low.message, "validation:int_slice:Each element cannot be less than 1");

    let high = &errors[1];
    assert_eq!(high.code, keys::MAX);
    assert_eq!(high.value.as_deref(), Some("11"));
    assert_eq!(high.param("index"), Some("1"));
    assert_eq!(high.param("max"), Some("10"));
}

#[test]
fn empty_sequence_passes_bounds() {
    let mut survey = Survey {
        scores: Vec::new(),
        offsets: Some(Vec::new()),
    };
    let errors = validate(&mut survey, |rules| {
        rules.int_slice::<u8>("scores")?.min(1).max(2);
        rules.int_slice_opt::<i64>("offsets")?.min(1).max(2);
        Ok(())
    });
    assert!(errors.is_empty());
}

#[test]
fn absent_sequence_fails_bounds() {
    let mut survey = Survey {
        scores: vec![1],
        offsets: None,
    };
    let errors = validate(&mut survey, |rules| {
        rules.int_slice_opt::<i64>("offsets")?.min(-10).max(10);
        Ok(())
    });

    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, [keys::MIN, keys::MAX]);
    assert!(errors.iter().all(|e| e.param("index").is_none()));
}

#[test]
fn negative_bounds_on_signed_elements() {
    let mut survey = Survey {
        scores: vec![1],
        offsets: Some(vec![-5, -20, 4]),
    };
    let errors = validate(&mut survey, |rules| {
        rules.int_slice_opt::<i64>("offsets")?.min(-10);
        Ok(())
    });

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].value.as_deref(), Some("-20"));
    assert_eq!(errors[0].param("min"), Some("-10"));
}

#[test]
fn element_type_must_match_declaration() {
    let mut validator = Validator::new();
    let err = validator
        .configure::<Survey>(|rules| {
            rules.int_slice::<u16>("scores")?.required();
            Ok(())
        })
        .unwrap_err();
    assert!(err.is_field_not_found());
    assert!(!validator.is_configured::<Survey>());
}

#[test]
fn max_names_the_offending_element() {
    let mut survey = Survey {
        scores: vec![1, 50],
        offsets: None,
    };
    let errors = validate(&mut survey, |rules| {
        rules.int_slice::<u8>("scores")?.max(10);
        Ok(())
    });

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].value.as_deref(), Some("50"));
}
