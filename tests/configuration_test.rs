// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading generator configuration from JSON, and building by catalog name.

mod common;

use common::prefix;
use lazy_sequences::{
    ConfigurationError, Kolakoski, KolakoskiPattern, LinearRecurrence, Producer, RecurrenceSpec,
    SequenceError, SequenceKind, SequenceOptions,
};

#[test]
fn test_recurrence_spec_from_json() {
    let spec: RecurrenceSpec =
        serde_json::from_str(r#"{"coefficients": [1, 1, 1], "initial": [1, 0, 0]}"#).unwrap();
    assert_eq!(spec.order(), 3);
    let mut tribonacci = LinearRecurrence::new(spec).unwrap();
    assert_eq!(prefix(&mut tribonacci, 8), vec![1, 1, 2, 4, 7, 13, 24, 44]);
}

#[test]
fn test_recurrence_spec_json_round_trip() {
    let json = serde_json::to_string(&RecurrenceSpec::lucas()).unwrap();
    assert_eq!(json, r#"{"coefficients":[1,1],"initial":[2,-1]}"#);
    let back: RecurrenceSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RecurrenceSpec::lucas());
}

#[test]
fn test_invalid_recurrence_spec_rejected() {
    let err = serde_json::from_str::<RecurrenceSpec>(r#"{"coefficients": [1, 1], "initial": [1]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("2 coefficients but 1 initial terms"), "{}", err);

    let err = serde_json::from_str::<RecurrenceSpec>(r#"{"coefficients": [], "initial": []}"#)
        .unwrap_err();
    assert!(err.to_string().contains("order must be at least 1"), "{}", err);
}

#[test]
fn test_kolakoski_pattern_from_json() {
    let pattern: KolakoskiPattern = serde_json::from_str("[1, 3]").unwrap();
    assert_eq!(serde_json::to_string(&pattern).unwrap(), "[1,3]");
    let mut k = Kolakoski::with_pattern(pattern);
    assert_eq!(prefix(&mut k, 8), vec![1, 3, 3, 3, 1, 1, 1, 3]);

    assert!(serde_json::from_str::<KolakoskiPattern>("[]").is_err());
    assert!(serde_json::from_str::<KolakoskiPattern>("[2, 0]").is_err());
}

#[test]
fn test_catalog_builds_by_name() {
    let options = SequenceOptions {
        jump: 10,
        ..SequenceOptions::default()
    };
    let kind: SequenceKind = "linear-recurrence".parse().unwrap();
    let mut fib = kind.build(&options).unwrap();
    assert_eq!(prefix(&mut fib, 3), vec!["89", "144", "233"]);

    let mut tm = SequenceKind::ThueMorse.build(&options).unwrap();
    assert_eq!(prefix(&mut tm, 8), vec!["0", "1", "1", "0", "1", "0", "0", "1"]);
}

#[test]
fn test_catalog_reports_configuration_errors() {
    let options = SequenceOptions {
        seed: String::from("12a"),
        ..SequenceOptions::default()
    };
    let err = SequenceKind::LookAndSay.build(&options).err().unwrap();
    assert_eq!(
        err,
        SequenceError::Configuration(ConfigurationError::InvalidSeed {
            seed: String::from("12a")
        })
    );
}

#[test]
fn test_overflow_surfaces_through_catalog() {
    let mut catalan = SequenceKind::Catalan
        .build(&SequenceOptions::default())
        .unwrap();
    let terms = prefix(&mut catalan, 37);
    assert_eq!(terms[36], "11959798385860453492");
    assert!(matches!(
        catalan.next_term(),
        Err(SequenceError::Overflow { index: 37, .. })
    ));
}
