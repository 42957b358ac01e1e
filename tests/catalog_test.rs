// ABOUTME: Integration tests for the built-in 5K session catalog and JSON catalog loading
// ABOUTME: Checks per-phase counts, code uniqueness, shared global instance and segment validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_planner::{
    build_5k_catalog, global_catalog, ErrorCode, Extent, PhaseLabel, SessionCatalog, ZoneCode,
};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_built_in_catalog_counts() {
    common::init_test_logging();
    let catalog = build_5k_catalog();

    let expected = [
        (PhaseLabel::Base, 5),
        (PhaseLabel::EarlyQ, 3),
        (PhaseLabel::Threshold, 50),
        (PhaseLabel::Interval, 50),
        (PhaseLabel::Repetition, 50),
        (PhaseLabel::RaceSpecific, 4),
        (PhaseLabel::Taper, 4),
    ];
    for (phase, count) in expected {
        assert_eq!(catalog.templates(phase).len(), count, "{phase:?}");
    }
    assert_eq!(catalog.len(), 166);
}

#[test]
fn test_codes_are_unique_and_findable() {
    let catalog = build_5k_catalog();
    let mut seen = HashSet::new();

    for phase in PhaseLabel::CANONICAL_ORDER {
        for template in catalog.templates(phase) {
            assert!(seen.insert(template.code.clone()), "duplicate {}", template.code);
            assert_eq!(template.phase, phase);
            let found = catalog.find(&template.code).unwrap();
            assert!(Arc::ptr_eq(found, template));
        }
    }
}

#[test]
fn test_quality_phases_work_above_easy() {
    let catalog = build_5k_catalog();
    for phase in [
        PhaseLabel::Threshold,
        PhaseLabel::Interval,
        PhaseLabel::Repetition,
        PhaseLabel::RaceSpecific,
    ] {
        assert!(
            catalog.templates(phase).iter().all(|t| t.is_quality()),
            "{phase:?}"
        );
    }
    assert!(catalog
        .templates(PhaseLabel::Base)
        .iter()
        .any(|t| t.is_easy_only()));
}

#[test]
fn test_global_catalog_is_shared() {
    let first = global_catalog();
    let second = global_catalog();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), build_5k_catalog().len());
}

#[test]
fn test_catalog_from_json_files_templates_under_key() {
    let json = r#"{
        "Interval": [{
            "code": "I_CUSTOM",
            "name": "Custom intervals",
            "phase": "Base",
            "main_zones": ["I"],
            "warmup": [{"duration_min": 15, "zone": "E"}],
            "main": [{
                "kind": "interval",
                "reps": 4,
                "work": {"distance_m": 1000},
                "work_zone": "I",
                "recovery": {"duration_min": 2},
                "recovery_zone": "E"
            }],
            "base_distance_km": 9.0
        }]
    }"#;
    let catalog = SessionCatalog::from_json(json).unwrap();
    let template = catalog.find("I_CUSTOM").unwrap();

    assert_eq!(template.phase, PhaseLabel::Interval);
    assert_eq!(template.main_zones, vec![ZoneCode::Interval]);
    assert!((template.base_distance_km - 9.0).abs() < f64::EPSILON);
    assert_eq!(catalog.templates(PhaseLabel::Interval).len(), 1);
}

#[test]
fn test_catalog_from_json_rejects_malformed_input() {
    let err = SessionCatalog::from_json("{ not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCatalog);

    let err = SessionCatalog::from_json(r#"{"Base": [{"code": "X"}]}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCatalog);
}

#[test]
fn test_extent_requires_exactly_one_bound() {
    assert_eq!(
        Extent::from_parts(None, None).unwrap_err().code,
        ErrorCode::MissingSegmentBound
    );
    assert_eq!(
        Extent::from_parts(Some(400.0), Some(2.0)).unwrap_err().code,
        ErrorCode::MissingSegmentBound
    );
    assert_eq!(
        Extent::from_parts(Some(400.0), None).unwrap(),
        Extent::meters(400.0)
    );
    assert_eq!(
        Extent::from_parts(None, Some(2.0)).unwrap(),
        Extent::minutes(2.0)
    );
}
