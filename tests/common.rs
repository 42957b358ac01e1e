// ABOUTME: Shared test utilities and fixtures for planner integration tests
// ABOUTME: Provides quiet logging setup, athlete profiles, small catalogs and plan requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls
)]
//! Shared test utilities for `pierre_planner`
//!
//! This module provides common setup functions to reduce duplication
//! across integration tests.

use pierre_planner::{
    AthleteProfile, ContinuousSegment, Extent, IntervalBlock, PhaseLabel, PlanRequest,
    SessionCatalog, SessionTemplate, ZoneCode,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating-point distance comparisons
pub const KM_TOLERANCE: f64 = 1e-6;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG selects the level; WARN keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Athlete training `frequency` days a week on the default 30-50 km range
pub fn test_athlete(frequency: u8) -> AthleteProfile {
    AthleteProfile::new("Test Runner", frequency).unwrap()
}

/// Plan request for a 20:00 5K, four sessions a week, eight weeks
pub fn standard_request() -> PlanRequest {
    PlanRequest::new("Test Runner", 5.0, 20.0, 4)
}

/// Easy template with a fixed nominal distance
pub fn easy_template(code: &str, km: f64) -> SessionTemplate {
    SessionTemplate::new(code, code, PhaseLabel::Base, vec![ZoneCode::Easy])
        .main(vec![ContinuousSegment::km(km, ZoneCode::Easy).into()])
        .base_distance_km(km)
}

/// Quality template for `phase` working in `zone`
pub fn quality_template(code: &str, phase: PhaseLabel, zone: ZoneCode) -> SessionTemplate {
    SessionTemplate::new(code, code, phase, vec![zone])
        .warmup(vec![ContinuousSegment::minutes(15.0, ZoneCode::Easy)])
        .main(vec![IntervalBlock::new(
            5,
            Extent::meters(1000.0),
            zone,
            Extent::minutes(2.0),
            ZoneCode::Easy,
        )
        .into()])
        .cooldown(vec![ContinuousSegment::minutes(10.0, ZoneCode::Easy)])
        .with_estimated_distance()
}

/// Small catalog: two easy runs plus two quality sessions for each non-Base phase
pub fn small_catalog() -> SessionCatalog {
    let mut catalog = SessionCatalog::new();
    catalog.insert(easy_template("E1", 8.0));
    catalog.insert(easy_template("E2", 10.0));

    let phases = [
        (PhaseLabel::EarlyQ, ZoneCode::Threshold, "EQ"),
        (PhaseLabel::Threshold, ZoneCode::Threshold, "T"),
        (PhaseLabel::Interval, ZoneCode::Interval, "I"),
        (PhaseLabel::Repetition, ZoneCode::Repetition, "R"),
        (PhaseLabel::RaceSpecific, ZoneCode::Interval, "RS"),
        (PhaseLabel::Taper, ZoneCode::Interval, "TP"),
    ];
    for (phase, zone, prefix) in phases {
        catalog.insert(quality_template(&format!("{prefix}1"), phase, zone));
        catalog.insert(quality_template(&format!("{prefix}2"), phase, zone));
    }
    catalog
}
