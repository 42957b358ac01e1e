// ABOUTME: Integration tests for environment-driven planner and logging configuration
// ABOUTME: Validates defaults, lenient and strict parsing, and range validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_planner::config::planner::{
    INITIAL_VOLUME_VAR, PEAK_VOLUME_VAR, TOTAL_WEEKS_VAR, VDOT_ALGORITHM_VAR,
};
use pierre_planner::logging::{LogFormat, LoggingConfig};
use pierre_planner::{ConfigError, PlanRequest, PlannerConfig, VdotAlgorithm};
use serial_test::serial;
use std::env;

const PLAN_VARS: [&str; 4] = [
    TOTAL_WEEKS_VAR,
    INITIAL_VOLUME_VAR,
    PEAK_VOLUME_VAR,
    VDOT_ALGORITHM_VAR,
];

fn clear_plan_vars() {
    for var in PLAN_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_variables_uses_defaults() {
    common::init_test_logging();
    clear_plan_vars();

    let config = PlannerConfig::from_env();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(PlannerConfig::try_from_env().unwrap(), config);
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_plan_vars();
    env::set_var(TOTAL_WEEKS_VAR, "12");
    env::set_var(INITIAL_VOLUME_VAR, "25.5");
    env::set_var(PEAK_VOLUME_VAR, "55");
    env::set_var(VDOT_ALGORITHM_VAR, "Riegel");

    let config = PlannerConfig::try_from_env().unwrap();
    assert_eq!(config.total_weeks, 12);
    assert!((config.initial_weekly_volume_km - 25.5).abs() < f64::EPSILON);
    assert!((config.peak_weekly_volume_km - 55.0).abs() < f64::EPSILON);
    assert!(matches!(config.vdot_algorithm, VdotAlgorithm::Riegel { .. }));
    assert_eq!(PlannerConfig::from_env(), config);

    clear_plan_vars();
}

#[test]
#[serial]
fn test_unparseable_values_strict_and_lenient() {
    clear_plan_vars();
    env::set_var(TOTAL_WEEKS_VAR, "ten");
    env::set_var(VDOT_ALGORITHM_VAR, "jack_daniels");

    let lenient = PlannerConfig::from_env();
    assert_eq!(lenient, PlannerConfig::default());

    let err = PlannerConfig::try_from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains(TOTAL_WEEKS_VAR)));

    env::remove_var(TOTAL_WEEKS_VAR);
    let err = PlannerConfig::try_from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains(VDOT_ALGORITHM_VAR)));

    clear_plan_vars();
}

#[test]
#[serial]
fn test_strict_load_validates_ranges() {
    clear_plan_vars();
    env::set_var(INITIAL_VOLUME_VAR, "60");
    env::set_var(PEAK_VOLUME_VAR, "40");
    assert!(matches!(
        PlannerConfig::try_from_env(),
        Err(ConfigError::InvalidRange(_))
    ));

    env::set_var(INITIAL_VOLUME_VAR, "-5");
    assert!(matches!(
        PlannerConfig::try_from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    env::set_var(INITIAL_VOLUME_VAR, "30");
    env::set_var(TOTAL_WEEKS_VAR, "0");
    assert!(matches!(
        PlannerConfig::try_from_env(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_plan_vars();
}

#[test]
fn test_request_from_config() {
    let config = PlannerConfig {
        total_weeks: 10,
        initial_weekly_volume_km: 20.0,
        peak_weekly_volume_km: 35.0,
        vdot_algorithm: VdotAlgorithm::Riegel { exponent: 1.06 },
    };
    let request = PlanRequest::from_config(&config, "Runner", 10.0, 42.0, 5);

    assert_eq!(request.athlete_name, "Runner");
    assert_eq!(request.total_weeks, 10);
    assert_eq!(request.frequency_per_week, 5);
    assert!((request.initial_weekly_volume_km - 20.0).abs() < f64::EPSILON);
    assert!((request.peak_weekly_volume_km - 35.0).abs() < f64::EPSILON);
    assert_eq!(request.vdot_algorithm, config.vdot_algorithm);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::remove_var("LOG_INCLUDE_THREAD");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.service_name, "pierre-planner");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
}
