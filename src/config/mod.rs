// ABOUTME: Configuration module for plan generation settings
// ABOUTME: Environment-driven defaults for plan length, volume range and VDOT estimation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration for the planner.
//!
//! - **Planner**: plan length, weekly volume range and estimation algorithm,
//!   read from `PIERRE_PLAN_*` environment variables

/// Plan-generation configuration
pub mod planner;

pub use planner::PlannerConfig;
pub use planner_core::ConfigError;
