// ABOUTME: Main library entry point for the Pierre 5K training-plan generator
// ABOUTME: Exposes the built-in session catalog, plan building, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Planner
//!
//! Generates periodized 5K running plans from a recent race result using
//! Daniels-style pace zones.
//!
//! ## Features
//!
//! - **Zones**: five pace zones (E, M, T, I, R) from a single VDOT value
//! - **Phases**: proportional allocation of weeks over seven training phases
//! - **Sessions**: deterministic rotation through a 166-template catalog
//! - **Volume**: ramp-and-taper weekly distance with per-session scaling
//! - **Feedback**: adherence-driven adjustment of future weekly volume
//!
//! ## Architecture
//!
//! - **`planner_core`**: errors, constants and data models
//! - **`planner_intelligence`**: the pure planning pipeline
//! - **catalog**: the built-in 5K session library
//! - **plan**: the plan-build entry point tying the pipeline together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_planner::plan::{generate_5k_plan_from_race, PlanRequest};
//! use pierre_planner::PlanResult;
//!
//! fn main() -> PlanResult<()> {
//!     // 5K in 22:30, four sessions a week
//!     let request = PlanRequest::new("Ana", 5.0, 22.5, 4);
//!     let plan = generate_5k_plan_from_race(&request)?;
//!
//!     for workout in &plan.workouts {
//!         println!("W{} {} {}", workout.week, workout.weekday_name, workout.session_name);
//!     }
//!     Ok(())
//! }
//! ```

/// Built-in 5K session catalog
pub mod catalog;

/// Environment-driven planner configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Plan-build entry point
pub mod plan;

pub use planner_core::errors::{ConfigError, ErrorCode, PlanError, PlanResult};
pub use planner_core::models::{
    AdherenceBucket, AthleteProfile, CompletedWorkoutFeedback, ContinuousSegment, Extent,
    FeedbackAdjustment, IntervalBlock, PhaseLabel, PhaseSequence, ScheduledSession, Segment,
    SessionCatalog, SessionTemplate, WeeklyFeedback, WeeklyPlanEntry, Workout, ZoneCode,
};
pub use planner_intelligence::{
    format_pace, parse_pace, AnnotatedSession, FeedbackAdjuster, PaceAnnotator, PhaseAllocation,
    PhaseSequencer, SelectorState, SessionSelector, VdotAlgorithm, VolumePlanner, ZoneCalculator,
    ZoneRow, ZoneTable,
};

pub use catalog::{build_5k_catalog, global_catalog};
pub use config::PlannerConfig;
pub use plan::{generate_5k_plan_from_race, generate_5k_plan_with_catalog, GeneratedPlan, PlanRequest};
