// ABOUTME: Planning engine for 5K running plans built on planner-core types
// ABOUTME: Zone calculation, phase sequencing, session selection, volume, pacing and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Intelligence
//!
//! The deterministic pipeline that turns an athlete profile and a capacity
//! value into a scheduled, volume-scaled, pace-annotated plan.
//!
//! ## Modules
//!
//! - **algorithms**: Daniels oxygen-cost model and race-time-to-VDOT estimators
//! - **zones**: Five-zone pace table for a VDOT value
//! - **phases**: Proportional week allocation over the training phases
//! - **selection**: Rotating session selection and weekday scheduling
//! - **volume**: Weekly volume curve and per-session scaling
//! - **pacing**: Pace annotation, descriptions and workout projection
//! - **feedback**: Adherence classification and target adjustment

/// Pluggable estimation algorithms
pub mod algorithms;

/// Daniels pace zones
pub mod zones;

/// Phase sequencing
pub mod phases;

/// Weekly session selection
pub mod selection;

/// Weekly volume planning
pub mod volume;

/// Pace annotation and workout projection
pub mod pacing;

/// Feedback-driven adjustment
pub mod feedback;

pub use algorithms::VdotAlgorithm;
pub use feedback::FeedbackAdjuster;
pub use pacing::{AnnotatedSession, PaceAnnotator};
pub use phases::{PhaseAllocation, PhaseSequencer};
pub use selection::{SelectorState, SessionSelector};
pub use volume::VolumePlanner;
pub use zones::{format_pace, parse_pace, ZoneCalculator, ZoneRow, ZoneTable};
