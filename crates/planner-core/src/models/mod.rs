// ABOUTME: Core data models for running-plan generation
// ABOUTME: Re-exports athlete, zone, phase, session, catalog, plan and feedback types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Athlete profile
pub mod athlete;
/// Session catalog keyed by phase
pub mod catalog;
/// Weekly feedback records and derived adjustments
pub mod feedback;
/// Training phases and phase sequences
pub mod phase;
/// Scheduled sessions, weekly entries and workouts
pub mod plan;
/// Segments and session templates
pub mod session;
/// Training zone codes
pub mod zone;

pub use athlete::AthleteProfile;
pub use catalog::SessionCatalog;
pub use feedback::{
    AdherenceBucket, CompletedWorkoutFeedback, FeedbackAdjustment, WeeklyFeedback,
};
pub use phase::{PhaseLabel, PhaseSequence};
pub use plan::{ScheduledSession, WeeklyPlanEntry, Workout};
pub use session::{ContinuousSegment, Extent, IntervalBlock, Segment, SessionTemplate};
pub use zone::ZoneCode;
