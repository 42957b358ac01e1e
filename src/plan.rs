// ABOUTME: Plan-build entry point turning a race result and athlete settings into a 5K plan
// ABOUTME: Runs estimation, sequencing, selection, volume scaling and pace annotation in order
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! 5K plan generation
//!
//! [`generate_5k_plan_from_race`] is the single entry point consumers need:
//! it estimates VDOT from a recent race, lays out the phases, picks and
//! schedules sessions, scales them to the weekly volume curve and renders
//! every workout with its pace ranges. Any validation error aborts the build
//! and no partial plan is returned.

use crate::catalog::global_catalog;
use crate::config::PlannerConfig;
use chrono::{DateTime, Utc};
use planner_core::errors::PlanResult;
use planner_core::models::{
    AthleteProfile, CompletedWorkoutFeedback, PhaseSequence, SessionCatalog, WeeklyFeedback,
    WeeklyPlanEntry, Workout,
};
use planner_intelligence::volume::check_plan_shape;
use planner_intelligence::{
    FeedbackAdjuster, PaceAnnotator, PhaseSequencer, SessionSelector, VdotAlgorithm,
    VolumePlanner, ZoneCalculator, ZoneTable,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

/// Inputs for one plan build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Athlete display name
    pub athlete_name: String,
    /// Distance of the reference race (km)
    pub race_distance_km: f64,
    /// Finishing time of the reference race (minutes)
    pub race_time_min: f64,
    /// Training sessions per week (0-7)
    pub frequency_per_week: u8,
    /// Plan length in weeks
    pub total_weeks: u32,
    /// Weekly distance at the start of the plan (km)
    pub initial_weekly_volume_km: f64,
    /// Weekly distance at the peak of the plan (km)
    pub peak_weekly_volume_km: f64,
    /// Race-time-to-VDOT estimator
    pub vdot_algorithm: VdotAlgorithm,
}

impl PlanRequest {
    /// Request with plan length, volumes and algorithm taken from `config`
    #[must_use]
    pub fn from_config(
        config: &PlannerConfig,
        athlete_name: impl Into<String>,
        race_distance_km: f64,
        race_time_min: f64,
        frequency_per_week: u8,
    ) -> Self {
        Self {
            athlete_name: athlete_name.into(),
            race_distance_km,
            race_time_min,
            frequency_per_week,
            total_weeks: config.total_weeks,
            initial_weekly_volume_km: config.initial_weekly_volume_km,
            peak_weekly_volume_km: config.peak_weekly_volume_km,
            vdot_algorithm: config.vdot_algorithm,
        }
    }

    /// Request with default plan settings
    #[must_use]
    pub fn new(
        athlete_name: impl Into<String>,
        race_distance_km: f64,
        race_time_min: f64,
        frequency_per_week: u8,
    ) -> Self {
        Self::from_config(
            &PlannerConfig::default(),
            athlete_name,
            race_distance_km,
            race_time_min,
            frequency_per_week,
        )
    }

    /// Override the plan length
    #[must_use]
    pub const fn total_weeks(mut self, total_weeks: u32) -> Self {
        self.total_weeks = total_weeks;
        self
    }

    /// Override the weekly volume range
    #[must_use]
    pub const fn volumes(mut self, initial_km: f64, peak_km: f64) -> Self {
        self.initial_weekly_volume_km = initial_km;
        self.peak_weekly_volume_km = peak_km;
        self
    }
}

/// A complete, scaled and annotated plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    /// Identifier of this plan
    pub plan_id: Uuid,
    /// Build time
    pub generated_at: DateTime<Utc>,
    /// Athlete the plan was built for
    pub athlete: AthleteProfile,
    /// Estimated aerobic capacity
    pub vdot: f64,
    /// Pace zones for `vdot`
    pub zones: ZoneTable,
    /// Phase of every week
    pub phase_sequence: PhaseSequence,
    /// Weekly distance targets after phase factors (km)
    pub weekly_targets: Vec<f64>,
    /// Scheduled and scaled weeks
    pub weeks: Vec<WeeklyPlanEntry>,
    /// Flattened workouts sorted by week, then weekday
    pub workouts: Vec<Workout>,
}

impl GeneratedPlan {
    /// Total planned distance over all weeks (km)
    #[must_use]
    pub fn total_volume_km(&self) -> f64 {
        self.weeks.iter().map(WeeklyPlanEntry::planned_volume_km).sum()
    }

    /// Workouts of a 1-based week
    pub fn workouts_for_week(&self, week: u32) -> impl Iterator<Item = &Workout> + '_ {
        self.workouts.iter().filter(move |w| w.week == week)
    }

    /// Summarize per-workout reports of a week against its plan
    ///
    /// Returns `None` when the plan has no such week.
    #[must_use]
    pub fn weekly_feedback(
        &self,
        week: u32,
        reports: &[CompletedWorkoutFeedback],
    ) -> Option<WeeklyFeedback> {
        let entry = self.weeks.iter().find(|entry| entry.week == week)?;
        let scheduled = u32::try_from(entry.sessions.len()).unwrap_or(u32::MAX);
        Some(WeeklyFeedback::from_completed(
            week,
            entry.planned_volume_km(),
            scheduled,
            reports,
        ))
    }

    /// Rebuild volumes and workouts after applying a feedback history
    ///
    /// Sessions and weekdays stay as selected; only the weekly targets and
    /// the planned distances that follow from them change.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the plan's weeks and targets disagree in
    /// length, and `UnknownZone` if a session uses a zone outside the table
    pub fn apply_feedback(&self, history: &[WeeklyFeedback]) -> PlanResult<Self> {
        let weekly_targets = FeedbackAdjuster::apply_history(&self.weekly_targets, history);
        let weeks = VolumePlanner::apply_to_plan(&self.weeks, &weekly_targets)?;
        let workouts = PaceAnnotator::new(&self.zones).project_workouts(&self.athlete, &weeks)?;

        info!(
            plan_id = %self.plan_id,
            feedback_weeks = history.len(),
            "Re-planned volumes from feedback"
        );

        Ok(Self {
            plan_id: self.plan_id,
            generated_at: Utc::now(),
            athlete: self.athlete.clone(),
            vdot: self.vdot,
            zones: self.zones.clone(),
            phase_sequence: self.phase_sequence.clone(),
            weekly_targets,
            weeks,
            workouts,
        })
    }
}

/// Build a 5K plan from a recent race using the built-in session catalog
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive race observation or an athlete
/// setting out of range, `InvalidCapacity` when the estimated VDOT is not
/// physical, and `InvalidDuration` for a zero-week plan
pub fn generate_5k_plan_from_race(request: &PlanRequest) -> PlanResult<GeneratedPlan> {
    generate_5k_plan_with_catalog(request, &global_catalog())
}

/// Build a 5K plan from a recent race using the given session catalog
///
/// # Errors
///
/// Same as [`generate_5k_plan_from_race`]
#[instrument(
    skip(request, catalog),
    fields(
        athlete = %request.athlete_name,
        weeks = request.total_weeks,
        frequency = request.frequency_per_week,
        algorithm = request.vdot_algorithm.name(),
    )
)]
pub fn generate_5k_plan_with_catalog(
    request: &PlanRequest,
    catalog: &SessionCatalog,
) -> PlanResult<GeneratedPlan> {
    let athlete = AthleteProfile::with_volumes(
        request.athlete_name.clone(),
        request.frequency_per_week,
        request.initial_weekly_volume_km,
        request.peak_weekly_volume_km,
    )?;
    let vdot = request
        .vdot_algorithm
        .estimate(request.race_distance_km, request.race_time_min)?;
    let zones = ZoneCalculator::calculate(vdot)?;

    let phase_sequence = PhaseSequencer::five_k().build_sequence(request.total_weeks)?;
    let selected = SessionSelector::new(catalog).build_weekly_plan(&athlete, &phase_sequence);
    check_plan_shape(&phase_sequence, &selected)?;

    let weekly_targets = VolumePlanner::new(&athlete).weekly_targets(&phase_sequence);
    let weeks = VolumePlanner::apply_to_plan(&selected, &weekly_targets)?;
    let workouts = PaceAnnotator::new(&zones).project_workouts(&athlete, &weeks)?;

    let plan = GeneratedPlan {
        plan_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        athlete,
        vdot,
        zones,
        phase_sequence,
        weekly_targets,
        weeks,
        workouts,
    };

    info!(
        plan_id = %plan.plan_id,
        vdot = plan.vdot,
        workouts = plan.workouts.len(),
        total_km = plan.total_volume_km(),
        "Generated 5K plan"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::ErrorCode;

    #[test]
    fn test_zero_weeks_rejected() {
        let request = PlanRequest::new("Ana", 5.0, 20.0, 4).total_weeks(0);
        let err = generate_5k_plan_from_race(&request).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDuration);
    }

    #[test]
    fn test_bad_race_time_rejected() {
        let request = PlanRequest::new("Ana", 5.0, 0.0, 4);
        let err = generate_5k_plan_from_race(&request).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_workouts_match_scheduled_sessions() {
        let plan = generate_5k_plan_from_race(&PlanRequest::new("Ana", 5.0, 20.0, 4)).unwrap();
        let scheduled: usize = plan.weeks.iter().map(|w| w.sessions.len()).sum();
        assert_eq!(plan.workouts.len(), scheduled);
        assert_eq!(plan.workouts_for_week(1).count(), 4);
    }
}
