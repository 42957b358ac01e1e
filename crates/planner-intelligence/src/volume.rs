// ABOUTME: Weekly volume planner: ramp-and-taper curve, phase multipliers and session scaling
// ABOUTME: Scales each week's scheduled sessions so their distances sum to the week's target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::volume::{
    BASE_FACTOR, EARLY_QUALITY_FACTOR, INTERVAL_FACTOR, RACE_SPECIFIC_FACTOR, REPETITION_FACTOR,
    TAPER_FACTOR, TAPER_FRACTIONS, TAPER_WEEKS, THRESHOLD_FACTOR,
};
use planner_core::errors::{PlanError, PlanResult};
use planner_core::models::{AthleteProfile, PhaseLabel, PhaseSequence, WeeklyPlanEntry};
use tracing::{debug, warn};

/// Volume multiplier applied to a phase's weeks
#[must_use]
pub const fn phase_volume_factor(phase: PhaseLabel) -> f64 {
    match phase {
        PhaseLabel::Base => BASE_FACTOR,
        PhaseLabel::EarlyQ => EARLY_QUALITY_FACTOR,
        PhaseLabel::Threshold => THRESHOLD_FACTOR,
        PhaseLabel::Interval => INTERVAL_FACTOR,
        PhaseLabel::Repetition => REPETITION_FACTOR,
        PhaseLabel::RaceSpecific => RACE_SPECIFIC_FACTOR,
        PhaseLabel::Taper => TAPER_FACTOR,
    }
}

/// Turns an athlete's volume range into weekly distance targets
#[derive(Debug, Clone, Copy)]
pub struct VolumePlanner {
    initial_km: f64,
    peak_km: f64,
}

impl VolumePlanner {
    /// Planner for an athlete's initial and peak weekly volume
    #[must_use]
    pub const fn new(athlete: &AthleteProfile) -> Self {
        Self::with_range(athlete.initial_weekly_volume_km, athlete.peak_weekly_volume_km)
    }

    /// Planner for an explicit volume range
    #[must_use]
    pub const fn with_range(initial_km: f64, peak_km: f64) -> Self {
        Self {
            initial_km,
            peak_km,
        }
    }

    /// Weekly volume before phase multipliers
    ///
    /// One week gets the initial volume. Up to three weeks interpolate
    /// linearly from initial to peak. Longer plans ramp over the first
    /// `W - 3` weeks and finish with 90%, 80% and 60% of peak.
    #[must_use]
    pub fn base_curve(&self, total_weeks: usize) -> Vec<f64> {
        let lerp = |t: f64| (self.peak_km - self.initial_km).mul_add(t, self.initial_km);

        match total_weeks {
            0 => Vec::new(),
            1 => vec![self.initial_km],
            2 | 3 => {
                let span = (total_weeks - 1) as f64;
                (0..total_weeks).map(|w| lerp(w as f64 / span)).collect()
            }
            _ => {
                let ramp_weeks = total_weeks - TAPER_WEEKS;
                let span = ramp_weeks as f64;
                (0..ramp_weeks)
                    .map(|w| lerp(w as f64 / span))
                    .chain(TAPER_FRACTIONS.iter().map(|f| f * self.peak_km))
                    .collect()
            }
        }
    }

    /// Target distance per week: base curve times the week's phase factor
    #[must_use]
    pub fn weekly_targets(&self, sequence: &PhaseSequence) -> Vec<f64> {
        self.base_curve(sequence.len())
            .into_iter()
            .zip(sequence.iter())
            .map(|(volume, phase)| volume * phase_volume_factor(phase))
            .collect()
    }

    /// Scale each week's sessions so their planned distances sum to the target
    ///
    /// A week whose positive nominal distances sum to zero keeps the raw
    /// nominal distances.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` when `plan` and `targets` differ in length
    pub fn apply_to_plan(
        plan: &[WeeklyPlanEntry],
        targets: &[f64],
    ) -> PlanResult<Vec<WeeklyPlanEntry>> {
        if plan.len() != targets.len() {
            return Err(PlanError::shape_mismatch(
                "weekly targets",
                plan.len(),
                targets.len(),
            ));
        }

        Ok(plan
            .iter()
            .zip(targets)
            .map(|(entry, target)| Self::scale_week(entry, *target))
            .collect())
    }

    fn scale_week(entry: &WeeklyPlanEntry, target_km: f64) -> WeeklyPlanEntry {
        let nominal = entry.nominal_volume_km();
        let mut scaled = entry.clone();

        if nominal <= 0.0 {
            if !entry.sessions.is_empty() {
                warn!(
                    week = entry.week,
                    "No positive nominal distance; keeping template distances"
                );
            }
            for session in &mut scaled.sessions {
                session.planned_distance_km = session.template.base_distance_km;
            }
            return scaled;
        }

        let scale = target_km / nominal;
        for session in &mut scaled.sessions {
            session.planned_distance_km = session.template.base_distance_km * scale;
        }
        debug!(week = entry.week, target_km, scale, "Scaled weekly volume");
        scaled
    }
}

/// Check that a plan has one entry per week of the sequence
///
/// # Errors
///
/// Returns `ShapeMismatch` when the lengths differ
pub fn check_plan_shape(sequence: &PhaseSequence, plan: &[WeeklyPlanEntry]) -> PlanResult<()> {
    if sequence.len() == plan.len() {
        Ok(())
    } else {
        Err(PlanError::shape_mismatch(
            "weekly plan",
            sequence.len(),
            plan.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::{ScheduledSession, SessionTemplate, ZoneCode};
    use planner_core::ErrorCode;
    use std::sync::Arc;

    fn week_with(distances: &[f64]) -> WeeklyPlanEntry {
        let sessions = distances
            .iter()
            .zip(1..)
            .map(|(km, day)| {
                let template = SessionTemplate::new("S", "S", PhaseLabel::Base, vec![ZoneCode::Easy])
                    .base_distance_km(*km);
                ScheduledSession::new(day, Arc::new(template))
            })
            .collect();
        WeeklyPlanEntry {
            week: 1,
            phase: PhaseLabel::Base,
            sessions,
        }
    }

    #[test]
    fn test_curve_shapes() {
        let planner = VolumePlanner::with_range(30.0, 50.0);
        assert_eq!(planner.base_curve(1), vec![30.0]);
        assert_eq!(planner.base_curve(3), vec![30.0, 40.0, 50.0]);

        let eight = planner.base_curve(8);
        assert_eq!(eight.len(), 8);
        assert!((eight[0] - 30.0).abs() < 1e-9);
        assert!((eight[4] - 46.0).abs() < 1e-9);
        assert!((eight[5] - 45.0).abs() < 1e-9);
        assert!((eight[6] - 40.0).abs() < 1e-9);
        assert!((eight[7] - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_hits_target() {
        let plan = vec![week_with(&[8.0, 10.0, 6.0])];
        let scaled = VolumePlanner::apply_to_plan(&plan, &[36.0]).unwrap();
        assert!((scaled[0].planned_volume_km() - 36.0).abs() < 1e-9);
        assert!((scaled[0].sessions[1].planned_distance_km - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_nominal_keeps_raw_distances() {
        let plan = vec![week_with(&[0.0, 0.0])];
        let scaled = VolumePlanner::apply_to_plan(&plan, &[40.0]).unwrap();
        assert!(scaled[0].planned_volume_km().abs() < f64::EPSILON);
    }

    #[test]
    fn test_length_mismatch() {
        let plan = vec![week_with(&[8.0])];
        let err = VolumePlanner::apply_to_plan(&plan, &[30.0, 40.0]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeMismatch);
    }
}
