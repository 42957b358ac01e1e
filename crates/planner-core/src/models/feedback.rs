// ABOUTME: Athlete feedback records and the adjustments derived from them
// ABOUTME: Weekly completion signals, per-workout reports and adherence buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Report for a single completed (or skipped) workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkoutFeedback {
    /// 1-based week number
    pub week: u32,
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// Distance actually run; `None` when the workout was skipped
    pub completed_distance_km: Option<f64>,
    /// Rate of perceived exertion (1-10)
    pub rpe: Option<u8>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

/// Completion signals for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyFeedback {
    /// 1-based week number
    pub week: u32,
    /// Planned volume (km)
    pub planned_volume_km: f64,
    /// Completed volume (km)
    pub completed_volume_km: f64,
    /// Sessions not done
    pub missed_workouts: u32,
    /// Mean RPE over reported sessions
    pub avg_rpe_quality: Option<f64>,
    /// Fatigue score (1-10)
    pub fatigue_score: Option<u8>,
    /// Soreness score (1-10)
    pub soreness_score: Option<u8>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl WeeklyFeedback {
    /// Week record with volumes only
    #[must_use]
    pub const fn new(week: u32, planned_volume_km: f64, completed_volume_km: f64) -> Self {
        Self {
            week,
            planned_volume_km,
            completed_volume_km,
            missed_workouts: 0,
            avg_rpe_quality: None,
            fatigue_score: None,
            soreness_score: None,
            notes: String::new(),
        }
    }

    /// Attach fatigue and soreness scores
    #[must_use]
    pub fn with_scores(mut self, fatigue: Option<u8>, soreness: Option<u8>) -> Self {
        self.fatigue_score = fatigue;
        self.soreness_score = soreness;
        self
    }

    /// Aggregate per-workout reports of one week
    ///
    /// Reports for other weeks are ignored. A report counts as completed when
    /// it carries a distance; missed sessions are the scheduled count minus
    /// completed reports, floored at zero.
    #[must_use]
    pub fn from_completed(
        week: u32,
        planned_volume_km: f64,
        scheduled_sessions: u32,
        reports: &[CompletedWorkoutFeedback],
    ) -> Self {
        let this_week: Vec<&CompletedWorkoutFeedback> =
            reports.iter().filter(|r| r.week == week).collect();

        let completed: Vec<f64> = this_week
            .iter()
            .filter_map(|r| r.completed_distance_km)
            .collect();
        let completed_count = u32::try_from(completed.len()).unwrap_or(u32::MAX);

        let rpes: Vec<f64> = this_week
            .iter()
            .filter_map(|r| r.rpe.map(f64::from))
            .collect();
        let avg_rpe_quality = if rpes.is_empty() {
            None
        } else {
            Some(rpes.iter().sum::<f64>() / rpes.len() as f64)
        };

        Self {
            missed_workouts: scheduled_sessions.saturating_sub(completed_count),
            avg_rpe_quality,
            ..Self::new(week, planned_volume_km, completed.iter().sum())
        }
    }
}

/// Adherence classification of a feedback week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceBucket {
    /// Low adherence or high fatigue/soreness
    StrongReduction,
    /// Below-plan adherence or elevated fatigue
    ModerateReduction,
    /// On plan and feeling fine
    Hold,
    /// Above plan and fresh
    SlightIncrease,
    /// None of the rules matched
    HoldFallback,
}

impl AdherenceBucket {
    /// Fixed comment for the bucket
    #[must_use]
    pub const fn comment(&self) -> &'static str {
        match self {
            Self::StrongReduction => {
                "Strong reduction: low adherence or high fatigue/soreness."
            }
            Self::ModerateReduction => "Moderate reduction of volume and quality.",
            Self::Hold => "Keep the planned progression.",
            Self::SlightIncrease => "Athlete is coping well: slight increase allowed.",
            Self::HoldFallback => "Intermediate situation: keep the plan.",
        }
    }
}

/// Multipliers derived from one feedback week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAdjustment {
    /// Week the feedback belongs to
    pub week: u32,
    /// Classification
    pub bucket: AdherenceBucket,
    /// Multiplier for future weekly volume
    pub volume_factor: f64,
    /// Multiplier for future quality load
    pub quality_bias: f64,
    /// Human-readable explanation
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(week: u32, day: u8, km: Option<f64>, rpe: Option<u8>) -> CompletedWorkoutFeedback {
        CompletedWorkoutFeedback {
            week,
            day_of_week: day,
            completed_distance_km: km,
            rpe,
            notes: String::new(),
        }
    }

    #[test]
    fn test_from_completed_aggregates_single_week() {
        let reports = vec![
            report(2, 1, Some(8.0), Some(4)),
            report(2, 3, Some(10.0), Some(8)),
            report(2, 5, None, None),
            report(3, 1, Some(12.0), Some(5)),
        ];
        let week = WeeklyFeedback::from_completed(2, 30.0, 4, &reports);
        assert!((week.completed_volume_km - 18.0).abs() < 1e-9);
        assert_eq!(week.missed_workouts, 2);
        assert_eq!(week.avg_rpe_quality, Some(6.0));
        assert_eq!(week.fatigue_score, None);
    }

    #[test]
    fn test_from_completed_without_reports() {
        let week = WeeklyFeedback::from_completed(1, 25.0, 3, &[]);
        assert_eq!(week.missed_workouts, 3);
        assert_eq!(week.avg_rpe_quality, None);
        assert!(week.completed_volume_km.abs() < f64::EPSILON);
    }
}
