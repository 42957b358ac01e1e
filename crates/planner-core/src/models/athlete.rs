// ABOUTME: Athlete profile consumed by the planning engine
// ABOUTME: Validated frequency and volume targets, immutable for the duration of a plan build
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, weekdays::MAX_FREQUENCY};
use crate::errors::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Athlete inputs for one plan build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Training sessions per week (0-7)
    pub frequency_per_week: u8,
    /// Objective label, e.g. "5K"
    pub objective: String,
    /// Weekly distance at the start of the plan (km)
    pub initial_weekly_volume_km: f64,
    /// Weekly distance at the peak of the plan (km)
    pub peak_weekly_volume_km: f64,
}

impl AthleteProfile {
    /// Create a profile with default objective and volumes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the frequency exceeds seven sessions per week
    pub fn new(name: impl Into<String>, frequency_per_week: u8) -> PlanResult<Self> {
        Self::with_volumes(
            name,
            frequency_per_week,
            defaults::INITIAL_WEEKLY_VOLUME_KM,
            defaults::PEAK_WEEKLY_VOLUME_KM,
        )
    }

    /// Create a profile with explicit weekly volumes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the frequency exceeds seven sessions per week
    /// or either volume is negative or not finite
    pub fn with_volumes(
        name: impl Into<String>,
        frequency_per_week: u8,
        initial_weekly_volume_km: f64,
        peak_weekly_volume_km: f64,
    ) -> PlanResult<Self> {
        if frequency_per_week > MAX_FREQUENCY {
            return Err(PlanError::invalid_input(format!(
                "frequency_per_week must be between 0 and {MAX_FREQUENCY}, got {frequency_per_week}"
            )));
        }
        for (label, value) in [
            ("initial_weekly_volume_km", initial_weekly_volume_km),
            ("peak_weekly_volume_km", peak_weekly_volume_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::invalid_input(format!(
                    "{label} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            frequency_per_week,
            objective: defaults::OBJECTIVE.to_owned(),
            initial_weekly_volume_km,
            peak_weekly_volume_km,
        })
    }

    /// Replace the objective label
    #[must_use]
    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }
}
