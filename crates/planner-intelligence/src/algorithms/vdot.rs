// ABOUTME: VDOT algorithms: Daniels oxygen-cost model, its inverse, and race-based estimation
// ABOUTME: Implements the Daniels-Gilbert estimator and a Riegel-normalized variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::daniels::{
    A as DANIELS_A, B as DANIELS_B, C as DANIELS_C, FRACTION_AMP_1, FRACTION_AMP_2,
    FRACTION_BASE, FRACTION_RATE_1, FRACTION_RATE_2, RIEGEL_EXPONENT,
    RIEGEL_REFERENCE_DISTANCE_M,
};
use planner_core::errors::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Oxygen cost (ml/kg/min) of running at `velocity` meters per minute
///
/// VO2 = -4.60 + 0.182258·v + 0.000104·v²
#[must_use]
pub fn oxygen_cost(velocity: f64) -> f64 {
    (DANIELS_A * velocity).mul_add(velocity, DANIELS_B.mul_add(velocity, DANIELS_C))
}

/// Velocity (m/min) whose oxygen cost equals `vo2`
///
/// Solves 0.000104·v² + 0.182258·v − (vo2 + 4.60) = 0 and keeps the larger root.
///
/// # Errors
///
/// Returns `InvalidCapacity` if the discriminant is negative
pub fn velocity_for_oxygen_cost(vo2: f64) -> PlanResult<f64> {
    let c = DANIELS_C - vo2;
    let discriminant = DANIELS_B.mul_add(DANIELS_B, -(4.0 * DANIELS_A * c));
    if discriminant < 0.0 || !discriminant.is_finite() {
        return Err(PlanError::invalid_capacity(vo2));
    }

    let root = discriminant.sqrt();
    let v1 = (-DANIELS_B + root) / (2.0 * DANIELS_A);
    let v2 = (-DANIELS_B - root) / (2.0 * DANIELS_A);
    Ok(v1.max(v2))
}

/// Race-time-to-VDOT estimation method
///
/// - `DanielsGilbert`: oxygen cost of the race velocity divided by the
///   fraction of VO2max sustainable for the race duration
/// - `Riegel`: normalizes the observation to a 5K-equivalent time with
///   T2 = T1 x (D2/D1)^exponent, then applies `DanielsGilbert`
///
/// # Scientific References
///
/// - Daniels, J. & Gilbert, J. (1979). "Oxygen Power". Self-published.
/// - Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3), 285-290.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VdotAlgorithm {
    /// Daniels-Gilbert oxygen-power estimate
    #[default]
    DanielsGilbert,

    /// Riegel power-law normalization to 5K, then Daniels-Gilbert
    Riegel {
        /// Fatigue exponent (1.06 by default)
        exponent: f64,
    },
}

impl VdotAlgorithm {
    /// Estimate VDOT from a race observation
    ///
    /// # Arguments
    ///
    /// * `distance_km` - Race distance in kilometers
    /// * `time_min` - Race time in minutes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if distance or time is not positive
    pub fn estimate(&self, distance_km: f64, time_min: f64) -> PlanResult<f64> {
        if !(time_min.is_finite() && time_min > 0.0) {
            return Err(PlanError::invalid_input(format!(
                "Race time must be positive, got {time_min}"
            )));
        }
        if !(distance_km.is_finite() && distance_km > 0.0) {
            return Err(PlanError::invalid_input(format!(
                "Race distance must be positive, got {distance_km}"
            )));
        }

        match self {
            Self::DanielsGilbert => Ok(Self::daniels_gilbert(distance_km * 1000.0, time_min)),
            Self::Riegel { exponent } => {
                let distance_m = distance_km * 1000.0;
                let equivalent_time =
                    time_min * (RIEGEL_REFERENCE_DISTANCE_M / distance_m).powf(*exponent);
                Ok(Self::daniels_gilbert(
                    RIEGEL_REFERENCE_DISTANCE_M,
                    equivalent_time,
                ))
            }
        }
    }

    fn daniels_gilbert(distance_m: f64, time_min: f64) -> f64 {
        let velocity = distance_m / time_min;
        let vo2 = oxygen_cost(velocity);
        vo2 / Self::sustainable_fraction(time_min)
    }

    /// Fraction of VO2max sustainable for a race lasting `time_min` minutes
    #[must_use]
    pub fn sustainable_fraction(time_min: f64) -> f64 {
        FRACTION_AMP_2.mul_add(
            (-FRACTION_RATE_2 * time_min).exp(),
            FRACTION_AMP_1.mul_add((-FRACTION_RATE_1 * time_min).exp(), FRACTION_BASE),
        )
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DanielsGilbert => "daniels",
            Self::Riegel { .. } => "riegel",
        }
    }
}

impl FromStr for VdotAlgorithm {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daniels" | "daniels_gilbert" => Ok(Self::DanielsGilbert),
            "riegel" => Ok(Self::Riegel {
                exponent: RIEGEL_EXPONENT,
            }),
            other => Err(PlanError::invalid_input(format!(
                "Unknown VDOT algorithm: '{other}'. Valid options: daniels, riegel"
            ))),
        }
    }
}
