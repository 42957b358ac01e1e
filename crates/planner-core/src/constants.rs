// ABOUTME: Physiological and planning constants for running-plan generation
// ABOUTME: Zone fractions, Daniels coefficients, phase tables, volume factors and feedback thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used throughout the planning engine.
//!
//! Physiological values follow Jack Daniels' running formula; scheduling
//! tables are hand-tuned coaching rules and are kept as literal tables.
//!
//! References:
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
//! - Daniels, J. & Gilbert, J. (1979). "Oxygen Power: Performance Tables for Distance Runners"

/// Jack Daniels' oxygen-cost model: VO2 = C + B·v + A·v² (v in m/min)
pub mod daniels {
    /// Coefficient for the velocity squared term
    pub const A: f64 = 0.000_104;

    /// Coefficient for the velocity term
    pub const B: f64 = 0.182_258;

    /// Constant term
    pub const C: f64 = -4.60;

    /// Daniels-Gilbert fraction-of-VO2max curve: base term
    pub const FRACTION_BASE: f64 = 0.8;
    /// Daniels-Gilbert fraction curve: first exponential amplitude
    pub const FRACTION_AMP_1: f64 = 0.189_439_3;
    /// Daniels-Gilbert fraction curve: first exponential rate (per minute)
    pub const FRACTION_RATE_1: f64 = 0.012_778;
    /// Daniels-Gilbert fraction curve: second exponential amplitude
    pub const FRACTION_AMP_2: f64 = 0.298_955_8;
    /// Daniels-Gilbert fraction curve: second exponential rate (per minute)
    pub const FRACTION_RATE_2: f64 = 0.193_260_5;

    /// Default Riegel fatigue exponent
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Reference distance used when converting observations with Riegel (meters)
    pub const RIEGEL_REFERENCE_DISTANCE_M: f64 = 5_000.0;
}

/// Zone boundaries as fractions of VO2max, slow bound first
pub mod zone_fractions {
    /// Easy
    pub const EASY: (f64, f64) = (0.65, 0.78);
    /// Marathon
    pub const MARATHON: (f64, f64) = (0.83, 0.87);
    /// Threshold
    pub const THRESHOLD: (f64, f64) = (0.88, 0.92);
    /// Interval
    pub const INTERVAL: (f64, f64) = (0.97, 1.00);
    /// Repetition
    pub const REPETITION: (f64, f64) = (1.05, 1.10);
}

/// Reference speeds (km per minute) used to estimate the length of timed segments
pub mod reference_speed {
    /// Easy, 6:00/km
    pub const EASY_KM_PER_MIN: f64 = 1.0 / 6.0;
    /// Marathon, 5:24/km
    pub const MARATHON_KM_PER_MIN: f64 = 1.0 / 5.4;
    /// Threshold, 4:15/km
    pub const THRESHOLD_KM_PER_MIN: f64 = 1.0 / 4.25;
    /// Interval, 3:45/km
    pub const INTERVAL_KM_PER_MIN: f64 = 1.0 / 3.75;
    /// Repetition, 3:30/km
    pub const REPETITION_KM_PER_MIN: f64 = 1.0 / 3.5;
}

/// Phase allocation for a 5K build: nominal proportion and tie-break priority
///
/// Proportions are normalized before use, so they need not sum to 1.
pub mod phase_allocation {
    /// Base proportion / priority
    pub const BASE: (f64, u32) = (0.30, 1);
    /// Early-quality proportion / priority
    pub const EARLY_QUALITY: (f64, u32) = (0.15, 2);
    /// Threshold proportion / priority
    pub const THRESHOLD: (f64, u32) = (0.20, 3);
    /// Interval proportion / priority
    pub const INTERVAL: (f64, u32) = (0.30, 5);
    /// Repetition proportion / priority
    pub const REPETITION: (f64, u32) = (0.20, 4);
    /// Race-specific proportion / priority
    pub const RACE_SPECIFIC: (f64, u32) = (0.05, 10);
    /// Taper proportion / priority
    pub const TAPER: (f64, u32) = (0.05, 10);
}

/// Weekly volume shaping
pub mod volume {
    /// Fractions of peak volume for the final three weeks, in order
    pub const TAPER_FRACTIONS: [f64; 3] = [0.90, 0.80, 0.60];

    /// Number of weeks covered by the fixed taper
    pub const TAPER_WEEKS: usize = 3;

    /// Phase multipliers
    pub const BASE_FACTOR: f64 = 1.00;
    /// Early-quality multiplier
    pub const EARLY_QUALITY_FACTOR: f64 = 1.00;
    /// Threshold multiplier
    pub const THRESHOLD_FACTOR: f64 = 1.00;
    /// Interval multiplier
    pub const INTERVAL_FACTOR: f64 = 0.95;
    /// Repetition multiplier
    pub const REPETITION_FACTOR: f64 = 0.90;
    /// Race-specific multiplier
    pub const RACE_SPECIFIC_FACTOR: f64 = 0.90;
    /// Taper multiplier
    pub const TAPER_FACTOR: f64 = 0.70;
}

/// Weekday tables (1 = Monday .. 7 = Sunday)
pub mod weekdays {
    /// Training days per weekly frequency, index = frequency
    pub const TRAINING_DAYS: [&[u8]; 8] = [
        &[],
        &[3],
        &[3, 6],
        &[2, 4, 6],
        &[1, 3, 5, 7],
        &[1, 2, 4, 6, 7],
        &[1, 2, 3, 4, 5, 6],
        &[1, 2, 3, 4, 5, 6, 7],
    ];

    /// Preferred days for quality sessions, in order
    pub const QUALITY_PREFERENCE: [u8; 7] = [3, 5, 7, 2, 4, 6, 1];

    /// Maximum sessions per week
    pub const MAX_FREQUENCY: u8 = 7;
}

/// Adherence and wellbeing thresholds for feedback classification
pub mod feedback {
    /// Floor applied to planned volume before dividing
    pub const PLANNED_VOLUME_EPSILON: f64 = 1e-3;

    /// Score assumed when fatigue or soreness is not reported
    pub const DEFAULT_SCORE: u8 = 5;

    /// Adherence below this triggers a strong reduction
    pub const STRONG_REDUCTION_ADHERENCE: f64 = 0.6;
    /// Fatigue or soreness at or above this triggers a strong reduction
    pub const STRONG_REDUCTION_SCORE: u8 = 8;

    /// Adherence below this triggers a moderate reduction
    pub const MODERATE_REDUCTION_ADHERENCE: f64 = 0.9;
    /// Fatigue at or above this triggers a moderate reduction
    pub const MODERATE_REDUCTION_FATIGUE: u8 = 7;

    /// Upper adherence bound of the hold band
    pub const HOLD_ADHERENCE_MAX: f64 = 1.1;
    /// Highest fatigue/soreness still compatible with holding
    pub const HOLD_MAX_SCORE: u8 = 6;

    /// Highest fatigue/soreness still compatible with an increase
    pub const INCREASE_MAX_SCORE: u8 = 5;

    /// Strong reduction (volume, quality)
    pub const STRONG_REDUCTION: (f64, f64) = (0.8, 0.7);
    /// Moderate reduction (volume, quality)
    pub const MODERATE_REDUCTION: (f64, f64) = (0.9, 0.85);
    /// Hold (volume, quality)
    pub const HOLD: (f64, f64) = (1.0, 1.0);
    /// Slight increase (volume, quality)
    pub const SLIGHT_INCREASE: (f64, f64) = (1.05, 1.05);
}

/// Defaults for athlete profiles and plan requests
pub mod defaults {
    /// Objective label for the built-in plan family
    pub const OBJECTIVE: &str = "5K";
    /// Starting weekly volume (km)
    pub const INITIAL_WEEKLY_VOLUME_KM: f64 = 30.0;
    /// Peak weekly volume (km)
    pub const PEAK_WEEKLY_VOLUME_KM: f64 = 50.0;
    /// Plan length in weeks
    pub const TOTAL_WEEKS: u32 = 8;
}
