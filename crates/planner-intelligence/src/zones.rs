// ABOUTME: Daniels pace-zone calculator producing a five-row zone table from a VDOT value
// ABOUTME: Also owns mm:ss pace formatting and parsing used across plan output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pace zones derived from aerobic capacity.
//!
//! Each zone is bounded by two fractions of VO2max. A bound's pace comes from
//! the velocity whose oxygen cost equals `fraction x vdot`, turned into
//! minutes per kilometer with `pace = 1000 / v`.

use crate::algorithms::vdot::velocity_for_oxygen_cost;
use planner_core::errors::{PlanError, PlanResult};
use planner_core::models::ZoneCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One zone of the table, slow bound first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRow {
    /// Zone code
    pub zone: ZoneCode,
    /// Long display name
    pub long_name: String,
    /// Physiological purpose
    pub description: String,
    /// 1 (easy) to 5 (repetition)
    pub intensity_level: u8,
    /// Slow-bound fraction of VO2max
    pub fraction_slow: f64,
    /// Fast-bound fraction of VO2max
    pub fraction_fast: f64,
    /// Target VO2 at the slow bound (ml/kg/min)
    pub vo2_slow: f64,
    /// Target VO2 at the fast bound (ml/kg/min)
    pub vo2_fast: f64,
    /// Velocity at the slow bound (m/min)
    pub v_slow_m_min: f64,
    /// Velocity at the fast bound (m/min)
    pub v_fast_m_min: f64,
    /// Slow pace (min/km)
    pub pace_slow_min_km: f64,
    /// Fast pace (min/km)
    pub pace_fast_min_km: f64,
    /// Slow pace as `mm:ss`
    pub pace_slow_str: String,
    /// Fast pace as `mm:ss`
    pub pace_fast_str: String,
}

/// Zone rows keyed by code, iterated in intensity order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable {
    vdot: f64,
    rows: BTreeMap<ZoneCode, ZoneRow>,
}

impl ZoneTable {
    /// Assemble a table from precomputed rows
    ///
    /// Rows may cover only a subset of zones; lookups for a missing zone
    /// fail with `UnknownZone`.
    #[must_use]
    pub fn from_rows(vdot: f64, rows: impl IntoIterator<Item = ZoneRow>) -> Self {
        Self {
            vdot,
            rows: rows.into_iter().map(|row| (row.zone, row)).collect(),
        }
    }

    /// Capacity value the table was computed for
    #[must_use]
    pub const fn vdot(&self) -> f64 {
        self.vdot
    }

    /// Row for a zone
    ///
    /// # Errors
    ///
    /// Returns `UnknownZone` when the table has no row for `zone`
    pub fn get(&self, zone: ZoneCode) -> PlanResult<&ZoneRow> {
        self.rows
            .get(&zone)
            .ok_or_else(|| PlanError::unknown_zone(zone))
    }

    /// Rows in intensity order (E, M, T, I, R)
    pub fn rows(&self) -> impl Iterator<Item = &ZoneRow> {
        self.rows.values()
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes Daniels pace zones for a VDOT value
pub struct ZoneCalculator;

impl ZoneCalculator {
    /// Build the full five-zone table
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` when `vdot` is not a positive finite number
    /// or when a boundary has no physical velocity
    pub fn calculate(vdot: f64) -> PlanResult<ZoneTable> {
        if !vdot.is_finite() || vdot <= 0.0 {
            return Err(PlanError::invalid_capacity(vdot));
        }

        let rows = ZoneCode::ALL
            .iter()
            .map(|zone| Self::compute_row(*zone, vdot))
            .collect::<PlanResult<Vec<_>>>()?;

        Ok(ZoneTable::from_rows(vdot, rows))
    }

    fn compute_row(zone: ZoneCode, vdot: f64) -> PlanResult<ZoneRow> {
        let (fraction_slow, fraction_fast) = zone.vo2_fractions();
        let vo2_slow = fraction_slow * vdot;
        let vo2_fast = fraction_fast * vdot;

        let v_slow_m_min = velocity_for_oxygen_cost(vo2_slow)?;
        let v_fast_m_min = velocity_for_oxygen_cost(vo2_fast)?;
        if v_slow_m_min <= 0.0 || v_fast_m_min <= 0.0 {
            return Err(PlanError::invalid_capacity(vdot));
        }

        let pace_slow_min_km = pace_from_velocity(v_slow_m_min);
        let pace_fast_min_km = pace_from_velocity(v_fast_m_min);

        Ok(ZoneRow {
            zone,
            long_name: zone.long_name().to_owned(),
            description: zone.purpose().to_owned(),
            intensity_level: zone.intensity_level(),
            fraction_slow,
            fraction_fast,
            vo2_slow,
            vo2_fast,
            v_slow_m_min,
            v_fast_m_min,
            pace_slow_min_km,
            pace_fast_min_km,
            pace_slow_str: format_pace(pace_slow_min_km),
            pace_fast_str: format_pace(pace_fast_min_km),
        })
    }
}

/// Pace in min/km for a velocity in m/min
#[must_use]
pub fn pace_from_velocity(velocity_m_min: f64) -> f64 {
    1000.0 / velocity_m_min
}

/// Format a pace in min/km as `mm:ss`
///
/// Seconds are rounded; a result of 60 carries into the minutes.
#[must_use]
pub fn format_pace(pace_min_km: f64) -> String {
    let mut minutes = pace_min_km.trunc() as u32;
    let mut seconds = ((pace_min_km - pace_min_km.trunc()) * 60.0).round_ties_even() as u32;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{minutes:02}:{seconds:02}")
}

/// Parse an `mm:ss` pace into min/km
///
/// # Errors
///
/// Returns `InvalidInput` when the string is not two integers separated by
/// a colon or the seconds are 60 or more
pub fn parse_pace(pace: &str) -> PlanResult<f64> {
    let invalid = || PlanError::invalid_input(format!("Invalid pace '{pace}', expected mm:ss"));

    let (minutes, seconds) = pace.trim().split_once(':').ok_or_else(invalid)?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }

    Ok(f64::from(minutes) + f64::from(seconds) / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::ErrorCode;

    #[test]
    fn test_format_pace_carries_sixty_seconds() {
        assert_eq!(format_pace(4.0 + 59.8 / 60.0), "05:00");
        assert_eq!(format_pace(4.5), "04:30");
        assert_eq!(format_pace(12.0), "12:00");
    }

    #[test]
    fn test_parse_pace() {
        assert!((parse_pace("04:30").unwrap() - 4.5).abs() < 1e-12);
        assert!(parse_pace("4:60").is_err());
        assert!(parse_pace("fast").is_err());
    }

    #[test]
    fn test_threshold_at_vdot_45_matches_closed_form() {
        let table = ZoneCalculator::calculate(45.0).unwrap();
        let threshold = table.get(ZoneCode::Threshold).unwrap();

        let v = velocity_for_oxygen_cost(0.88 * 45.0).unwrap();
        assert!((threshold.pace_slow_min_km - 1000.0 / v).abs() < 1e-12);
        assert!((threshold.pace_slow_min_km - 4.63).abs() < 0.01);
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let err = ZoneCalculator::calculate(0.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCapacity);
    }

    #[test]
    fn test_partial_table_reports_unknown_zone() {
        let full = ZoneCalculator::calculate(50.0).unwrap();
        let easy_only = ZoneTable::from_rows(
            50.0,
            full.rows().filter(|row| row.zone == ZoneCode::Easy).cloned(),
        );
        assert_eq!(easy_only.len(), 1);
        let err = easy_only.get(ZoneCode::Repetition).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownZone);
    }
}
