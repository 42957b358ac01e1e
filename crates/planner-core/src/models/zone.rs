// ABOUTME: Daniels training zone codes (E/M/T/I/R) with metadata
// ABOUTME: Provides parsing, display and quality classification for zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{reference_speed, zone_fractions};
use crate::errors::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named intensity band, ordered from slowest to fastest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneCode {
    /// Easy
    #[serde(rename = "E")]
    Easy,
    /// Marathon
    #[serde(rename = "M")]
    Marathon,
    /// Threshold
    #[serde(rename = "T")]
    Threshold,
    /// Interval
    #[serde(rename = "I")]
    Interval,
    /// Repetition
    #[serde(rename = "R")]
    Repetition,
}

impl ZoneCode {
    /// All zones in intensity order
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Single-letter code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Easy => "E",
            Self::Marathon => "M",
            Self::Threshold => "T",
            Self::Interval => "I",
            Self::Repetition => "R",
        }
    }

    /// Long display name
    #[must_use]
    pub const fn long_name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Marathon => "Marathon",
            Self::Threshold => "Threshold",
            Self::Interval => "Interval",
            Self::Repetition => "Repetition",
        }
    }

    /// Physiological purpose of the zone
    #[must_use]
    pub const fn purpose(&self) -> &'static str {
        match self {
            Self::Easy => "Aerobic endurance / recovery",
            Self::Marathon => "Specific endurance / economy",
            Self::Threshold => "Lactate steady-state",
            Self::Interval => "VO2max development",
            Self::Repetition => "Speed / neuromuscular",
        }
    }

    /// Intensity level, 1 (easy) to 5 (repetition)
    #[must_use]
    pub const fn intensity_level(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Marathon => 2,
            Self::Threshold => 3,
            Self::Interval => 4,
            Self::Repetition => 5,
        }
    }

    /// `(slow, fast)` fraction of VO2max bounding the zone
    #[must_use]
    pub const fn vo2_fractions(&self) -> (f64, f64) {
        match self {
            Self::Easy => zone_fractions::EASY,
            Self::Marathon => zone_fractions::MARATHON,
            Self::Threshold => zone_fractions::THRESHOLD,
            Self::Interval => zone_fractions::INTERVAL,
            Self::Repetition => zone_fractions::REPETITION,
        }
    }

    /// Reference speed used to turn a timed segment into an estimated distance
    #[must_use]
    pub const fn reference_km_per_min(&self) -> f64 {
        match self {
            Self::Easy => reference_speed::EASY_KM_PER_MIN,
            Self::Marathon => reference_speed::MARATHON_KM_PER_MIN,
            Self::Threshold => reference_speed::THRESHOLD_KM_PER_MIN,
            Self::Interval => reference_speed::INTERVAL_KM_PER_MIN,
            Self::Repetition => reference_speed::REPETITION_KM_PER_MIN,
        }
    }

    /// Whether work in this zone makes a session a quality session
    #[must_use]
    pub const fn is_quality(&self) -> bool {
        matches!(self, Self::Threshold | Self::Interval | Self::Repetition)
    }
}

impl fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ZoneCode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(Self::Easy),
            "M" => Ok(Self::Marathon),
            "T" => Ok(Self::Threshold),
            "I" => Ok(Self::Interval),
            "R" => Ok(Self::Repetition),
            other => Err(PlanError::unknown_zone(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_codes_round_trip_through_str() {
        for zone in ZoneCode::ALL {
            assert_eq!(zone.code().parse::<ZoneCode>().unwrap(), zone);
        }
        assert!("X".parse::<ZoneCode>().is_err());
    }

    #[test]
    fn test_quality_zones() {
        let quality: Vec<_> = ZoneCode::ALL.iter().filter(|z| z.is_quality()).collect();
        assert_eq!(
            quality,
            vec![&ZoneCode::Threshold, &ZoneCode::Interval, &ZoneCode::Repetition]
        );
    }
}
