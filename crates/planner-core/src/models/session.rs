// ABOUTME: Session template model: continuous segments, interval blocks and their extents
// ABOUTME: Encodes the exactly-one-of distance/duration rule as a tagged variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::phase::PhaseLabel;
use super::zone::ZoneCode;
use crate::errors::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// How long a segment lasts: a distance or a duration, never both
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtent", into = "RawExtent")]
pub enum Extent {
    /// Fixed distance in meters
    Distance {
        /// Meters
        meters: f64,
    },
    /// Fixed duration in minutes
    Duration {
        /// Minutes
        minutes: f64,
    },
}

impl Extent {
    /// Distance in meters
    #[must_use]
    pub const fn meters(meters: f64) -> Self {
        Self::Distance { meters }
    }

    /// Distance in kilometers
    #[must_use]
    pub fn km(km: f64) -> Self {
        Self::Distance {
            meters: km * 1000.0,
        }
    }

    /// Duration in minutes
    #[must_use]
    pub const fn minutes(minutes: f64) -> Self {
        Self::Duration { minutes }
    }

    /// Build from the two optional fields used by external catalogs
    ///
    /// # Errors
    ///
    /// Returns `MissingSegmentBound` unless exactly one of the two is set,
    /// and `InvalidInput` when the value set is not a positive number
    pub fn from_parts(distance_m: Option<f64>, duration_min: Option<f64>) -> PlanResult<Self> {
        let extent = match (distance_m, duration_min) {
            (Some(meters), None) => Self::Distance { meters },
            (None, Some(minutes)) => Self::Duration { minutes },
            (None, None) => {
                return Err(PlanError::missing_segment_bound(
                    "segment sets neither distance_m nor duration_min",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(PlanError::missing_segment_bound(
                    "segment sets both distance_m and duration_min",
                ))
            }
        };
        let value = match extent {
            Self::Distance { meters } => meters,
            Self::Duration { minutes } => minutes,
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(PlanError::invalid_input(format!(
                "segment extent must be positive, got {value}"
            )));
        }
        Ok(extent)
    }

    /// Estimated distance in km, timing durations at the zone's reference speed
    #[must_use]
    pub fn estimated_km(&self, zone: ZoneCode) -> f64 {
        match self {
            Self::Distance { meters } => meters / 1000.0,
            Self::Duration { minutes } => minutes * zone.reference_km_per_min(),
        }
    }
}

/// Wire shape of an extent: two optional fields
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct RawExtent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_min: Option<f64>,
}

impl TryFrom<RawExtent> for Extent {
    type Error = PlanError;

    fn try_from(raw: RawExtent) -> Result<Self, Self::Error> {
        Self::from_parts(raw.distance_m, raw.duration_min)
    }
}

impl From<Extent> for RawExtent {
    fn from(extent: Extent) -> Self {
        match extent {
            Extent::Distance { meters } => Self {
                distance_m: Some(meters),
                duration_min: None,
            },
            Extent::Duration { minutes } => Self {
                distance_m: None,
                duration_min: Some(minutes),
            },
        }
    }
}

/// Steady segment run in a single zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousSegment {
    /// Distance or duration
    #[serde(flatten)]
    pub extent: Extent,
    /// Target zone
    pub zone: ZoneCode,
    /// Optional narrative
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl ContinuousSegment {
    /// Segment with the given extent and zone
    #[must_use]
    pub const fn new(extent: Extent, zone: ZoneCode) -> Self {
        Self {
            extent,
            zone,
            note: String::new(),
        }
    }

    /// Timed segment
    #[must_use]
    pub const fn minutes(minutes: f64, zone: ZoneCode) -> Self {
        Self::new(Extent::minutes(minutes), zone)
    }

    /// Distance segment in km
    #[must_use]
    pub fn km(km: f64, zone: ZoneCode) -> Self {
        Self::new(Extent::km(km), zone)
    }

    /// Attach a narrative
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Estimated distance in km
    #[must_use]
    pub fn estimated_km(&self) -> f64 {
        self.extent.estimated_km(self.zone)
    }
}

/// Repeated work/recovery pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBlock {
    /// Number of repetitions
    pub reps: u32,
    /// Work portion
    pub work: Extent,
    /// Work zone
    pub work_zone: ZoneCode,
    /// Recovery portion
    pub recovery: Extent,
    /// Recovery zone
    pub recovery_zone: ZoneCode,
    /// Optional narrative
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl IntervalBlock {
    /// Block of `reps` work/recovery pairs
    #[must_use]
    pub const fn new(
        reps: u32,
        work: Extent,
        work_zone: ZoneCode,
        recovery: Extent,
        recovery_zone: ZoneCode,
    ) -> Self {
        Self {
            reps,
            work,
            work_zone,
            recovery,
            recovery_zone,
            note: String::new(),
        }
    }

    /// Attach a narrative
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Estimated distance in km for all repetitions
    #[must_use]
    pub fn estimated_km(&self) -> f64 {
        f64::from(self.reps)
            * (self.work.estimated_km(self.work_zone)
                + self.recovery.estimated_km(self.recovery_zone))
    }
}

/// Element of a session's main set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Single-zone segment
    Continuous(ContinuousSegment),
    /// Work/recovery repetitions
    Interval(IntervalBlock),
}

impl Segment {
    /// Estimated distance in km
    #[must_use]
    pub fn estimated_km(&self) -> f64 {
        match self {
            Self::Continuous(segment) => segment.estimated_km(),
            Self::Interval(block) => block.estimated_km(),
        }
    }
}

impl From<ContinuousSegment> for Segment {
    fn from(segment: ContinuousSegment) -> Self {
        Self::Continuous(segment)
    }
}

impl From<IntervalBlock> for Segment {
    fn from(block: IntervalBlock) -> Self {
        Self::Interval(block)
    }
}

/// Static workout definition shared read-only across plan builds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Unique code, e.g. `T_CRUISE_4x5`
    pub code: String,
    /// Display name
    pub name: String,
    /// Owning phase
    pub phase: PhaseLabel,
    /// Primary zones of the session
    pub main_zones: Vec<ZoneCode>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Warm-up segments
    #[serde(default)]
    pub warmup: Vec<ContinuousSegment>,
    /// Main set
    #[serde(default)]
    pub main: Vec<Segment>,
    /// Cool-down segments
    #[serde(default)]
    pub cooldown: Vec<ContinuousSegment>,
    /// Reference distance before weekly-volume scaling (km)
    #[serde(default)]
    pub base_distance_km: f64,
    /// Purpose of the session
    #[serde(default)]
    pub description: String,
}

impl SessionTemplate {
    /// Empty template; fill with the builder methods below
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        phase: PhaseLabel,
        main_zones: Vec<ZoneCode>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            phase,
            main_zones,
            tags: Vec::new(),
            warmup: Vec::new(),
            main: Vec::new(),
            cooldown: Vec::new(),
            base_distance_km: 0.0,
            description: String::new(),
        }
    }

    /// Set the warm-up
    #[must_use]
    pub fn warmup(mut self, warmup: Vec<ContinuousSegment>) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set the main set
    #[must_use]
    pub fn main(mut self, main: Vec<Segment>) -> Self {
        self.main = main;
        self
    }

    /// Set the cool-down
    #[must_use]
    pub fn cooldown(mut self, cooldown: Vec<ContinuousSegment>) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the nominal distance explicitly
    #[must_use]
    pub const fn base_distance_km(mut self, km: f64) -> Self {
        self.base_distance_km = km;
        self
    }

    /// Set the nominal distance to the segment estimate
    #[must_use]
    pub fn with_estimated_distance(mut self) -> Self {
        self.base_distance_km = self.estimated_distance_km();
        self
    }

    /// Sum of segment estimates rounded to 0.1 km
    #[must_use]
    pub fn estimated_distance_km(&self) -> f64 {
        let total: f64 = self
            .warmup
            .iter()
            .map(ContinuousSegment::estimated_km)
            .chain(self.main.iter().map(Segment::estimated_km))
            .chain(self.cooldown.iter().map(ContinuousSegment::estimated_km))
            .sum();
        (total * 10.0).round() / 10.0
    }

    /// Whether any primary zone is a quality zone
    #[must_use]
    pub fn is_quality(&self) -> bool {
        self.main_zones.iter().any(ZoneCode::is_quality)
    }

    /// Whether the only primary zone is Easy
    #[must_use]
    pub fn is_easy_only(&self) -> bool {
        self.main_zones == [ZoneCode::Easy]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_from_parts_requires_exactly_one() {
        assert_eq!(
            Extent::from_parts(None, None).unwrap_err().code,
            ErrorCode::MissingSegmentBound
        );
        assert_eq!(
            Extent::from_parts(Some(400.0), Some(2.0)).unwrap_err().code,
            ErrorCode::MissingSegmentBound
        );
        assert_eq!(
            Extent::from_parts(Some(400.0), None).unwrap(),
            Extent::meters(400.0)
        );
        assert_eq!(
            Extent::from_parts(None, Some(2.0)).unwrap(),
            Extent::minutes(2.0)
        );
    }

    #[test]
    fn test_segment_json_shape() {
        let json = r#"{"distance_m": 5000.0, "zone": "I", "note": "time trial"}"#;
        let segment: ContinuousSegment = serde_json::from_str(json).unwrap();
        assert_eq!(segment.extent, Extent::km(5.0));
        assert_eq!(segment.zone, ZoneCode::Interval);

        let bad = r#"{"zone": "E"}"#;
        assert!(serde_json::from_str::<ContinuousSegment>(bad).is_err());
    }

    #[test]
    fn test_estimated_distance_for_cruise_intervals() {
        // 15' E + 4 x (5' T + 1' E) + 10' E
        let template = SessionTemplate::new(
            "T_CRUISE_4x5",
            "4 x 5' @ T",
            PhaseLabel::Threshold,
            vec![ZoneCode::Threshold],
        )
        .warmup(vec![ContinuousSegment::minutes(15.0, ZoneCode::Easy)])
        .main(vec![IntervalBlock::new(
            4,
            Extent::minutes(5.0),
            ZoneCode::Threshold,
            Extent::minutes(1.0),
            ZoneCode::Easy,
        )
        .into()])
        .cooldown(vec![ContinuousSegment::minutes(10.0, ZoneCode::Easy)]);

        let expected = 15.0 / 6.0 + 4.0 * (5.0 / 4.25 + 1.0 / 6.0) + 10.0 / 6.0;
        let rounded = (expected * 10.0_f64).round() / 10.0;
        assert!((template.estimated_distance_km() - rounded).abs() < 1e-9);
        assert!(template.is_quality());
        assert!(!template.is_easy_only());
    }
}
