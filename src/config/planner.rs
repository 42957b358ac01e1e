// ABOUTME: Plan-generation configuration loaded from PIERRE_PLAN_* environment variables
// ABOUTME: Supplies default plan length, weekly volume range and VDOT algorithm
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use planner_core::constants::defaults;
use planner_core::ConfigError;
use planner_intelligence::VdotAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Environment variable for the plan length in weeks
pub const TOTAL_WEEKS_VAR: &str = "PIERRE_PLAN_TOTAL_WEEKS";
/// Environment variable for the starting weekly volume (km)
pub const INITIAL_VOLUME_VAR: &str = "PIERRE_PLAN_INITIAL_VOLUME_KM";
/// Environment variable for the peak weekly volume (km)
pub const PEAK_VOLUME_VAR: &str = "PIERRE_PLAN_PEAK_VOLUME_KM";
/// Environment variable for the VDOT estimation algorithm
pub const VDOT_ALGORITHM_VAR: &str = "PIERRE_PLAN_VDOT_ALGORITHM";

/// Defaults applied to plan requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Plan length in weeks
    pub total_weeks: u32,
    /// Starting weekly volume (km)
    pub initial_weekly_volume_km: f64,
    /// Peak weekly volume (km)
    pub peak_weekly_volume_km: f64,
    /// Race-time-to-VDOT estimator
    pub vdot_algorithm: VdotAlgorithm,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            total_weeks: defaults::TOTAL_WEEKS,
            initial_weekly_volume_km: defaults::INITIAL_WEEKLY_VOLUME_KM,
            peak_weekly_volume_km: defaults::PEAK_WEEKLY_VOLUME_KM,
            vdot_algorithm: VdotAlgorithm::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment, falling back to defaults
    ///
    /// Unset or unparseable variables keep their default value.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            total_weeks: env::var(TOTAL_WEEKS_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::TOTAL_WEEKS),
            initial_weekly_volume_km: env::var(INITIAL_VOLUME_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::INITIAL_WEEKLY_VOLUME_KM),
            peak_weekly_volume_km: env::var(PEAK_VOLUME_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::PEAK_WEEKLY_VOLUME_KM),
            vdot_algorithm: env::var(VDOT_ALGORITHM_VAR)
                .ok()
                .and_then(|s| match VdotAlgorithm::from_str(&s) {
                    Ok(algorithm) => Some(algorithm),
                    Err(e) => {
                        warn!("Ignoring {VDOT_ALGORITHM_VAR}: {e}");
                        None
                    }
                })
                .unwrap_or_default(),
        }
    }

    /// Load configuration from environment, rejecting unparseable values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for a variable that is set but cannot be
    /// parsed, and any error from [`Self::validate`]
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            total_weeks: parse_var(TOTAL_WEEKS_VAR)?.unwrap_or(defaults.total_weeks),
            initial_weekly_volume_km: parse_var(INITIAL_VOLUME_VAR)?
                .unwrap_or(defaults.initial_weekly_volume_km),
            peak_weekly_volume_km: parse_var(PEAK_VOLUME_VAR)?
                .unwrap_or(defaults.peak_weekly_volume_km),
            vdot_algorithm: parse_var(VDOT_ALGORITHM_VAR)?.unwrap_or(defaults.vdot_algorithm),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the plan has no weeks, a volume is not positive,
    /// or the peak volume is below the initial volume
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_weeks == 0 {
            return Err(ConfigError::InvalidRange("total_weeks must be at least 1"));
        }
        if !(self.initial_weekly_volume_km.is_finite() && self.initial_weekly_volume_km > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "initial_weekly_volume_km must be positive",
            ));
        }
        if !(self.peak_weekly_volume_km.is_finite() && self.peak_weekly_volume_km > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "peak_weekly_volume_km must be positive",
            ));
        }
        if self.peak_weekly_volume_km < self.initial_weekly_volume_km {
            return Err(ConfigError::InvalidRange(
                "peak_weekly_volume_km must not be below initial_weekly_volume_km",
            ));
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{name}={raw}: {e}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_weeks, 8);
        assert_eq!(config.vdot_algorithm, VdotAlgorithm::DanielsGilbert);
    }

    #[test]
    fn test_peak_below_initial_rejected() {
        let config = PlannerConfig {
            peak_weekly_volume_km: 20.0,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
