// ABOUTME: Race-specific templates bringing threshold and interval work toward 5K race pace
// ABOUTME: Includes a 5K time-trial simulation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, repeats};
use planner_core::models::{ContinuousSegment, Extent, PhaseLabel, SessionTemplate, ZoneCode};

const T: ZoneCode = ZoneCode::Threshold;
const I: ZoneCode = ZoneCode::Interval;
const R: ZoneCode = ZoneCode::Repetition;

/// Race-specific templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    vec![
        SessionTemplate::new(
            "RS_3x1600",
            "3 x 1600m (between T and I)",
            PhaseLabel::RaceSpecific,
            vec![T, I],
        )
        .warmup(vec![easy(15.0)])
        .main(vec![repeats(3, Extent::meters(1600.0), T, Extent::minutes(3.0))
            .note("3x1600m between T and I pace")
            .into()])
        .cooldown(vec![easy(10.0)])
        .base_distance_km(10.0)
        .description("Specific session closing in on race pace."),
        SessionTemplate::new(
            "RS_2x2K",
            "2 x 2000m (T to I)",
            PhaseLabel::RaceSpecific,
            vec![T, I],
        )
        .warmup(vec![easy(18.0)])
        .main(vec![
            repeats(2, Extent::meters(2000.0), T, Extent::minutes(3.0))
                .note("First block at controlled T")
                .into(),
            repeats(1, Extent::meters(1000.0), I, Extent::minutes(2.0))
                .note("Finish near race pace")
                .into(),
        ])
        .cooldown(vec![easy(10.0)])
        .base_distance_km(11.0)
        .description("Long T blocks with a touch of I for specific rhythm."),
        SessionTemplate::new(
            "RS_5K_SIM",
            "5K simulation",
            PhaseLabel::RaceSpecific,
            vec![T, I, R],
        )
        .warmup(vec![easy(20.0)])
        .main(vec![ContinuousSegment::km(5.0, I)
            .note("5K race pace / time trial")
            .into()])
        .cooldown(vec![easy(10.0)])
        .base_distance_km(10.0)
        .description("5K simulation (time trial)."),
        SessionTemplate::new(
            "RS_KM_FINISH",
            "3K continuous + 4 x 400m",
            PhaseLabel::RaceSpecific,
            vec![T, I, R],
        )
        .warmup(vec![easy(18.0)])
        .main(vec![
            ContinuousSegment::km(3.0, T).note("Strong continuous").into(),
            repeats(4, Extent::meters(400.0), I, Extent::meters(200.0))
                .note("Fast 400s to close the session")
                .into(),
        ])
        .cooldown(vec![easy(10.0)])
        .base_distance_km(11.0)
        .description("Strong continuous block with short repeats to finish."),
    ]
}
