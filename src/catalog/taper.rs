// ABOUTME: Taper templates: reduced volume with short strides or interval touches
// ABOUTME: Keeps rhythm in race week without adding fatigue
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, repeats};
use planner_core::models::{Extent, PhaseLabel, SessionTemplate, ZoneCode};

const E: ZoneCode = ZoneCode::Easy;
const I: ZoneCode = ZoneCode::Interval;
const R: ZoneCode = ZoneCode::Repetition;

/// Taper templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    vec![
        SessionTemplate::new(
            "TP_EASY_30",
            "Easy 30' + 4x20\" strides",
            PhaseLabel::Taper,
            vec![E, R],
        )
        .warmup(vec![easy(10.0)])
        .main(vec![easy(20.0).note("Easy").into()])
        .cooldown(vec![easy(5.0)])
        .base_distance_km(6.0)
        .description("Stay light and include a few short strides."),
        SessionTemplate::new(
            "TP_SHARPEN_3x400",
            "Easy 25' + 3 x 400m @ I",
            PhaseLabel::Taper,
            vec![E, I],
        )
        .warmup(vec![easy(12.0)])
        .main(vec![
            easy(13.0).note("Steady easy running").into(),
            repeats(3, Extent::meters(400.0), I, Extent::minutes(2.0))
                .note("Short touch of I to feel the rhythm")
                .into(),
        ])
        .cooldown(vec![easy(8.0)])
        .base_distance_km(7.0)
        .description("Keeps rhythm without building fatigue in race week."),
        SessionTemplate::new("TP_2x1K", "2 x 1000m light @ I", PhaseLabel::Taper, vec![I])
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(2, Extent::meters(1000.0), I, Extent::minutes(3.0))
                .note("2x1000m only to hold the feel of pace")
                .into()])
            .cooldown(vec![easy(10.0)])
            .base_distance_km(8.0)
            .description("A touch of I on much reduced volume."),
        SessionTemplate::new(
            "TP_EASY_TUNEUP",
            "Easy 35' with strides and drills",
            PhaseLabel::Taper,
            vec![E, R],
        )
        .warmup(vec![easy(12.0)])
        .main(vec![
            easy(18.0).note("Loose easy running").into(),
            repeats(6, Extent::minutes(0.25), R, Extent::minutes(1.0))
                .note("Strides to stay reactive")
                .into(),
        ])
        .cooldown(vec![easy(5.0)])
        .base_distance_km(7.0)
        .description("Moderate volume with strides to arrive fresh and quick."),
    ]
}
