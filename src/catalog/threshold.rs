// ABOUTME: Threshold-phase templates generated from tempo, cruise and combination preset tables
// ABOUTME: Fifty sessions; nominal distance estimated from each session's segments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, name_from_code, repeats};
use planner_core::models::{
    ContinuousSegment, Extent, PhaseLabel, Segment, SessionTemplate, ZoneCode,
};

const E: ZoneCode = ZoneCode::Easy;
const T: ZoneCode = ZoneCode::Threshold;
const I: ZoneCode = ZoneCode::Interval;
const R: ZoneCode = ZoneCode::Repetition;

/// Continuous tempo durations (minutes)
const TEMPO_MINUTES: [u32; 14] = [16, 18, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40, 42, 44];

/// Cruise intervals: (reps, work minutes, recovery minutes)
const CRUISE_PRESETS: [(u32, f64, f64); 13] = [
    (4, 6.0, 1.5),
    (5, 6.0, 1.0),
    (6, 5.0, 1.0),
    (7, 4.0, 1.0),
    (8, 3.5, 1.0),
    (5, 7.0, 1.5),
    (3, 10.0, 2.0),
    (4, 9.0, 2.0),
    (6, 4.5, 1.0),
    (7, 5.0, 1.5),
    (8, 3.0, 1.0),
    (5, 8.0, 1.5),
    (4, 12.0, 2.0),
];

/// High-volume threshold repeats: (code, reps, work minutes, recovery minutes)
const COMBO_PRESETS: [(&str, u32, f64, f64); 6] = [
    ("T_COMBO_2x15", 2, 15.0, 3.0),
    ("T_COMBO_3x12", 3, 12.0, 2.0),
    ("T_COMBO_4x10", 4, 10.0, 2.0),
    ("T_COMBO_6x8", 6, 8.0, 1.5),
    ("T_COMBO_8x6", 8, 6.0, 1.0),
    ("T_COMBO_10x5", 10, 5.0, 1.0),
];

/// Threshold templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    signature_sessions()
        .into_iter()
        .chain(tempo_sessions())
        .chain(cruise_sessions())
        .chain(mixed_sessions())
        .chain(combo_sessions())
        .map(SessionTemplate::with_estimated_distance)
        .collect()
}

/// Minutes as shown in names and codes: `6` or `3.5`
pub(crate) fn minutes_label(minutes: f64) -> String {
    if minutes.fract().abs() < f64::EPSILON {
        format!("{minutes:.0}")
    } else {
        format!("{minutes}")
    }
}

fn threshold(code: &str, name: impl Into<String>) -> SessionTemplate {
    SessionTemplate::new(code, name, PhaseLabel::Threshold, vec![T])
}

fn tempo(minutes: f64) -> ContinuousSegment {
    ContinuousSegment::minutes(minutes, T)
}

fn signature_sessions() -> Vec<SessionTemplate> {
    vec![
        threshold("T_TEMPO_20", "Tempo Run 20'")
            .warmup(vec![easy(15.0)])
            .main(vec![tempo(20.0).note("Continuous tempo").into()])
            .cooldown(vec![easy(10.0)])
            .description("Continuous ~20' tempo at T pace."),
        threshold("T_3x8", "3 x 8' @ T")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(3, Extent::minutes(8.0), T, Extent::minutes(2.0))
                .note("Three sustained threshold blocks")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Longer threshold intervals to lock in T pace."),
        threshold("T_CRUISE_4x5", "4 x 5' @ T")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(4, Extent::minutes(5.0), T, Extent::minutes(1.0))
                .note("Cruise intervals at T")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Cruise intervals: 4x5' @ T with 1' E."),
        threshold("T_5x6", "5 x 6' @ T")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(5, Extent::minutes(6.0), T, Extent::minutes(1.5))
                .note("6' cruise intervals")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("More time at T to raise capacity near race pace."),
        SessionTemplate::new(
            "T_TEMPO_FINISH",
            "Tempo 25' + controlled finish",
            PhaseLabel::Threshold,
            vec![T, I],
        )
        .warmup(vec![easy(15.0)])
        .main(vec![
            tempo(20.0).note("Continuous tempo").into(),
            repeats(4, Extent::minutes(0.5), I, Extent::minutes(1.0))
                .note("Short pickups easing the move to I sessions")
                .into(),
        ])
        .cooldown(vec![easy(10.0)])
        .description("Extended tempo followed by quick pickups for neuromuscular work."),
    ]
}

fn tempo_sessions() -> impl Iterator<Item = SessionTemplate> {
    TEMPO_MINUTES.into_iter().map(|minutes| {
        threshold(
            &format!("T_TEMPO_{minutes}"),
            format!("Tempo Run {minutes}'"),
        )
        .warmup(vec![easy(12.0)])
        .main(vec![tempo(f64::from(minutes))
            .note("Controlled continuous tempo")
            .into()])
        .cooldown(vec![easy(8.0)])
        .description("Continuous tempo to sustain threshold pace.")
    })
}

fn cruise_sessions() -> impl Iterator<Item = SessionTemplate> {
    CRUISE_PRESETS.into_iter().map(|(reps, work, recovery)| {
        let label = minutes_label(work);
        threshold(
            &format!("T_CRUISE_{reps}x{}", label.replace('.', "_")),
            format!("{reps} x {label}' @ T"),
        )
        .warmup(vec![easy(14.0)])
        .main(vec![repeats(reps, Extent::minutes(work), T, Extent::minutes(recovery))
            .note("Cruise intervals at threshold pace")
            .into()])
        .cooldown(vec![easy(10.0)])
        .description("Threshold repeats with short recoveries to build quality time.")
    })
}

fn mixed_sessions() -> impl Iterator<Item = SessionTemplate> {
    let progressive = |t_minutes: f64| -> Vec<Segment> {
        vec![
            easy(15.0).into(),
            tempo(t_minutes).into(),
            ContinuousSegment::minutes(5.0, I).into(),
        ]
    };
    let alternating = |t_minutes: f64, e_minutes: f64, finish: f64| -> Vec<Segment> {
        vec![
            tempo(t_minutes).into(),
            easy(e_minutes).into(),
            tempo(finish).into(),
        ]
    };

    let blocks: Vec<(&str, Vec<Segment>)> = vec![
        ("T_PROGRESSIVE_40", progressive(10.0)),
        ("T_PROGRESSIVE_45", progressive(15.0)),
        ("T_PROGRESSIVE_50", progressive(20.0)),
        (
            "T_E_FLT_6x6",
            vec![repeats(6, Extent::minutes(6.0), T, Extent::minutes(2.0))
                .note("T/E float")
                .into()],
        ),
        (
            "T_E_FLT_5x8",
            vec![repeats(5, Extent::minutes(8.0), T, Extent::minutes(2.0))
                .note("Long T/E float")
                .into()],
        ),
        ("T_ALT_20_30", alternating(10.0, 10.0, 10.0)),
        ("T_ALT_15_45", alternating(15.0, 15.0, 15.0)),
        (
            "T_FINISH_STRIDES",
            vec![
                tempo(25.0).into(),
                repeats(6, Extent::minutes(0.33), R, Extent::minutes(1.0))
                    .note("Post-tempo strides")
                    .into(),
            ],
        ),
        ("T_SANDWICH_3x10", alternating(10.0, 10.0, 10.0)),
        ("T_LONG_FINISH", alternating(30.0, 10.0, 5.0)),
        (
            "T_PROGRESSIVE_HILL",
            vec![
                easy(15.0).into(),
                repeats(6, Extent::minutes(0.5), I, Extent::minutes(1.0))
                    .note("Gentle uphill")
                    .into(),
                tempo(18.0).into(),
            ],
        ),
        (
            "T_CRESCENDO_4x7",
            vec![repeats(4, Extent::minutes(7.0), T, Extent::minutes(1.5))
                .note("Nudge the pace up each block")
                .into()],
        ),
    ];

    blocks.into_iter().map(|(code, main)| {
        threshold(code, name_from_code(code))
            .warmup(vec![easy(15.0)])
            .main(main)
            .cooldown(vec![easy(10.0)])
            .description("Threshold variation with progressive or mixed blocks.")
    })
}

fn combo_sessions() -> impl Iterator<Item = SessionTemplate> {
    COMBO_PRESETS.into_iter().map(|(code, reps, work, recovery)| {
        threshold(
            code,
            format!(
                "{reps} x {}' @ T (rec {}')",
                minutes_label(work),
                minutes_label(recovery)
            ),
        )
        .warmup(vec![easy(12.0)])
        .main(vec![repeats(reps, Extent::minutes(work), T, Extent::minutes(recovery))
            .note("Controlled cruise repeats")
            .into()])
        .cooldown(vec![easy(8.0)])
        .description("High accumulated time at T with brief recoveries.")
    })
}
