// ABOUTME: Repetition-phase (speed and economy) templates from short-rep preset tables
// ABOUTME: Fifty sessions; nominal distance estimated from each session's segments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, name_from_code, repeats};
use planner_core::models::{Extent, IntervalBlock, PhaseLabel, Segment, SessionTemplate, ZoneCode};

const E: ZoneCode = ZoneCode::Easy;
const R: ZoneCode = ZoneCode::Repetition;

/// Short repeats with full recovery: (code, reps, work m, recovery m)
const REPEAT_SETS: [(&str, u32, f64, f64); 15] = [
    ("R_10x150", 10, 150.0, 250.0),
    ("R_12x150", 12, 150.0, 250.0),
    ("R_14x150", 14, 150.0, 250.0),
    ("R_8x250", 8, 250.0, 250.0),
    ("R_10x250", 10, 250.0, 250.0),
    ("R_12x250", 12, 250.0, 250.0),
    ("R_8x300_SLOWREC", 8, 300.0, 300.0),
    ("R_10x300", 10, 300.0, 300.0),
    ("R_12x300", 12, 300.0, 300.0),
    ("R_8x350", 8, 350.0, 300.0),
    ("R_10x350", 10, 350.0, 300.0),
    ("R_12x350", 12, 350.0, 300.0),
    ("R_8x400", 8, 400.0, 300.0),
    ("R_10x400", 10, 400.0, 300.0),
    ("R_12x400", 12, 400.0, 300.0),
];

/// Repeats with shorter or float recoveries and hill variants
const ECONOMY_SETS: [(&str, u32, f64, f64); 17] = [
    ("R_16x150", 16, 150.0, 250.0),
    ("R_15x200", 15, 200.0, 200.0),
    ("R_16x200", 16, 200.0, 200.0),
    ("R_10x220", 10, 220.0, 220.0),
    ("R_12x220", 12, 220.0, 220.0),
    ("R_10x250_FASTREC", 10, 250.0, 200.0),
    ("R_12x300_FASTREC", 12, 300.0, 200.0),
    ("R_8x350_FASTREC", 8, 350.0, 200.0),
    ("R_6x400_FLOAT", 6, 400.0, 200.0),
    ("R_10x200_FLOAT", 10, 200.0, 150.0),
    ("R_12x150_HILL", 12, 150.0, 200.0),
    ("R_6x300_HILL", 6, 300.0, 300.0),
    ("R_8x500", 8, 500.0, 300.0),
    ("R_10x500", 10, 500.0, 300.0),
    ("R_12x500", 12, 500.0, 300.0),
    ("R_6x600", 6, 600.0, 300.0),
    ("R_8x600", 8, 600.0, 300.0),
];

/// Timed repeats: (code, reps, work minutes, recovery minutes)
const TIMED_SETS: [(&str, u32, f64, f64); 8] = [
    ("R_12x30s", 12, 0.5, 1.5),
    ("R_15x30s", 15, 0.5, 1.5),
    ("R_10x45s", 10, 0.75, 1.75),
    ("R_12x45s", 12, 0.75, 1.75),
    ("R_10x60s", 10, 1.0, 2.0),
    ("R_12x60s", 12, 1.0, 2.0),
    ("R_8x75s", 8, 1.25, 2.0),
    ("R_10x75s", 10, 1.25, 2.0),
];

/// Repetition templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    signature_sessions()
        .into_iter()
        .chain(distance_sessions(
            &REPEAT_SETS,
            "Fast repeats with full recovery",
            "Speed and form with generous recoveries.",
        ))
        .chain(distance_sessions(
            &ECONOMY_SETS,
            "Fast repeats focused on economy",
            "Wider range of volume at repetition pace.",
        ))
        .chain(timed_sessions())
        .chain(mixed_sessions())
        .map(SessionTemplate::with_estimated_distance)
        .collect()
}

fn repetition(code: &str, name: impl Into<String>) -> SessionTemplate {
    SessionTemplate::new(code, name, PhaseLabel::Repetition, vec![R])
}

fn reps_by_distance(reps: u32, work_m: f64, recovery_m: f64) -> IntervalBlock {
    repeats(reps, Extent::meters(work_m), R, Extent::meters(recovery_m))
}

fn signature_sessions() -> Vec<SessionTemplate> {
    vec![
        repetition("R_10x200", "10 x 200m @ R")
            .warmup(vec![easy(15.0)])
            .main(vec![reps_by_distance(10, 200.0, 200.0)
                .note("10x200m @ R")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Speed and neuromuscular session."),
        repetition("R_12x200", "12 x 200m @ R")
            .warmup(vec![easy(15.0)])
            .main(vec![reps_by_distance(12, 200.0, 200.0)
                .note("More volume in short repeats")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("More fast contacts while keeping good form."),
        repetition("R_8x300", "8 x 300m @ R")
            .warmup(vec![easy(15.0)])
            .main(vec![reps_by_distance(8, 300.0, 200.0)
                .note("8x300m @ R")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Slightly longer repeats at R."),
        repetition("R_6x400", "6 x 400m @ R")
            .warmup(vec![easy(15.0)])
            .main(vec![reps_by_distance(6, 400.0, 200.0)
                .note("Repetition pace with a focus on form")
                .into()])
            .cooldown(vec![easy(12.0)])
            .description("Longer R work for speed endurance."),
        SessionTemplate::new(
            "R_STRIDES_SANDWICH",
            "Easy 35' + 8x15\" strides",
            PhaseLabel::Repetition,
            vec![E, R],
        )
        .warmup(vec![easy(12.0)])
        .main(vec![
            easy(20.0).note("Continuous easy").into(),
            repeats(8, Extent::minutes(0.25), R, Extent::minutes(1.0))
                .note("Short strides for neuromuscular reinforcement")
                .into(),
        ])
        .cooldown(vec![easy(8.0)])
        .description("Light volume combined with strides for controlled speed."),
    ]
}

fn distance_sessions(
    presets: &'static [(&'static str, u32, f64, f64)],
    note: &'static str,
    description: &'static str,
) -> impl Iterator<Item = SessionTemplate> {
    presets.iter().map(move |&(code, reps, work, recovery)| {
        repetition(code, format!("{reps} x {work:.0}m @ R"))
            .warmup(vec![easy(14.0)])
            .main(vec![reps_by_distance(reps, work, recovery).note(note).into()])
            .cooldown(vec![easy(10.0)])
            .description(description)
    })
}

fn timed_sessions() -> impl Iterator<Item = SessionTemplate> {
    TIMED_SETS.into_iter().map(|(code, reps, work, recovery)| {
        repetition(code, format!("{reps} x {:.0}s @ R", work * 60.0))
            .warmup(vec![easy(12.0)])
            .main(vec![repeats(reps, Extent::minutes(work), R, Extent::minutes(recovery))
                .note("Repeats controlled by time")
                .into()])
            .cooldown(vec![easy(8.0)])
            .description("Speed controlled by the watch while keeping form sharp.")
    })
}

fn mixed_sessions() -> impl Iterator<Item = SessionTemplate> {
    let ladder: Vec<Segment> = [
        (150.0, 200.0),
        (200.0, 200.0),
        (250.0, 200.0),
        (300.0, 250.0),
        (350.0, 250.0),
        (400.0, 300.0),
        (300.0, 250.0),
        (250.0, 200.0),
        (200.0, 200.0),
        (150.0, 200.0),
    ]
    .into_iter()
    .map(|(work, recovery)| reps_by_distance(1, work, recovery).into())
    .collect();

    let blocks: Vec<(&str, Vec<Segment>)> = vec![
        (
            "R_STRIDES_10x20",
            vec![
                repeats(10, Extent::minutes(0.33), R, Extent::minutes(1.0))
                    .note("Strides")
                    .into(),
                easy(10.0).into(),
            ],
        ),
        (
            "R_HILL_SPRINTS_10x12s",
            vec![
                repeats(10, Extent::minutes(0.2), R, Extent::minutes(1.5))
                    .note("Sprints up a gentle hill")
                    .into(),
                easy(12.0).into(),
            ],
        ),
        (
            "R_MIX_200_300",
            vec![
                reps_by_distance(6, 200.0, 200.0).note("Opening").into(),
                reps_by_distance(4, 300.0, 200.0).note("Close").into(),
            ],
        ),
        (
            "R_MIX_200_400",
            vec![
                reps_by_distance(6, 200.0, 200.0).into(),
                reps_by_distance(4, 400.0, 300.0).into(),
            ],
        ),
        ("R_LADDER_150_400", ladder),
    ];

    blocks.into_iter().map(|(code, main)| {
        repetition(code, name_from_code(code))
            .warmup(vec![easy(15.0)])
            .main(main)
            .cooldown(vec![easy(10.0)])
            .description("Short mixes for neuromuscular reinforcement and form.")
    })
}
