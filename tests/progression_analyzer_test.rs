// ABOUTME: Tests for progression trend analysis over workout log histories
// ABOUTME: Covers filtering, rate computation, clamping, staleness, and behavioral buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc, Weekday};
use liftlog_intelligence::{
    estimate_one_rm, ProgressionAnalyzer, TimeOfDay, WorkoutEntry,
};

fn entry(recorded_at: DateTime<Utc>, reps: u32, weight_kg: f64) -> WorkoutEntry {
    WorkoutEntry::new(recorded_at, "bench_press", reps, Some(weight_kg))
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn empty_history_has_no_signal() {
    let analyzer = ProgressionAnalyzer::new();
    let analysis = analyzer.analyze(&[], "bicep_curls");

    assert!(!analysis.has_enough_data);
    assert!((analysis.historical_peak_1rm_kg - 0.0).abs() < f64::EPSILON);
    assert!((analysis.projected_current_1rm_kg - 0.0).abs() < f64::EPSILON);
    assert!((analysis.daily_rate_kg - 0.0).abs() < f64::EPSILON);
    assert!(analysis.best_date.is_none());
    assert!(analysis.optimal_day.is_none());
    assert_eq!(analysis.optimal_day_index(), -1);
    assert_eq!(analysis.optimal_day_name(), "Anytime");
    assert_eq!(analysis.optimal_time, TimeOfDay::Anytime);
}

#[test]
fn unrelated_and_unweighted_entries_are_excluded() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        // Different exercise
        WorkoutEntry::new(now - Duration::days(20), "squat", 5, Some(100.0)),
        // Bodyweight set
        WorkoutEntry::new(now - Duration::days(15), "bench_press", 10, None),
        // Zero reps
        WorkoutEntry::new(now - Duration::days(10), "bench_press", 0, Some(60.0)),
        // Non-positive weight
        WorkoutEntry::new(now - Duration::days(5), "bench_press", 5, Some(0.0)),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(!analysis.has_enough_data);
    assert!((analysis.historical_peak_1rm_kg - 0.0).abs() < f64::EPSILON);
}

#[test]
fn single_entry_is_insufficient_but_tracks_the_best() {
    let now = at(2024, 6, 30, 12);
    let best = now - Duration::days(3);
    let logs = vec![entry(best, 5, 50.0)];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(!analysis.has_enough_data);
    assert_eq!(analysis.best_date, Some(best));
    assert_eq!(analysis.days_since_best, 3);
    let expected_peak = estimate_one_rm(50.0, 5);
    assert!((analysis.historical_peak_1rm_kg - expected_peak).abs() < 1e-9);
    assert!((analysis.projected_current_1rm_kg - expected_peak).abs() < 1e-9);
}

#[test]
fn short_span_is_insufficient_even_with_two_entries() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(now - Duration::days(5), 5, 40.0),
        entry(now - Duration::days(1), 5, 50.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(!analysis.has_enough_data);
    assert_eq!(analysis.days_since_best, 1);
    assert!((analysis.daily_rate_kg - 0.0).abs() < f64::EPSILON);
}

#[test]
fn ten_day_improvement_yields_positive_clamped_rate() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(now - Duration::days(11), 5, 40.0),
        entry(now - Duration::days(1), 5, 50.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(analysis.has_enough_data);
    assert!(analysis.daily_rate_kg > 0.0);
    // Raw slope is ~1.15 kg/day, far above the upper clamp
    assert!((analysis.daily_rate_kg - 0.5).abs() < 1e-9);
    assert!((analysis.weekly_rate_kg - 3.5).abs() < 1e-9);
}

#[test]
fn gentle_improvement_is_not_clamped() {
    let now = at(2024, 6, 30, 12);
    let first = now - Duration::days(11);
    let last = now - Duration::days(1);
    let logs = vec![entry(first, 5, 40.0), entry(last, 5, 41.0)];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    let expected =
        (estimate_one_rm(41.0, 5) - estimate_one_rm(40.0, 5)) / 10.0;
    assert!((analysis.daily_rate_kg - expected).abs() < 1e-9);
    assert!((analysis.weekly_rate_kg - expected * 7.0).abs() < 1e-9);
}

#[test]
fn steep_decline_clamps_to_the_lower_bound() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(now - Duration::days(11), 5, 100.0),
        entry(now - Duration::days(1), 5, 20.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!((analysis.daily_rate_kg - (-0.1)).abs() < 1e-9);
}

#[test]
fn sustained_climb_uses_first_to_peak_slope() {
    let now = at(2024, 6, 30, 12);
    let first = now - Duration::days(30);
    let best = now - Duration::days(2);
    let logs = vec![entry(first, 5, 40.0), entry(best, 5, 50.0)];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    // 28 days to peak: the first-to-peak leg sets the rate
    let expected =
        (estimate_one_rm(50.0, 5) - estimate_one_rm(40.0, 5)) / 28.0;
    assert!((analysis.daily_rate_kg - expected).abs() < 1e-9);
    assert!(!analysis.is_stale);

    // Fresh improving trend projects forward from the peak
    let projected = analysis
        .daily_rate_kg
        .mul_add(2.0, analysis.historical_peak_1rm_kg);
    assert!((analysis.projected_current_1rm_kg - projected).abs() < 1e-9);
}

#[test]
fn stale_positive_trend_freezes_at_peak() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(now - Duration::days(100), 5, 40.0),
        entry(now - Duration::days(40), 5, 60.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(analysis.has_enough_data);
    assert!(analysis.daily_rate_kg > 0.0);
    assert_eq!(analysis.days_since_best, 40);
    assert!(analysis.is_stale);
    // Maintenance assumption: no unproven growth projected after a layoff
    assert!(
        (analysis.projected_current_1rm_kg - analysis.historical_peak_1rm_kg).abs() < 1e-9
    );
}

#[test]
fn decline_projects_forward_even_when_stale() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(now - Duration::days(40), 5, 100.0),
        entry(now - Duration::days(10), 5, 30.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(analysis.is_stale);
    assert!((analysis.daily_rate_kg - (-0.1)).abs() < 1e-9);
    // Peak was 40 days ago; the clamped decline keeps eroding it
    let expected = analysis.historical_peak_1rm_kg - 0.1 * 40.0;
    assert!((analysis.projected_current_1rm_kg - expected).abs() < 1e-9);
}

#[test]
fn projected_decline_never_goes_negative() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(now - Duration::days(2000), 5, 100.0),
        entry(now - Duration::days(1990), 5, 20.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert!(analysis.daily_rate_kg < 0.0);
    assert!((analysis.projected_current_1rm_kg - 0.0).abs() < f64::EPSILON);
}

#[test]
fn strongest_weekday_and_band_win_by_average() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        // Mondays in the morning, heavy
        entry(at(2024, 6, 3, 8), 5, 100.0),
        entry(at(2024, 6, 10, 8), 5, 102.0),
        // Wednesday afternoon, lighter
        entry(at(2024, 6, 5, 13), 5, 80.0),
        // Saturday evening, lightest
        entry(at(2024, 6, 15, 19), 5, 60.0),
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert_eq!(analysis.optimal_day, Some(Weekday::Mon));
    assert_eq!(analysis.optimal_day_index(), 1);
    assert_eq!(analysis.optimal_day_name(), "Monday");
    assert_eq!(analysis.optimal_time, TimeOfDay::Morning);
}

#[test]
fn weekday_ties_resolve_sunday_first() {
    let now = at(2024, 6, 30, 12);
    let logs = vec![
        entry(at(2024, 6, 2, 9), 5, 100.0),  // Sunday
        entry(at(2024, 6, 3, 9), 5, 100.0),  // Monday, identical estimate
        entry(at(2024, 6, 9, 9), 5, 100.0),  // Sunday again
    ];

    let analysis = ProgressionAnalyzer::new().analyze_at(&logs, "bench_press", now);
    assert_eq!(analysis.optimal_day, Some(Weekday::Sun));
    assert_eq!(analysis.optimal_day_index(), 0);
    // Flat history: no measurable rate, projection holds at the peak
    assert!((analysis.daily_rate_kg - 0.0).abs() < f64::EPSILON);
    assert!(
        (analysis.projected_current_1rm_kg - analysis.historical_peak_1rm_kg).abs() < 1e-9
    );
}

#[test]
fn time_of_day_band_boundaries() {
    assert_eq!(TimeOfDay::from_hour(3), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
}

#[test]
fn all_outputs_stay_finite_and_clamped_across_magnitudes() {
    let now = at(2024, 6, 30, 12);
    let analyzer = ProgressionAnalyzer::new();

    for &weight in &[0.001, 1.0, 500.0, 1.0e6, 5.0e8] {
        for &reps in &[1_u32, 5, 36, 37, 100] {
            let logs = vec![
                entry(now - Duration::days(20), reps, weight),
                entry(now - Duration::days(1), reps, weight * 1.5),
            ];
            let analysis = analyzer.analyze_at(&logs, "bench_press", now);

            assert!(analysis.historical_peak_1rm_kg.is_finite());
            assert!(analysis.projected_current_1rm_kg.is_finite());
            assert!(analysis.historical_peak_1rm_kg >= 0.0);
            assert!(analysis.projected_current_1rm_kg >= 0.0);
            assert!(
                analysis.daily_rate_kg >= -0.1 && analysis.daily_rate_kg <= 0.5,
                "rate {} out of clamp for weight={weight} reps={reps}",
                analysis.daily_rate_kg
            );
        }
    }
}
