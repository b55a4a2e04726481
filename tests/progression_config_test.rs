// ABOUTME: Tests for progression configuration defaults and validation
// ABOUTME: Covers constant-backed defaults, env fallback, and inconsistent threshold rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlog_intelligence::{ErrorCode, ProgressionConfig};

#[test]
fn defaults_match_the_published_thresholds() {
    let config = ProgressionConfig::default();
    assert_eq!(config.staleness_threshold_days, 30);
    assert_eq!(config.min_history_span_days, 7);
    assert_eq!(config.sustained_trend_min_days, 14);
    assert!((config.daily_rate_min_kg - (-0.1)).abs() < f64::EPSILON);
    assert!((config.daily_rate_max_kg - 0.5).abs() < f64::EPSILON);
    assert!((config.milestone_step_kg - 2.5).abs() < f64::EPSILON);
    config.validate().unwrap();
}

#[test]
fn from_env_falls_back_to_defaults_when_unset() {
    // No PROGRESSION_* vars are set in the test environment
    assert_eq!(ProgressionConfig::from_env(), ProgressionConfig::default());
}

#[test]
fn inverted_rate_clamp_is_rejected() {
    let config = ProgressionConfig {
        daily_rate_min_kg: 0.5,
        daily_rate_max_kg: -0.1,
        ..ProgressionConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn non_positive_thresholds_are_rejected() {
    let config = ProgressionConfig {
        staleness_threshold_days: 0,
        ..ProgressionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = ProgressionConfig {
        min_history_span_days: -1,
        ..ProgressionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = ProgressionConfig {
        milestone_step_kg: 0.0,
        ..ProgressionConfig::default()
    };
    assert!(config.validate().is_err());
}
