// ABOUTME: Future-capacity projection and milestone date forecasting from a progression analysis
// ABOUTME: Extrapolates the measured 1RM trend with a detraining discount for stale histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use crate::errors::{AppError, AppResult};
use crate::physiological_constants::forecast::{
    MAX_FORECAST_HORIZON_DAYS, MIN_FORECAST_DAILY_RATE_KG, STALE_RATE_MULTIPLIER,
};
use crate::progression_analyzer::ProgressionAnalysis;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// When the next milestone attempt is forecast for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneDate {
    /// No forecast possible: trend is flat, declining, or unmeasured
    Unknown,
    /// Forecast lands beyond a year out; refusing false precision
    BeyondOneYear,
    /// Concrete forecast date
    On(DateTime<Utc>),
}

impl fmt::Display for MilestoneDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::BeyondOneYear => write!(f, "> 1 Year"),
            Self::On(date) => write!(f, "{}", date.format("%b %-d")),
        }
    }
}

/// Next round-number milestone and when it is forecast to be reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneForecast {
    /// Milestone weight: the next grid line strictly above the baseline (kg)
    pub target_kg: f64,
    /// Forecast attempt date, aligned to the lifter's strongest weekday
    pub attempt: MilestoneDate,
}

/// Strength forecasting engine
pub struct StrengthPredictor;

impl StrengthPredictor {
    /// Extrapolate a future 1RM at a horizon of `weeks` from a baseline.
    ///
    /// Without trend signal the baseline is returned unchanged. A stale
    /// trend's projected growth is halved (detraining discount). An
    /// improving trend never projects below the baseline.
    #[must_use]
    pub fn predict_future_max(
        baseline_1rm_kg: f64,
        weeks: u32,
        analysis: &ProgressionAnalysis,
    ) -> f64 {
        if !analysis.has_enough_data {
            return baseline_1rm_kg;
        }

        let rate_multiplier = if analysis.is_stale {
            STALE_RATE_MULTIPLIER
        } else {
            1.0
        };

        let projected_gain =
            analysis.daily_rate_kg * 7.0 * f64::from(weeks) * rate_multiplier;

        // Guard against a sign error upstream: an improving trend must not
        // show a predicted loss
        if analysis.daily_rate_kg > 0.0 && projected_gain < 0.0 {
            return baseline_1rm_kg;
        }

        baseline_1rm_kg + projected_gain
    }

    /// The smallest multiple of `step_kg` strictly greater than the
    /// baseline; a baseline exactly on a grid line advances one full step.
    #[must_use]
    pub fn next_milestone_target(baseline_1rm_kg: f64, step_kg: f64) -> f64 {
        (baseline_1rm_kg / step_kg).floor().mul_add(step_kg, step_kg)
    }

    /// Forecast the next milestone as of the current instant
    pub fn predict_next_milestone(
        baseline_1rm_kg: f64,
        analysis: &ProgressionAnalysis,
        step_kg: f64,
    ) -> AppResult<MilestoneForecast> {
        Self::predict_next_milestone_at(baseline_1rm_kg, analysis, step_kg, Utc::now())
    }

    /// Forecast the next milestone as of an explicit evaluation instant.
    ///
    /// Returns `MilestoneDate::Unknown` when the measured momentum is flat
    /// or declining, `BeyondOneYear` past the forecast horizon, otherwise a
    /// concrete date advanced (never moved backward) to the lifter's
    /// historically strongest weekday.
    pub fn predict_next_milestone_at(
        baseline_1rm_kg: f64,
        analysis: &ProgressionAnalysis,
        step_kg: f64,
        now: DateTime<Utc>,
    ) -> AppResult<MilestoneForecast> {
        if !step_kg.is_finite() || step_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Milestone step must be a positive finite weight, got {step_kg}"
            )));
        }

        if !baseline_1rm_kg.is_finite() || baseline_1rm_kg < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Baseline 1RM must be a non-negative finite weight, got {baseline_1rm_kg}"
            )));
        }

        let target_kg = Self::next_milestone_target(baseline_1rm_kg, step_kg);

        if !analysis.has_enough_data || analysis.daily_rate_kg <= MIN_FORECAST_DAILY_RATE_KG {
            return Ok(MilestoneForecast {
                target_kg,
                attempt: MilestoneDate::Unknown,
            });
        }

        let effective_rate = if analysis.is_stale {
            analysis.daily_rate_kg * STALE_RATE_MULTIPLIER
        } else {
            analysis.daily_rate_kg
        };

        let days_to_target = (target_kg - baseline_1rm_kg) / effective_rate;
        if days_to_target > MAX_FORECAST_HORIZON_DAYS {
            return Ok(MilestoneForecast {
                target_kg,
                attempt: MilestoneDate::BeyondOneYear,
            });
        }

        let mut attempt_date = now + Duration::days(days_to_target.ceil() as i64);

        // Align the attempt with the strongest training day: advance 0-6
        // days forward to the next occurrence of that weekday
        if let Some(optimal_day) = analysis.optimal_day {
            let current = attempt_date.weekday().num_days_from_sunday();
            let wanted = optimal_day.num_days_from_sunday();
            let adjustment = (wanted + 7 - current) % 7;
            attempt_date += Duration::days(i64::from(adjustment));
        }

        Ok(MilestoneForecast {
            target_kg,
            attempt: MilestoneDate::On(attempt_date),
        })
    }
}
