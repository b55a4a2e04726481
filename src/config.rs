// ABOUTME: Progression analysis configuration with environment overrides
// ABOUTME: Defaults come from physiological constants; env vars override per deployment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use crate::errors::{AppError, AppResult};
use crate::physiological_constants::{forecast, trend};
use serde::{Deserialize, Serialize};
use std::env;

/// Tunable thresholds for progression analysis and milestone forecasting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Days since the best set after which a trend is stale
    pub staleness_threshold_days: i64,
    /// Minimum history span (days) required for trend computation
    pub min_history_span_days: i64,
    /// Time-to-peak (days) above which the first-to-peak slope is used
    pub sustained_trend_min_days: i64,
    /// Lower clamp on the daily 1RM rate (kg/day)
    pub daily_rate_min_kg: f64,
    /// Upper clamp on the daily 1RM rate (kg/day)
    pub daily_rate_max_kg: f64,
    /// Default milestone grid step (kg)
    pub milestone_step_kg: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            staleness_threshold_days: trend::STALENESS_THRESHOLD_DAYS,
            min_history_span_days: trend::MIN_HISTORY_SPAN_DAYS,
            sustained_trend_min_days: trend::SUSTAINED_TREND_MIN_DAYS,
            daily_rate_min_kg: trend::DAILY_RATE_MIN_KG,
            daily_rate_max_kg: trend::DAILY_RATE_MAX_KG,
            milestone_step_kg: forecast::DEFAULT_MILESTONE_STEP_KG,
        }
    }
}

impl ProgressionConfig {
    /// Load configuration from environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            staleness_threshold_days: env::var("PROGRESSION_STALENESS_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(trend::STALENESS_THRESHOLD_DAYS),
            min_history_span_days: env::var("PROGRESSION_MIN_SPAN_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(trend::MIN_HISTORY_SPAN_DAYS),
            sustained_trend_min_days: env::var("PROGRESSION_SUSTAINED_TREND_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(trend::SUSTAINED_TREND_MIN_DAYS),
            daily_rate_min_kg: env::var("PROGRESSION_DAILY_RATE_MIN_KG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(trend::DAILY_RATE_MIN_KG),
            daily_rate_max_kg: env::var("PROGRESSION_DAILY_RATE_MAX_KG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(trend::DAILY_RATE_MAX_KG),
            milestone_step_kg: env::var("PROGRESSION_MILESTONE_STEP_KG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(forecast::DEFAULT_MILESTONE_STEP_KG),
        }
    }

    /// Validate that the configured thresholds are internally consistent
    pub fn validate(&self) -> AppResult<()> {
        if self.staleness_threshold_days <= 0 {
            return Err(AppError::config_invalid(format!(
                "staleness_threshold_days must be positive, got {}",
                self.staleness_threshold_days
            )));
        }

        if self.min_history_span_days <= 0 {
            return Err(AppError::config_invalid(format!(
                "min_history_span_days must be positive, got {}",
                self.min_history_span_days
            )));
        }

        if self.daily_rate_min_kg >= self.daily_rate_max_kg {
            return Err(AppError::config_invalid(format!(
                "daily rate clamp is inverted: min {} >= max {}",
                self.daily_rate_min_kg, self.daily_rate_max_kg
            )));
        }

        if !self.milestone_step_kg.is_finite() || self.milestone_step_kg <= 0.0 {
            return Err(AppError::config_invalid(format!(
                "milestone_step_kg must be a positive finite number, got {}",
                self.milestone_step_kg
            )));
        }

        Ok(())
    }
}
