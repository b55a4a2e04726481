// ABOUTME: Strength progression trend analysis over a workout log history
// ABOUTME: Computes peak 1RM, linear rate of change, staleness, and behavioral day/time patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! Progression trend analysis.
//!
//! A single linear scan over the relevant log entries plus a constant
//! number of aggregate passes. The analyzer borrows the log collection for
//! the duration of the call and returns a freshly constructed
//! [`ProgressionAnalysis`]; nothing is cached across calls.

use crate::algorithms::estimate_one_rm;
use crate::config::ProgressionConfig;
use crate::models::WorkoutEntry;
use crate::physiological_constants::daypart::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR,
};
use crate::physiological_constants::trend::MIN_RELEVANT_ENTRIES;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Time-of-day band a set was performed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 04:00-11:59
    Morning,
    /// 12:00-17:59
    Afternoon,
    /// 18:00-03:59
    Evening,
    /// No dominant band (insufficient data)
    #[default]
    Anytime,
}

impl TimeOfDay {
    /// Band for an hour of day (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= MORNING_START_HOUR && hour < AFTERNOON_START_HOUR {
            Self::Morning
        } else if hour >= AFTERNOON_START_HOUR && hour < EVENING_START_HOUR {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    /// Human-readable band name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Anytime => "Anytime",
        }
    }
}

/// Result of analyzing one exercise's progression history.
///
/// Immutable snapshot, recomputed on demand; all numeric fields are finite
/// and the 1RM fields are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionAnalysis {
    /// Exercise the analysis covers
    pub exercise_id: String,
    /// Highest estimated 1RM observed across relevant entries (kg, 0 if none)
    pub historical_peak_1rm_kg: f64,
    /// Best estimate of capacity as of the evaluation instant (kg)
    pub projected_current_1rm_kg: f64,
    /// When the peak set was performed
    pub best_date: Option<DateTime<Utc>>,
    /// Whole days between the peak set and the evaluation instant
    pub days_since_best: i64,
    /// Signed linear 1RM rate of change (kg/day), clamped
    pub daily_rate_kg: f64,
    /// `daily_rate_kg × 7`
    pub weekly_rate_kg: f64,
    /// Whether the peak is old enough that continued improvement is unproven
    pub is_stale: bool,
    /// Whether enough history exists for trend computation
    pub has_enough_data: bool,
    /// Weekday with the highest average estimated 1RM
    pub optimal_day: Option<Weekday>,
    /// Time-of-day band with the highest average estimated 1RM
    pub optimal_time: TimeOfDay,
}

impl ProgressionAnalysis {
    /// Sunday-based weekday index (0-6), or -1 when no signal exists;
    /// the legacy sentinel shape some callers still consume
    #[must_use]
    pub fn optimal_day_index(&self) -> i8 {
        self.optimal_day
            .map_or(-1, |day| day.num_days_from_sunday() as i8)
    }

    /// Full weekday name, or "Anytime" when no signal exists
    #[must_use]
    pub fn optimal_day_name(&self) -> &'static str {
        match self.optimal_day {
            Some(Weekday::Sun) => "Sunday",
            Some(Weekday::Mon) => "Monday",
            Some(Weekday::Tue) => "Tuesday",
            Some(Weekday::Wed) => "Wednesday",
            Some(Weekday::Thu) => "Thursday",
            Some(Weekday::Fri) => "Friday",
            Some(Weekday::Sat) => "Saturday",
            None => "Anytime",
        }
    }
}

/// Analyzes strength progression for one exercise at a time
#[derive(Debug, Clone, Default)]
pub struct ProgressionAnalyzer {
    config: ProgressionConfig,
}

/// Weekday enumeration order for bucket tie-breaking (first maximum wins)
const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Time band enumeration order for bucket tie-breaking
const TIME_ORDER: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

impl ProgressionAnalyzer {
    /// Create an analyzer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    #[must_use]
    pub const fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Analyze progression for `exercise_id` as of the current instant
    #[must_use]
    pub fn analyze(&self, entries: &[WorkoutEntry], exercise_id: &str) -> ProgressionAnalysis {
        self.analyze_at(entries, exercise_id, Utc::now())
    }

    /// Analyze progression as of an explicit evaluation instant.
    ///
    /// Degenerate histories (empty, single entry, span below the minimum)
    /// degrade to the insufficient-data shape; this function never panics
    /// and never produces a non-finite number.
    #[must_use]
    pub fn analyze_at(
        &self,
        entries: &[WorkoutEntry],
        exercise_id: &str,
        now: DateTime<Utc>,
    ) -> ProgressionAnalysis {
        let mut relevant: Vec<&WorkoutEntry> = entries
            .iter()
            .filter(|e| e.exercise_id == exercise_id && e.is_weighted_set())
            .collect();
        relevant.sort_by_key(|e| e.recorded_at);

        debug!(
            exercise_id,
            total = entries.len(),
            relevant = relevant.len(),
            "filtered log history for progression analysis"
        );

        // One estimate per relevant entry, in date order
        let estimates: Vec<f64> = relevant
            .iter()
            .map(|e| estimate_one_rm(e.weight_kg.unwrap_or(0.0), e.reps))
            .collect();

        let (peak_estimate, best_index) = estimates.iter().enumerate().fold(
            (0.0_f64, None),
            |(best, best_idx), (idx, &est)| {
                if est > best {
                    (est, Some(idx))
                } else {
                    (best, best_idx)
                }
            },
        );

        let best_date = best_index.map(|idx| relevant[idx].recorded_at);
        let days_since_best = best_date.map_or(0, |date| (now - date).num_days());
        let is_stale = days_since_best > self.config.staleness_threshold_days;

        if relevant.len() < MIN_RELEVANT_ENTRIES {
            return self.insufficient(exercise_id, peak_estimate, best_date, days_since_best);
        }

        let first_date = relevant[0].recorded_at;
        let last_date = relevant[relevant.len() - 1].recorded_at;
        let total_span_days = (last_date - first_date).num_days();

        if total_span_days < self.config.min_history_span_days {
            return self.insufficient(exercise_id, peak_estimate, best_date, days_since_best);
        }

        // Span >= minimum guarantees a non-zero divisor on both branches
        let first_estimate = estimates[0];
        let last_estimate = estimates[estimates.len() - 1];
        let time_to_best_days =
            best_date.map_or(0, |date| (date - first_date).num_days());

        let raw_daily_rate = if time_to_best_days > self.config.sustained_trend_min_days {
            // Sustained climb to the peak: rate of the first-to-peak leg,
            // ignoring noise from the tail
            (peak_estimate - first_estimate) / time_to_best_days as f64
        } else {
            // Peak reached too quickly to trust as a rate; whole-history slope
            (last_estimate - first_estimate) / total_span_days as f64
        };

        let daily_rate_kg = raw_daily_rate.clamp(
            self.config.daily_rate_min_kg,
            self.config.daily_rate_max_kg,
        );
        if (daily_rate_kg - raw_daily_rate).abs() > f64::EPSILON {
            warn!(
                exercise_id,
                raw_rate = raw_daily_rate,
                clamped_rate = daily_rate_kg,
                "daily 1RM rate clamped to configured bounds"
            );
        }
        let weekly_rate_kg = daily_rate_kg * 7.0;

        let projected_current_1rm_kg = if daily_rate_kg > 0.0 && !is_stale {
            // Improving and fresh: project the trend to today
            daily_rate_kg.mul_add(days_since_best as f64, peak_estimate)
        } else if daily_rate_kg < 0.0 {
            // A declining trend is assumed to continue regardless of staleness
            daily_rate_kg
                .mul_add(days_since_best as f64, peak_estimate)
                .max(0.0)
        } else {
            // Positive-but-stale (or flat): freeze at peak, assume maintenance
            peak_estimate
        };

        let (optimal_day, optimal_time) = Self::behavioral_buckets(&relevant, &estimates);

        ProgressionAnalysis {
            exercise_id: exercise_id.to_owned(),
            historical_peak_1rm_kg: peak_estimate,
            projected_current_1rm_kg,
            best_date,
            days_since_best,
            daily_rate_kg,
            weekly_rate_kg,
            is_stale,
            has_enough_data: true,
            optimal_day,
            optimal_time,
        }
    }

    /// Bucket estimates by weekday and time-of-day band; the key with the
    /// highest average wins, ties resolving to the earliest key in the
    /// fixed enumeration order.
    fn behavioral_buckets(
        relevant: &[&WorkoutEntry],
        estimates: &[f64],
    ) -> (Option<Weekday>, TimeOfDay) {
        let mut day_sums = [0.0_f64; 7];
        let mut day_counts = [0_u32; 7];
        let mut time_sums = [0.0_f64; 3];
        let mut time_counts = [0_u32; 3];

        for (entry, &estimate) in relevant.iter().zip(estimates) {
            let day_idx = entry.recorded_at.weekday().num_days_from_sunday() as usize;
            day_sums[day_idx] += estimate;
            day_counts[day_idx] += 1;

            let band = TimeOfDay::from_hour(entry.recorded_at.hour());
            let band_idx = TIME_ORDER
                .iter()
                .position(|&t| t == band)
                .unwrap_or(0);
            time_sums[band_idx] += estimate;
            time_counts[band_idx] += 1;
        }

        let mut optimal_day = None;
        let mut best_day_avg = 0.0_f64;
        for (idx, &weekday) in WEEKDAY_ORDER.iter().enumerate() {
            if day_counts[idx] == 0 {
                continue;
            }
            let avg = day_sums[idx] / f64::from(day_counts[idx]);
            if avg > best_day_avg {
                best_day_avg = avg;
                optimal_day = Some(weekday);
            }
        }

        let mut optimal_time = TimeOfDay::Anytime;
        let mut best_time_avg = 0.0_f64;
        for (idx, &band) in TIME_ORDER.iter().enumerate() {
            if time_counts[idx] == 0 {
                continue;
            }
            let avg = time_sums[idx] / f64::from(time_counts[idx]);
            if avg > best_time_avg {
                best_time_avg = avg;
                optimal_time = band;
            }
        }

        (optimal_day, optimal_time)
    }

    /// The insufficient-data result shape: no rates, no behavioral signal,
    /// projection frozen at whatever peak was observed (0 when empty).
    fn insufficient(
        &self,
        exercise_id: &str,
        peak_estimate: f64,
        best_date: Option<DateTime<Utc>>,
        days_since_best: i64,
    ) -> ProgressionAnalysis {
        ProgressionAnalysis {
            exercise_id: exercise_id.to_owned(),
            historical_peak_1rm_kg: peak_estimate,
            projected_current_1rm_kg: peak_estimate,
            best_date,
            days_since_best,
            daily_rate_kg: 0.0,
            weekly_rate_kg: 0.0,
            is_stale: days_since_best > self.config.staleness_threshold_days,
            has_enough_data: false,
            optimal_day: None,
            optimal_time: TimeOfDay::Anytime,
        }
    }
}
