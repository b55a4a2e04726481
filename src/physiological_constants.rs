// ABOUTME: Strength-training constants grounded in exercise science literature
// ABOUTME: One-rep-max formulas, trend clamps, staleness windows, intensity zone percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! Physiological and analytical constants for strength progression.
//!
//! Values are either taken from peer-reviewed strength science (the 1RM
//! formula coefficients, intensity zone percentages) or are product-level
//! analysis thresholds tuned against real training logs (clamps, windows).

/// One-rep-max estimation formula coefficients
///
/// References:
/// - Epley, B. (1985). "Poundage Chart". Boyd Epley Workout. Lincoln, NE.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from
///   reps-to-fatigue". Journal of Physical Education, Recreation & Dance, 64(1).
pub mod one_rm {
    /// Epley formula rep divisor: `1RM = w × (1 + reps / 30)`
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;

    /// Brzycki formula numerator: `1RM = w × 36 / (37 - reps)`
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;

    /// Brzycki formula denominator base
    pub const BRZYCKI_DENOMINATOR_BASE: f64 = 37.0;

    /// Brzycki is undefined at 37+ reps (denominator reaches zero); the
    /// formula term falls back to the raw weight beyond this rep count
    pub const BRZYCKI_MAX_REPS: u32 = 36;
}

/// Trend analysis windows and rate bounds
pub mod trend {
    /// Minimum relevant entries before any trend can be computed
    pub const MIN_RELEVANT_ENTRIES: usize = 2;

    /// Minimum history span (days) before a rate is trusted at all
    pub const MIN_HISTORY_SPAN_DAYS: i64 = 7;

    /// Time-to-peak (days) above which the first-to-peak slope is preferred
    /// over the whole-history slope
    pub const SUSTAINED_TREND_MIN_DAYS: i64 = 14;

    /// Lower clamp on the daily 1RM rate of change (kg/day)
    pub const DAILY_RATE_MIN_KG: f64 = -0.1;

    /// Upper clamp on the daily 1RM rate of change (kg/day); bounds
    /// runaway extrapolation from small-sample noise
    pub const DAILY_RATE_MAX_KG: f64 = 0.5;

    /// Days since the best set after which the trend is considered stale
    /// (detraining window; continued-improvement projection is unreliable)
    pub const STALENESS_THRESHOLD_DAYS: i64 = 30;
}

/// Forecast and milestone thresholds
pub mod forecast {
    /// Rate multiplier applied to a stale trend (detraining discount)
    pub const STALE_RATE_MULTIPLIER: f64 = 0.5;

    /// Minimum daily rate (kg/day) with measurable positive momentum;
    /// below this a milestone date cannot be forecast
    pub const MIN_FORECAST_DAILY_RATE_KG: f64 = 0.01;

    /// Horizon (days) beyond which a milestone date is reported as
    /// "more than a year out" rather than a false-precision date
    pub const MAX_FORECAST_HORIZON_DAYS: f64 = 365.0;

    /// Default milestone grid step in storage units (kg), the smallest
    /// plate increment on a standard barbell
    pub const DEFAULT_MILESTONE_STEP_KG: f64 = 2.5;
}

/// Training intensity zone percentages of 1RM
///
/// Reference:
/// - Haff, G.G. & Triplett, N.T. (2016). "Essentials of Strength Training
///   and Conditioning" (4th ed.), NSCA. Table 17.6: %1RM-repetition
///   relationship and training-goal assignments.
pub mod intensity_zones {
    /// Maximal power / neural drive work
    pub const POWER_HIGH_PERCENT: u8 = 95;
    /// Heavy power work
    pub const POWER_LOW_PERCENT: u8 = 90;
    /// Upper strength range
    pub const STRENGTH_HIGH_PERCENT: u8 = 85;
    /// Lower strength range
    pub const STRENGTH_LOW_PERCENT: u8 = 80;
    /// Upper hypertrophy range
    pub const HYPERTROPHY_HIGH_PERCENT: u8 = 75;
    /// Lower hypertrophy range
    pub const HYPERTROPHY_LOW_PERCENT: u8 = 70;
    /// Muscular endurance work
    pub const ENDURANCE_PERCENT: u8 = 60;
    /// Warmup / technique work
    pub const WARMUP_PERCENT: u8 = 50;
}

/// Time-of-day band boundaries (hour of day, local to the caller's clock)
pub mod daypart {
    /// Morning band start (inclusive)
    pub const MORNING_START_HOUR: u32 = 4;
    /// Afternoon band start (inclusive); morning ends here
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// Evening band start (inclusive); afternoon ends here
    pub const EVENING_START_HOUR: u32 = 18;
}
