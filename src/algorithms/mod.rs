// ABOUTME: Strength estimation algorithm implementations
// ABOUTME: Contains one-rep-max estimation formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

/// One-rep-max estimation algorithms
pub mod one_rm;

pub use one_rm::{estimate_one_rm, OneRmAlgorithm};
