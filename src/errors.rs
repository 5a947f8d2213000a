// ABOUTME: Error types for weather analysis and vocabulary parsing
// ABOUTME: AnalysisError never escapes the engine; it triggers the fallback path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! Error taxonomy for the recommendation pipeline.
//!
//! The engine's public API is total: every [`AnalysisError`] raised inside
//! the pipeline is caught at the top level and converted into the fallback
//! result, so callers never see these values. They exist so the fallback has
//! a concrete, testable trigger and so logs can say why degradation
//! happened.

/// Faults detected while deriving a weather analysis from a snapshot
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Temperature reading is NaN or infinite
    #[error("temperature reading is not a finite number: {value}")]
    NonFiniteTemperature {
        /// The offending celsius value
        value: f64,
    },

    /// Humidity reading is NaN or infinite
    #[error("humidity reading is not a finite number: {value}")]
    NonFiniteHumidity {
        /// The offending percentage value
        value: f64,
    },
}

/// Parse failure for one of the closed vocabulary enums
#[derive(Debug, thiserror::Error)]
#[error("unrecognized {kind} tag: {value}")]
pub struct UnknownTagError {
    /// Which vocabulary rejected the input
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl UnknownTagError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
