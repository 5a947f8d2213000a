// ABOUTME: Named constants for the recipe-scoring heuristic
// ABOUTME: Point weights, bucketing thresholds, confidence boundaries, keyword lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! Scoring weights and classification thresholds used throughout the
//! recommendation pipeline.
//!
//! Every number the heuristic depends on lives here as a documented
//! constant with a closed key set, rather than being scattered through the
//! scoring code or looked up in open string dictionaries. Changing a weight
//! changes the algorithm; deployment-level knobs belong in
//! [`EngineConfig`](crate::config::EngineConfig) instead.

/// Temperature bucketing thresholds (degrees Celsius)
///
/// Readings are classified top-down: at or above `HOT_MIN_CELSIUS` is hot,
/// then warm, then cool, and anything below `COOL_MIN_CELSIUS` is cold.
pub mod temperature_bands {
    /// Lower bound of the hot band
    pub const HOT_MIN_CELSIUS: f64 = 30.0;

    /// Lower bound of the warm band
    pub const WARM_MIN_CELSIUS: f64 = 20.0;

    /// Lower bound of the cool band
    pub const COOL_MIN_CELSIUS: f64 = 10.0;
}

/// Stage-two match points: awarded to every catalog recipe
///
/// These are additive. The base point guarantees a score of at least one,
/// so weather matching is never exclusionary; preference filtering is the
/// only stage that removes candidates.
pub mod match_points {
    /// Recipe lists the current weather condition among its weather types
    pub const CONDITION_MATCH: u32 = 10;

    /// Recipe's temperature band equals the analyzed band
    pub const BAND_MATCH: u32 = 8;

    /// Recipe's category appears in the analyzed mood categories
    pub const MOOD_MATCH: u32 = 6;

    /// Recipe's band is exactly one step away on the cold..hot scale
    pub const ADJACENT_BAND: u32 = 4;

    /// A seasonal preference keyword appears in the recipe's category,
    /// description, or nutrition highlights
    pub const SEASONAL_MATCH: u32 = 3;

    /// Recipe lists a different weather type from the same weather group
    /// as the current condition
    pub const WEATHER_GROUP: u32 = 2;

    /// Unconditional base point
    pub const BASE: u32 = 1;
}

/// Stage-four ranking bonuses: applied after preference filtering
pub mod ranking_points {
    /// Comfort-food need is high and the recipe is a comfort dish
    pub const HIGH_COMFORT_NEED: u32 = 5;

    /// Cooking motivation is high and the recipe is not easy
    pub const INVOLVED_COOKING: u32 = 3;

    /// Cooking motivation is low and the recipe is easy; mutually
    /// exclusive with `INVOLVED_COOKING`, which is evaluated first
    pub const SIMPLE_COOKING: u32 = 4;

    /// Cooking time within the quick-meal threshold
    pub const QUICK_MEAL: u32 = 2;

    /// Hot band and a cooling/hydrating nutrition highlight
    pub const HOT_WEATHER_NUTRITION: u32 = 3;

    /// Cold band and a warming/protein nutrition highlight
    pub const COLD_WEATHER_NUTRITION: u32 = 3;
}

/// Comfort-food need thresholds
pub mod comfort_thresholds {
    /// Below this celsius reading the need level starts at high
    pub const HIGH_NEED_MAX_CELSIUS: f64 = 10.0;

    /// Below this celsius reading the need level starts at moderate
    pub const MODERATE_NEED_MAX_CELSIUS: f64 = 20.0;

    /// Humidity above this percentage is noted as a factor
    pub const HIGH_HUMIDITY_PERCENT: f64 = 80.0;
}

/// Confidence boundaries on the final relevance score
///
/// Label boundaries are inclusive: a score of exactly 20 is very-high, 15
/// is high, 10 is medium, 5 is low.
pub mod confidence_bands {
    /// Minimum score for the very-high label
    pub const VERY_HIGH_MIN: u32 = 20;

    /// Minimum score for the high label
    pub const HIGH_MIN: u32 = 15;

    /// Minimum score for the medium label
    pub const MEDIUM_MIN: u32 = 10;

    /// Minimum score for the low label
    pub const LOW_MIN: u32 = 5;

    /// Minimum score for the "excellent match" closing sentence
    pub const EXCELLENT_SENTENCE_MIN: u32 = 15;

    /// Minimum score for the "good choice" closing sentence
    pub const GOOD_SENTENCE_MIN: u32 = 10;
}

/// Fallback result shape when analysis fails
pub mod fallback {
    /// Number of catalog recipes served in degraded mode
    pub const RECOMMENDATION_COUNT: usize = 3;

    /// Score assigned to the first fallback recipe; each following rank
    /// scores one point less
    pub const TOP_SCORE: u32 = 10;
}

/// Nutrition-highlight keywords used by the stage-four weather bonuses
///
/// Matched case-insensitively as substrings of each highlight string.
pub mod nutrition_keywords {
    /// Highlights that pair with hot weather
    pub const COOLING: &[&str] = &["cooling", "hydrating"];

    /// Highlights that pair with cold weather
    pub const WARMING: &[&str] = &["warming", "protein"];
}
