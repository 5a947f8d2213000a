// ABOUTME: Engine configuration with sensible defaults
// ABOUTME: Sizing knobs only; algorithm weights live in scoring_constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! Deployment-tunable configuration for the recommendation engine.

use serde::{Deserialize, Serialize};

/// Configuration for [`RecommendationEngine`](crate::engine::RecommendationEngine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of recommendations returned per request
    pub max_recommendations: usize,

    /// Cooking time (minutes) at or under which a recipe counts as a
    /// quick meal, for both the ranking bonus and the explanation sentence
    pub quick_meal_minutes: u32,

    /// Cooking time (minutes) at or over which the explanation calls the
    /// recipe worth the time investment
    pub long_meal_minutes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 3,
            quick_meal_minutes: 20,
            long_meal_minutes: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_recommendations, 3);
        assert_eq!(config.quick_meal_minutes, 20);
        assert_eq!(config.long_meal_minutes, 60);
    }
}
