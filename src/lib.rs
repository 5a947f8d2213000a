// ABOUTME: Main library entry point for the Forkcast recommendation engine
// ABOUTME: Weather analysis, recipe models, catalog, and the scoring pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

#![deny(unsafe_code)]

//! # Forkcast
//!
//! A weather-aware recipe recommendation engine. Given a resolved weather
//! snapshot, optional user preferences, and an injected recipe catalog,
//! the engine scores every recipe with an additive heuristic, filters by
//! preferences, ranks the survivors, and explains the top picks.
//!
//! The engine is a plain library-call boundary: no I/O, no persistence,
//! no internal concurrency. Weather acquisition and presentation are the
//! caller's concern.
//!
//! ## Example
//!
//! ```
//! use forkcast::{
//!     builtin_catalog, RecommendationEngine, UserPreferences, WeatherCondition,
//!     WeatherSnapshot,
//! };
//!
//! let catalog = builtin_catalog();
//! let engine = RecommendationEngine::new();
//! let snapshot = WeatherSnapshot::new("Oslo", WeatherCondition::Rainy, 2.0);
//!
//! let result = engine.recommend(&snapshot, &UserPreferences::default(), &catalog);
//! assert!(!result.recommendations.is_empty());
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod scoring_constants;

pub use analysis::{
    analyze_weather, ComfortFoodNeed, CookingMotivation, Intensity, TemperatureAnalysis,
    WeatherAnalysis,
};
pub use catalog::builtin_catalog;
pub use config::EngineConfig;
pub use engine::{
    ConfidenceLevel, Recommendation, RecommendationEngine, RecommendationResult,
    RecommendedRecipe, ScoredRecipe,
};
pub use errors::{AnalysisError, UnknownTagError};
pub use models::{
    describe_conditions, Difficulty, MoodCategory, Recipe, Season, Temperature, TemperatureBand,
    UserPreferences, WeatherCondition, WeatherSnapshot,
};
