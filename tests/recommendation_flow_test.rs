// ABOUTME: Integration tests for the end-to-end recommendation pipeline
// ABOUTME: Covers cardinality, determinism, preference filtering, examples, fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use forkcast::{
    builtin_catalog, ConfidenceLevel, Difficulty, RecommendationEngine, RecommendationResult,
    Temperature, UserPreferences, WeatherCondition, WeatherSnapshot,
};

fn january() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

fn oslo_rain() -> WeatherSnapshot {
    WeatherSnapshot::new("Oslo", WeatherCondition::Rainy, 2.0).with_humidity(85.0)
}

fn seville_sun() -> WeatherSnapshot {
    WeatherSnapshot::new("Seville", WeatherCondition::Sunny, 32.0)
}

fn broken_snapshot() -> WeatherSnapshot {
    let mut snapshot = oslo_rain();
    snapshot.temperature = Temperature {
        celsius: f64::NAN,
        fahrenheit: f64::NAN,
    };
    snapshot
}

#[test]
fn test_returns_min_of_three_and_catalog_size() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();

    let result = engine.recommend_at(&oslo_rain(), &UserPreferences::default(), &catalog, january());
    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(result.final_recommendation_count, 3);

    let result = engine.recommend_at(
        &oslo_rain(),
        &UserPreferences::default(),
        &catalog[..2],
        january(),
    );
    assert_eq!(result.recommendations.len(), 2);
}

#[test]
fn test_scores_are_non_increasing_and_ranks_sequential() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let result = engine.recommend_at(&oslo_rain(), &UserPreferences::default(), &catalog, january());

    let scores: Vec<u32> = result
        .recommendations
        .iter()
        .map(|r| r.relevance_score)
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

    for (index, pick) in result.recommendations.iter().enumerate() {
        assert_eq!(pick.recommendation.rank, index + 1);
    }
}

#[test]
fn test_identical_inputs_produce_identical_results() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let prefs = UserPreferences::default();

    let first = engine.recommend_at(&oslo_rain(), &prefs, &catalog, january());
    let second = engine.recommend_at(&oslo_rain(), &prefs, &catalog, january());

    assert_eq!(first, second);
    // Reason lists included.
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_preference_filtering_is_a_strict_subset() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let prefs = UserPreferences {
        max_cooking_time_minutes: Some(30),
        difficulty: Some(Difficulty::Easy),
    };

    let result = engine.recommend_at(&oslo_rain(), &prefs, &catalog, january());
    assert!(!result.recommendations.is_empty());
    for pick in &result.recommendations {
        assert!(pick.recipe.cooking_time_minutes <= 30);
        assert_eq!(pick.recipe.difficulty, Difficulty::Easy);
        assert!(catalog.iter().any(|r| r.id == pick.recipe.id));
    }
}

#[test]
fn test_impossible_preferences_yield_empty_result() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let prefs = UserPreferences {
        max_cooking_time_minutes: Some(5),
        difficulty: None,
    };

    let result = engine.recommend_at(&oslo_rain(), &prefs, &catalog, january());
    assert!(result.recommendations.is_empty());
    assert_eq!(result.final_recommendation_count, 0);
    // The statistics still describe the full catalog.
    assert_eq!(result.total_recipes_considered, catalog.len());
    assert!(!result.weather_analysis.fallback_mode);
}

#[test]
fn test_cold_rainy_oslo_ranks_beef_stew_first() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let result = engine.recommend_at(&oslo_rain(), &UserPreferences::default(), &catalog, january());

    let top = &result.recommendations[0];
    assert_eq!(top.recipe.name, "Hearty Beef Stew");
    // Condition (+10), band (+8), mood (+6), and base (+1) at minimum.
    assert!(top.match_score >= 25);
    assert!(top
        .match_reasons
        .contains(&"Perfect match for rainy weather".to_owned()));
    assert!(top
        .match_reasons
        .contains(&"Ideal for cold temperatures".to_owned()));
    assert!(top
        .match_reasons
        .contains(&"Matches your weather mood for comfort food".to_owned()));
}

#[test]
fn test_hot_sunny_easy_preference_includes_gazpacho() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let prefs = UserPreferences {
        max_cooking_time_minutes: None,
        difficulty: Some(Difficulty::Easy),
    };

    let result = engine.recommend_at(&seville_sun(), &prefs, &catalog, january());
    assert!(!result.recommendations.is_empty());
    for pick in &result.recommendations {
        assert_eq!(pick.recipe.difficulty, Difficulty::Easy);
    }
    assert!(result
        .recommendations
        .iter()
        .any(|pick| pick.recipe.name == "Fresh Gazpacho"));
}

#[test]
fn test_analysis_fault_degrades_to_fallback() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();

    let result = engine.recommend_at(
        &broken_snapshot(),
        &UserPreferences::default(),
        &catalog,
        january(),
    );

    assert!(result.weather_analysis.fallback_mode);
    assert_eq!(result.recommendations.len(), 3);

    let scores: Vec<u32> = result
        .recommendations
        .iter()
        .map(|r| r.relevance_score)
        .collect();
    assert_eq!(scores, vec![10, 9, 8]);

    for (index, pick) in result.recommendations.iter().enumerate() {
        assert_eq!(pick.recommendation.rank, index + 1);
        assert_eq!(
            pick.recommendation.confidence_level,
            ConfidenceLevel::Medium
        );
        assert!(pick
            .recommendation
            .reasoning
            .starts_with("A versatile choice that works well in various weather conditions."));
    }
}

#[test]
fn test_fallback_serves_catalog_head_in_order() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();

    let result = engine.recommend_at(
        &broken_snapshot(),
        &UserPreferences::default(),
        &catalog,
        january(),
    );

    let names: Vec<&str> = result
        .recommendations
        .iter()
        .map(|r| r.recipe.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Hearty Beef Stew", "Fresh Gazpacho", "Grilled Chicken Salad"]
    );
    assert_eq!(result.weather_matched_count, catalog.len());
}

#[test]
fn test_result_serialization_round_trips() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let result = engine.recommend_at(&oslo_rain(), &UserPreferences::default(), &catalog, january());

    let json = serde_json::to_string(&result).unwrap();
    let restored: RecommendationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, restored);

    // Vocabulary enums keep their wire tags.
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["weather_analysis"]["condition"], "rainy");
    assert_eq!(value["weather_analysis"]["season"], "winter");
    assert_eq!(
        value["recommendations"][0]["recommendation"]["confidence_level"],
        "very-high"
    );
}

#[test]
fn test_season_follows_injected_timestamp() {
    let engine = RecommendationEngine::new();
    let catalog = builtin_catalog();
    let prefs = UserPreferences::default();

    let july = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
    let winter = engine.recommend_at(&oslo_rain(), &prefs, &catalog, january());
    let summer = engine.recommend_at(&oslo_rain(), &prefs, &catalog, july);

    assert_eq!(
        serde_json::to_value(&winter.weather_analysis.season).unwrap(),
        "winter"
    );
    assert_eq!(
        serde_json::to_value(&summer.weather_analysis.season).unwrap(),
        "summer"
    );
}
