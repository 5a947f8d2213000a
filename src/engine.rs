// ABOUTME: Recommendation engine: score, filter, rank, and explain catalog recipes
// ABOUTME: Total API; any internal analysis fault degrades to the fallback result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! The four-stage recommendation pipeline.
//!
//! 1. **Analyze** the weather snapshot into a [`WeatherAnalysis`].
//! 2. **Score** every catalog recipe. Scoring is additive and never
//!    exclusionary: the unconditional base point guarantees each recipe a
//!    score of at least one.
//! 3. **Filter** by user preferences. This is the only stage that removes
//!    candidates; an over-constrained request legitimately yields zero
//!    recommendations rather than silently relaxing the constraints.
//! 4. **Rank** with context bonuses, stable-sort descending, take the top
//!    few, and build a human-readable explanation per pick.
//!
//! The public methods are total: an internal [`AnalysisError`] is caught
//! here and converted into a degraded result built from the head of the
//! catalog, flagged via `weather_analysis.fallback_mode`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{analyze_weather, Intensity, WeatherAnalysis};
use crate::config::EngineConfig;
use crate::errors::AnalysisError;
use crate::models::{
    Difficulty, Recipe, TemperatureBand, UserPreferences, WeatherCondition, WeatherSnapshot,
};
use crate::scoring_constants::{
    confidence_bands, fallback, match_points, nutrition_keywords, ranking_points,
};

/// Ordinal label communicating recommendation strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceLevel {
    /// Final score of 20 or more
    VeryHigh,
    /// Final score of 15 to 19
    High,
    /// Final score of 10 to 14
    Medium,
    /// Final score of 5 to 9
    Low,
    /// Final score below 5
    VeryLow,
}

impl ConfidenceLevel {
    /// Map a final relevance score onto its label
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= confidence_bands::VERY_HIGH_MIN {
            Self::VeryHigh
        } else if score >= confidence_bands::HIGH_MIN {
            Self::High
        } else if score >= confidence_bands::MEDIUM_MIN {
            Self::Medium
        } else if score >= confidence_bands::LOW_MIN {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// The label's tag string
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::VeryHigh => "very-high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very-low",
        }
    }
}

/// A recipe with its accumulated scores and reasons
///
/// `match_score`/`match_reasons` capture stage two; `relevance_score`/
/// `score_reasons` start from those and absorb the stage-four bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    /// The scored recipe
    pub recipe: Recipe,
    /// Stage-two weather match score
    pub match_score: u32,
    /// Stage-two reasons, in rule-evaluation order
    pub match_reasons: Vec<String>,
    /// Final score after ranking bonuses
    pub relevance_score: u32,
    /// All reasons including ranking bonuses
    pub score_reasons: Vec<String>,
}

/// Presentation record attached to each ranked pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based rank
    pub rank: usize,
    /// Full explanation sentence for this pick
    pub reasoning: String,
    /// The weather summary the recommendation was made under
    pub weather_context: String,
    /// Strength label derived from the final score
    pub confidence_level: ConfidenceLevel,
}

/// A ranked pick: scores plus its presentation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRecipe {
    /// The recommended recipe
    pub recipe: Recipe,
    /// Stage-two weather match score
    pub match_score: u32,
    /// Stage-two reasons, in rule-evaluation order
    pub match_reasons: Vec<String>,
    /// Final score after ranking bonuses
    pub relevance_score: u32,
    /// All reasons including ranking bonuses
    pub score_reasons: Vec<String>,
    /// Rank, reasoning, and confidence
    pub recommendation: Recommendation,
}

/// Result of one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// The analysis the picks were scored against
    pub weather_analysis: WeatherAnalysis,
    /// Ranked picks, best first, at most the configured maximum
    pub recommendations: Vec<RecommendedRecipe>,
    /// Catalog size at request time
    pub total_recipes_considered: usize,
    /// Recipes that matched the weather on condition, band, or mood
    pub weather_matched_count: usize,
    /// Number of picks returned
    pub final_recommendation_count: usize,
}

/// Weather groups used by the stage-two neighborhood bonus
///
/// A recipe that does not list the current condition outright can still
/// earn points for listing a different tag from the same group. Declaration
/// order is the award order; the bonus is granted at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeatherGroup {
    Sunny,
    Rainy,
    Cold,
    Mild,
}

impl WeatherGroup {
    const ALL: [Self; 4] = [Self::Sunny, Self::Rainy, Self::Cold, Self::Mild];

    const fn members(self) -> &'static [&'static str] {
        match self {
            Self::Sunny => &["clear", "sunny", "partly-cloudy"],
            Self::Rainy => &["rainy", "drizzle", "overcast"],
            Self::Cold => &["snow", "fog", "cold"],
            Self::Mild => &["partly-cloudy", "cloudy"],
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Cold => "cold",
            Self::Mild => "mild",
        }
    }

    fn contains(self, tag: &str) -> bool {
        self.members().contains(&tag)
    }
}

/// First group containing both the current condition and a different
/// weather type listed by the recipe
fn shared_weather_group(condition: WeatherCondition, recipe: &Recipe) -> Option<WeatherGroup> {
    let condition_tag = condition.as_tag();
    WeatherGroup::ALL.into_iter().find(|group| {
        group.contains(condition_tag)
            && recipe
                .weather_types
                .iter()
                .any(|t| t != condition_tag && group.contains(t))
    })
}

/// The weather-aware recipe recommendation engine
///
/// Stateless apart from its configuration; the catalog is injected per
/// call so tests and alternative deployments can substitute datasets.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend recipes for the current weather, using the real clock
    /// for the season
    #[must_use]
    pub fn recommend(
        &self,
        weather: &WeatherSnapshot,
        preferences: &UserPreferences,
        catalog: &[Recipe],
    ) -> RecommendationResult {
        self.recommend_at(weather, preferences, catalog, Utc::now())
    }

    /// Recommend recipes with an injected timestamp
    ///
    /// Deterministic: identical arguments produce identical results,
    /// including reason-string lists.
    #[must_use]
    pub fn recommend_at(
        &self,
        weather: &WeatherSnapshot,
        preferences: &UserPreferences,
        catalog: &[Recipe],
        at: DateTime<Utc>,
    ) -> RecommendationResult {
        match self.run(weather, preferences, catalog, at) {
            Ok(result) => result,
            Err(error) => {
                warn!(%error, location = %weather.location, "analysis failed, serving fallback recommendations");
                Self::fallback(weather, catalog, at)
            }
        }
    }

    fn run(
        &self,
        weather: &WeatherSnapshot,
        preferences: &UserPreferences,
        catalog: &[Recipe],
        at: DateTime<Utc>,
    ) -> Result<RecommendationResult, AnalysisError> {
        debug!(location = %weather.location, recipes = catalog.len(), "starting recipe analysis");

        let analysis = analyze_weather(weather, at)?;

        let weather_matched_count = catalog
            .iter()
            .filter(|recipe| Self::matches_weather(recipe, &analysis))
            .count();

        let mut candidates: Vec<ScoredRecipe> = catalog
            .iter()
            .map(|recipe| score_recipe(recipe, &analysis))
            .filter(|scored| preferences.allows(&scored.recipe))
            .collect();

        self.apply_ranking_bonuses(&mut candidates, &analysis);

        // Stable sort keeps catalog order on ties.
        candidates.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        candidates.truncate(self.config.max_recommendations);

        let recommendations = self.explain(candidates, &analysis);
        let final_recommendation_count = recommendations.len();

        debug!(
            matched = weather_matched_count,
            returned = final_recommendation_count,
            "recipe analysis complete"
        );

        Ok(RecommendationResult {
            weather_analysis: analysis,
            recommendations,
            total_recipes_considered: catalog.len(),
            weather_matched_count,
            final_recommendation_count,
        })
    }

    /// The original exclusionary weather predicate, kept as a statistic
    /// now that scoring itself never filters
    fn matches_weather(recipe: &Recipe, analysis: &WeatherAnalysis) -> bool {
        recipe.suits_condition(analysis.condition)
            || recipe.temperature == analysis.temperature.band
            || analysis
                .mood_categories
                .iter()
                .any(|mood| mood.matches_category(&recipe.category))
    }

    fn apply_ranking_bonuses(&self, candidates: &mut [ScoredRecipe], analysis: &WeatherAnalysis) {
        for scored in candidates {
            if analysis.comfort_food_need.level == Intensity::High
                && scored.recipe.category == "comfort"
            {
                scored.relevance_score += ranking_points::HIGH_COMFORT_NEED;
                scored
                    .score_reasons
                    .push("High comfort food appeal for current weather".to_owned());
            }

            if analysis.cooking_motivation.level == Intensity::High
                && scored.recipe.difficulty != Difficulty::Easy
            {
                scored.relevance_score += ranking_points::INVOLVED_COOKING;
                scored
                    .score_reasons
                    .push("Weather encourages more involved cooking".to_owned());
            } else if analysis.cooking_motivation.level == Intensity::Low
                && scored.recipe.difficulty == Difficulty::Easy
            {
                scored.relevance_score += ranking_points::SIMPLE_COOKING;
                scored
                    .score_reasons
                    .push("Simple preparation suits current weather mood".to_owned());
            }

            if scored.recipe.cooking_time_minutes <= self.config.quick_meal_minutes {
                scored.relevance_score += ranking_points::QUICK_MEAL;
                scored
                    .score_reasons
                    .push("Short cooking time keeps preparation light".to_owned());
            }

            if analysis.temperature.band == TemperatureBand::Hot
                && scored.recipe.nutrition_mentions_any(nutrition_keywords::COOLING)
            {
                scored.relevance_score += ranking_points::HOT_WEATHER_NUTRITION;
                scored
                    .score_reasons
                    .push("Cooling nutrition profile for hot weather".to_owned());
            }

            if analysis.temperature.band == TemperatureBand::Cold
                && scored.recipe.nutrition_mentions_any(nutrition_keywords::WARMING)
            {
                scored.relevance_score += ranking_points::COLD_WEATHER_NUTRITION;
                scored
                    .score_reasons
                    .push("Warming nutrition profile for cold weather".to_owned());
            }
        }
    }

    fn explain(
        &self,
        ranked: Vec<ScoredRecipe>,
        analysis: &WeatherAnalysis,
    ) -> Vec<RecommendedRecipe> {
        ranked
            .into_iter()
            .enumerate()
            .map(|(index, scored)| {
                let rank = index + 1;
                let reasoning = self.build_reasoning(&scored, analysis, rank);
                let confidence_level = ConfidenceLevel::from_score(scored.relevance_score);
                RecommendedRecipe {
                    recommendation: Recommendation {
                        rank,
                        reasoning,
                        weather_context: analysis.weather_description.clone(),
                        confidence_level,
                    },
                    recipe: scored.recipe,
                    match_score: scored.match_score,
                    match_reasons: scored.match_reasons,
                    relevance_score: scored.relevance_score,
                    score_reasons: scored.score_reasons,
                }
            })
            .collect()
    }

    fn build_reasoning(
        &self,
        scored: &ScoredRecipe,
        analysis: &WeatherAnalysis,
        rank: usize,
    ) -> String {
        let mut parts: Vec<String> = scored.match_reasons.iter().take(3).cloned().collect();

        let category = scored.recipe.category.as_str();
        match analysis.temperature.band {
            TemperatureBand::Cold if category == "comfort" || category == "warming" => {
                parts.push(format!(
                    "This {category} dish will warm you up on this cold day"
                ));
            }
            TemperatureBand::Hot if category == "cooling" || category == "refreshing" => {
                parts.push(format!(
                    "This {category} meal will help you stay cool in the heat"
                ));
            }
            _ => {}
        }

        if scored.recipe.cooking_time_minutes <= self.config.quick_meal_minutes {
            parts.push("Quick and easy to prepare".to_owned());
        } else if scored.recipe.cooking_time_minutes >= self.config.long_meal_minutes {
            parts.push("Worth the time investment for a satisfying meal".to_owned());
        }

        parts.push(format!("Seasonally appropriate for {}", analysis.season));

        let mut reasoning = format!("Ranked #{rank} because: {}.", parts.join(", "));

        if scored.relevance_score >= confidence_bands::EXCELLENT_SENTENCE_MIN {
            reasoning.push_str(" This is an excellent match for current conditions!");
        } else if scored.relevance_score >= confidence_bands::GOOD_SENTENCE_MIN {
            reasoning.push_str(" This is a good choice for the weather.");
        } else {
            reasoning.push_str(" This could work well given the conditions.");
        }

        reasoning
    }

    /// Degraded result: the head of the catalog with fixed descending
    /// scores and medium confidence
    fn fallback(
        weather: &WeatherSnapshot,
        catalog: &[Recipe],
        at: DateTime<Utc>,
    ) -> RecommendationResult {
        let weather_context = if weather.description.is_empty() {
            "Current weather conditions".to_owned()
        } else {
            weather.description.clone()
        };

        let recommendations: Vec<RecommendedRecipe> = catalog
            .iter()
            .take(fallback::RECOMMENDATION_COUNT)
            .cloned()
            .enumerate()
            .map(|(index, recipe)| {
                let rank = index + 1;
                let score = fallback::TOP_SCORE - index as u32;
                let reasoning = format!(
                    "A versatile choice that works well in various weather conditions. {}",
                    recipe.description
                );
                RecommendedRecipe {
                    recommendation: Recommendation {
                        rank,
                        reasoning,
                        weather_context: weather_context.clone(),
                        confidence_level: ConfidenceLevel::Medium,
                    },
                    recipe,
                    match_score: score,
                    match_reasons: Vec::new(),
                    relevance_score: score,
                    score_reasons: Vec::new(),
                }
            })
            .collect();

        let final_recommendation_count = recommendations.len();

        RecommendationResult {
            weather_analysis: WeatherAnalysis::degraded(weather, at),
            recommendations,
            total_recipes_considered: catalog.len(),
            weather_matched_count: catalog.len(),
            final_recommendation_count,
        }
    }
}

/// Stage two: score one recipe against the analysis
///
/// Rules are evaluated in a fixed order and each triggered rule appends
/// its reason, so reason lists are deterministic.
fn score_recipe(recipe: &Recipe, analysis: &WeatherAnalysis) -> ScoredRecipe {
    let mut score = 0_u32;
    let mut reasons = Vec::new();

    if recipe.suits_condition(analysis.condition) {
        score += match_points::CONDITION_MATCH;
        reasons.push(format!(
            "Perfect match for {} weather",
            analysis.condition
        ));
    }

    if recipe.temperature == analysis.temperature.band {
        score += match_points::BAND_MATCH;
        reasons.push(format!(
            "Ideal for {} temperatures",
            analysis.temperature.band
        ));
    }

    if analysis
        .mood_categories
        .iter()
        .any(|mood| mood.matches_category(&recipe.category))
    {
        score += match_points::MOOD_MATCH;
        reasons.push(format!(
            "Matches your weather mood for {} food",
            recipe.category
        ));
    }

    if recipe.temperature.is_adjacent_to(analysis.temperature.band) {
        score += match_points::ADJACENT_BAND;
        reasons.push(format!(
            "Close match for {} temperatures",
            analysis.temperature.band
        ));
    }

    if analysis
        .season
        .preference_keywords()
        .iter()
        .any(|keyword| recipe.mentions_keyword(keyword))
    {
        score += match_points::SEASONAL_MATCH;
        reasons.push(format!("Perfect for {} season", analysis.season));
    }

    if let Some(group) = shared_weather_group(analysis.condition, recipe) {
        score += match_points::WEATHER_GROUP;
        reasons.push(format!("Suits similar {} weather", group.label()));
    }

    score += match_points::BASE;
    reasons.push("A versatile option for any conditions".to_owned());

    ScoredRecipe {
        recipe: recipe.clone(),
        match_score: score,
        match_reasons: reasons.clone(),
        relevance_score: score,
        score_reasons: reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_weather;
    use crate::catalog::builtin_catalog;
    use chrono::TimeZone;

    fn january() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    fn july() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
    }

    fn analysis_for(condition: WeatherCondition, celsius: f64, at: DateTime<Utc>) -> WeatherAnalysis {
        let snapshot = WeatherSnapshot::new("Testville", condition, celsius);
        analyze_weather(&snapshot, at).unwrap()
    }

    #[test]
    fn test_every_recipe_scores_at_least_one() {
        let analysis = analysis_for(WeatherCondition::Clear, 22.0, july());
        for recipe in builtin_catalog() {
            let scored = score_recipe(&recipe, &analysis);
            assert!(scored.match_score >= 1, "{} scored zero", recipe.name);
            assert!(!scored.match_reasons.is_empty());
        }
    }

    #[test]
    fn test_stew_base_contributions_in_cold_rain() {
        // Condition (+10), band (+8), mood (+6), winter keyword (+3), base (+1).
        let analysis = analysis_for(WeatherCondition::Rainy, 2.0, january());
        let catalog = builtin_catalog();
        let scored = score_recipe(&catalog[0], &analysis);
        assert_eq!(scored.match_score, 28);
        assert_eq!(scored.match_reasons[0], "Perfect match for rainy weather");
        assert_eq!(scored.match_reasons[1], "Ideal for cold temperatures");
        assert_eq!(
            scored.match_reasons[2],
            "Matches your weather mood for comfort food"
        );
    }

    #[test]
    fn test_adjacent_band_bonus() {
        // Thai curry targets cool; a cold snapshot is one step away.
        let analysis = analysis_for(WeatherCondition::Snow, 2.0, july());
        let catalog = builtin_catalog();
        let curry = score_recipe(&catalog[3], &analysis);
        assert!(curry
            .match_reasons
            .iter()
            .any(|r| r == "Close match for cold temperatures"));
    }

    #[test]
    fn test_weather_group_bonus_awarded_once() {
        // Overcast sits in the rainy group; the curry lists overcast and
        // rainy, so a different same-group tag exists exactly once-worth.
        let analysis = analysis_for(WeatherCondition::Overcast, 12.0, july());
        let catalog = builtin_catalog();
        let curry = score_recipe(&catalog[3], &analysis);
        let group_reasons = curry
            .match_reasons
            .iter()
            .filter(|r| r.starts_with("Suits similar"))
            .count();
        assert_eq!(group_reasons, 1);
    }

    #[test]
    fn test_group_bonus_requires_a_different_tag() {
        // Gazpacho lists sunny and clear; under clear skies "sunny" is the
        // different same-group tag.
        let analysis = analysis_for(WeatherCondition::Clear, 32.0, january());
        let catalog = builtin_catalog();
        let gazpacho = score_recipe(&catalog[1], &analysis);
        assert!(gazpacho
            .match_reasons
            .iter()
            .any(|r| r == "Suits similar sunny weather"));

        // The stew lists no clear-group tags at all.
        let stew = score_recipe(&catalog[0], &analysis);
        assert!(!stew.match_reasons.iter().any(|r| r.starts_with("Suits similar")));
    }

    #[test]
    fn test_seasonal_keyword_matches_nutrition_highlights() {
        // Winter keywords include "rich"; the smoothie bowl's category and
        // description carry none of them, but its "Antioxidant rich"
        // highlight does (case-insensitive substring).
        let analysis = analysis_for(WeatherCondition::Cloudy, 15.0, january());
        let catalog = builtin_catalog();
        let smoothie = score_recipe(&catalog[4], &analysis);
        assert!(smoothie
            .match_reasons
            .iter()
            .any(|r| r == "Perfect for winter season"));
    }

    #[test]
    fn test_confidence_label_boundaries() {
        assert_eq!(ConfidenceLevel::from_score(20), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_score(19), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(15), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(14), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(10), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(9), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(5), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(4), ConfidenceLevel::VeryLow);
        assert_eq!(ConfidenceLevel::from_score(0), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn test_ranking_bonus_motivation_arms_are_exclusive() {
        let engine = RecommendationEngine::new();
        // Cold rain: motivation high, comfort need high.
        let analysis = analysis_for(WeatherCondition::Rainy, 2.0, january());
        let catalog = builtin_catalog();
        let mut scored = vec![score_recipe(&catalog[1], &analysis)]; // easy gazpacho
        let before = scored[0].relevance_score;
        engine.apply_ranking_bonuses(&mut scored, &analysis);
        // Easy recipe under high motivation gets neither motivation bonus.
        assert!(!scored[0]
            .score_reasons
            .iter()
            .any(|r| r.contains("involved cooking") || r.contains("Simple preparation")));
        // But the quick-meal bonus applies (15 minutes).
        assert_eq!(scored[0].relevance_score, before + 2);
    }

    #[test]
    fn test_cold_weather_nutrition_bonus() {
        let engine = RecommendationEngine::new();
        let analysis = analysis_for(WeatherCondition::Rainy, 2.0, january());
        let catalog = builtin_catalog();
        let mut scored = vec![score_recipe(&catalog[0], &analysis)]; // stew: High protein
        let before = scored[0].relevance_score;
        engine.apply_ranking_bonuses(&mut scored, &analysis);
        // +5 comfort, +3 involved cooking, +3 warming nutrition; not quick.
        assert_eq!(scored[0].relevance_score, before + 11);
    }

    #[test]
    fn test_reasoning_shape() {
        let engine = RecommendationEngine::new();
        let snapshot = WeatherSnapshot::new("Oslo", WeatherCondition::Rainy, 2.0);
        let result = engine.recommend_at(
            &snapshot,
            &UserPreferences::default(),
            &builtin_catalog(),
            january(),
        );
        let top = &result.recommendations[0];
        assert!(top.recommendation.reasoning.starts_with("Ranked #1 because: "));
        assert!(top
            .recommendation
            .reasoning
            .contains("Seasonally appropriate for winter"));
        assert!(top
            .recommendation
            .reasoning
            .ends_with("This is an excellent match for current conditions!"));
    }

    #[test]
    fn test_weather_matched_count_uses_primary_rules() {
        let engine = RecommendationEngine::new();
        let snapshot = WeatherSnapshot::new("Oslo", WeatherCondition::Rainy, 2.0);
        let result = engine.recommend_at(
            &snapshot,
            &UserPreferences::default(),
            &builtin_catalog(),
            january(),
        );
        // Stew, curry, and risotto list rainy; stew and risotto are cold
        // band; comfort/warming moods add the curry only once.
        assert_eq!(result.weather_matched_count, 3);
        assert_eq!(result.total_recipes_considered, 6);
    }

    #[test]
    fn test_empty_catalog_yields_no_recommendations() {
        let engine = RecommendationEngine::new();
        let snapshot = WeatherSnapshot::new("Oslo", WeatherCondition::Rainy, 2.0);
        let result =
            engine.recommend_at(&snapshot, &UserPreferences::default(), &[], january());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.final_recommendation_count, 0);
        assert!(!result.weather_analysis.fallback_mode);
    }
}
