// ABOUTME: Domain models for weather snapshots, recipes, and user preferences
// ABOUTME: Closed vocabulary enums replace the original's open string dictionaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! Core data structures shared across the recommendation pipeline.
//!
//! The weather condition, temperature band, mood, season, and difficulty
//! vocabularies are closed enumerations so an unrecognized tag is a parse
//! error at the boundary instead of a silent no-op lookup deep inside the
//! scoring rules. Recipe categories and weather-type tags stay open
//! strings: they are catalog-defined and the catalog is free to use tags
//! (such as `snowy` or `humid`) outside the snapshot vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownTagError;
use crate::scoring_constants::temperature_bands;

/// Weather condition vocabulary for snapshots
///
/// The nine tags a weather provider may report. Serialized kebab-case to
/// match the provider-facing tag strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    /// Clear sky
    Clear,
    /// Direct sunshine
    Sunny,
    /// Scattered cloud cover
    PartlyCloudy,
    /// Mostly clouded over
    Cloudy,
    /// Full cloud cover
    Overcast,
    /// Active rainfall
    Rainy,
    /// Light intermittent rain
    Drizzle,
    /// Snowfall
    Snow,
    /// Reduced visibility fog
    Fog,
}

impl WeatherCondition {
    /// The provider-facing tag string for this condition
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Sunny => "sunny",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::Rainy => "rainy",
            Self::Drizzle => "drizzle",
            Self::Snow => "snow",
            Self::Fog => "fog",
        }
    }

    /// Leading phrase for human-readable weather descriptions
    #[must_use]
    pub const fn display_phrase(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Overcast => "Overcast",
            Self::Rainy => "Rainy",
            Self::Drizzle => "Light drizzle",
            Self::Snow => "Snowy",
            Self::Fog => "Foggy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for WeatherCondition {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Clear),
            "sunny" => Ok(Self::Sunny),
            "partly-cloudy" => Ok(Self::PartlyCloudy),
            "cloudy" => Ok(Self::Cloudy),
            "overcast" => Ok(Self::Overcast),
            "rainy" => Ok(Self::Rainy),
            "drizzle" => Ok(Self::Drizzle),
            "snow" => Ok(Self::Snow),
            "fog" => Ok(Self::Fog),
            other => Err(UnknownTagError::new("weather condition", other)),
        }
    }
}

/// Temperature category on the fixed cold..hot scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    /// Below 10°C
    Cold,
    /// 10°C to just under 20°C
    Cool,
    /// 20°C to just under 30°C
    Warm,
    /// 30°C and above
    Hot,
}

impl TemperatureBand {
    /// The scale order used for adjacency scoring
    pub const SCALE: [Self; 4] = [Self::Cold, Self::Cool, Self::Warm, Self::Hot];

    /// Bucket a celsius reading into its band
    ///
    /// Non-finite readings fall through every threshold and land in the
    /// cold band; the analysis layer rejects them before scoring.
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius >= temperature_bands::HOT_MIN_CELSIUS {
            Self::Hot
        } else if celsius >= temperature_bands::WARM_MIN_CELSIUS {
            Self::Warm
        } else if celsius >= temperature_bands::COOL_MIN_CELSIUS {
            Self::Cool
        } else {
            Self::Cold
        }
    }

    /// Position on [`Self::SCALE`]
    #[must_use]
    pub const fn scale_index(self) -> usize {
        match self {
            Self::Cold => 0,
            Self::Cool => 1,
            Self::Warm => 2,
            Self::Hot => 3,
        }
    }

    /// True when the two bands sit exactly one step apart on the scale
    #[must_use]
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        self.scale_index().abs_diff(other.scale_index()) == 1
    }

    /// The band's tag string
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for TemperatureBand {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cold" => Ok(Self::Cold),
            "cool" => Ok(Self::Cool),
            "warm" => Ok(Self::Warm),
            "hot" => Ok(Self::Hot),
            other => Err(UnknownTagError::new("temperature band", other)),
        }
    }
}

/// Mood vocabulary bridging weather to recipe categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    /// Light, uncomplicated food
    Light,
    /// Crisp, palate-cleansing food
    Refreshing,
    /// Food that helps beat the heat
    Cooling,
    /// Neither warming nor cooling
    Balanced,
    /// Familiar, indulgent food
    Comfort,
    /// Food that warms from the inside
    Warming,
}

impl MoodCategory {
    /// The mood's tag string
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Refreshing => "refreshing",
            Self::Cooling => "cooling",
            Self::Balanced => "balanced",
            Self::Comfort => "comfort",
            Self::Warming => "warming",
        }
    }

    /// True when a catalog category string names this mood
    #[must_use]
    pub fn matches_category(self, category: &str) -> bool {
        category.eq_ignore_ascii_case(self.as_tag())
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Calendar season, Northern-hemisphere month mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// March through May
    Spring,
    /// June through August
    Summer,
    /// September through November
    Fall,
    /// December through February
    Winter,
}

impl Season {
    /// Season for a 1-based calendar month
    ///
    /// Months outside 1..=12 are treated as winter, matching the
    /// December-through-February catch-all arm.
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Ingredient-preference keywords for this season
    ///
    /// Matched case-insensitively as substrings of a recipe's category,
    /// description, and nutrition highlights.
    #[must_use]
    pub const fn preference_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Spring => &["fresh", "light", "vegetables"],
            Self::Summer => &["cooling", "fresh", "fruits"],
            Self::Fall => &["warming", "hearty", "spices"],
            Self::Winter => &["comfort", "warming", "rich"],
        }
    }

    /// The season's tag string
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Recipe difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Minimal cooking skills required
    Easy,
    /// Some cooking experience helpful
    Medium,
    /// Advanced techniques required
    Hard,
}

impl Difficulty {
    /// Human-readable explanation of the skill level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Easy => "Simple preparation, minimal cooking skills required",
            Self::Medium => "Some cooking experience helpful, moderate preparation time",
            Self::Hard => "Advanced techniques required, longer preparation and attention needed",
        }
    }

    /// The difficulty's tag string
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(UnknownTagError::new("difficulty", other)),
        }
    }
}

/// A temperature reading in both units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Degrees Celsius, as reported by the provider
    pub celsius: f64,
    /// Degrees Fahrenheit, derived as `celsius * 9/5 + 32`
    pub fahrenheit: f64,
}

impl Temperature {
    /// Build a reading from a celsius value, deriving fahrenheit
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

/// A resolved weather observation for one location
///
/// Produced by an external weather collaborator; the engine only consumes
/// these values and never fetches anything itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Current temperature reading
    pub temperature: Temperature,
    /// Current condition tag
    pub condition: WeatherCondition,
    /// Relative humidity percentage, when the provider reports one
    pub humidity: Option<f64>,
    /// Human-readable summary, e.g. "Rainy and cold"
    pub description: String,
    /// City name the observation is for
    pub location: String,
}

impl WeatherSnapshot {
    /// Build a snapshot with a derived human-readable description
    #[must_use]
    pub fn new(location: impl Into<String>, condition: WeatherCondition, celsius: f64) -> Self {
        Self {
            temperature: Temperature::from_celsius(celsius),
            condition,
            humidity: None,
            description: describe_conditions(condition, celsius),
            location: location.into(),
        }
    }

    /// Attach a humidity reading
    #[must_use]
    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }
}

/// Compose the human-readable summary line for a condition and reading
#[must_use]
pub fn describe_conditions(condition: WeatherCondition, celsius: f64) -> String {
    format!(
        "{} and {}",
        condition.display_phrase(),
        TemperatureBand::from_celsius(celsius)
    )
}

/// A catalog recipe record
///
/// Catalog-defined and immutable at runtime. `category` and
/// `weather_types` are open tag strings by design; see the module docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique catalog id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Style tag, e.g. "comfort" or "refreshing"
    pub category: String,
    /// Weather tags this recipe suits
    pub weather_types: Vec<String>,
    /// Temperature band this recipe targets
    pub temperature: TemperatureBand,
    /// Active cooking time in minutes
    pub cooking_time_minutes: u32,
    /// Required skill level
    pub difficulty: Difficulty,
    /// Ingredient lines, in order
    pub ingredients: Vec<String>,
    /// Preparation steps, in order
    pub instructions: Vec<String>,
    /// One-line pitch shown with recommendations
    pub description: String,
    /// Nutrition tags, e.g. "High protein"
    pub nutrition_highlights: Vec<String>,
}

impl Recipe {
    /// True when this recipe lists the given condition among its weather
    /// types
    #[must_use]
    pub fn suits_condition(&self, condition: WeatherCondition) -> bool {
        let tag = condition.as_tag();
        self.weather_types.iter().any(|t| t == tag)
    }

    /// True when the keyword appears (case-insensitively) in the
    /// category, description, or any nutrition highlight
    #[must_use]
    pub fn mentions_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.category.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
            || self
                .nutrition_highlights
                .iter()
                .any(|h| h.to_lowercase().contains(&keyword))
    }

    /// True when any nutrition highlight contains any of the keywords,
    /// case-insensitively
    #[must_use]
    pub fn nutrition_mentions_any(&self, keywords: &[&str]) -> bool {
        self.nutrition_highlights.iter().any(|highlight| {
            let highlight = highlight.to_lowercase();
            keywords.iter().any(|k| highlight.contains(k))
        })
    }
}

/// Optional caller-supplied filtering preferences
///
/// The default value filters nothing. When both fields are set a recipe
/// must satisfy both to survive stage three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Upper bound on cooking time, in minutes
    pub max_cooking_time_minutes: Option<u32>,
    /// Exact-match difficulty filter
    pub difficulty: Option<Difficulty>,
}

impl UserPreferences {
    /// True when no filters are set
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.max_cooking_time_minutes.is_none() && self.difficulty.is_none()
    }

    /// True when the recipe satisfies every filter that is set
    #[must_use]
    pub fn allows(&self, recipe: &Recipe) -> bool {
        if let Some(max_minutes) = self.max_cooking_time_minutes {
            if recipe.cooking_time_minutes > max_minutes {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }
        true
    }
}
