// ABOUTME: Weather analysis deriving cooking context from a snapshot
// ABOUTME: Temperature bands, mood categories, cooking motivation, comfort-food need
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! Derives a [`WeatherAnalysis`] from a [`WeatherSnapshot`].
//!
//! The analysis is recomputed fresh for every recommendation request and
//! discarded afterwards. The season comes from an injected timestamp so
//! callers and tests control the clock.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AnalysisError;
use crate::models::{MoodCategory, Season, TemperatureBand, WeatherCondition, WeatherSnapshot};
use crate::scoring_constants::comfort_thresholds;

/// Ordinal level used for cooking motivation and comfort-food need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Weak pull
    Low,
    /// Neutral
    Moderate,
    /// Strong pull
    High,
}

/// How inclined the weather makes people to spend time cooking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingMotivation {
    /// Overall motivation level
    pub level: Intensity,
    /// Human-readable reasons behind the level
    pub reasons: Vec<String>,
}

/// How strongly the weather calls for comfort food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortFoodNeed {
    /// Overall need level
    pub level: Intensity,
    /// Human-readable factors behind the level
    pub factors: Vec<String>,
}

/// The temperature portion of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureAnalysis {
    /// Celsius reading the analysis was derived from
    pub value: f64,
    /// Bucketed band
    pub band: TemperatureBand,
    /// Fahrenheit companion reading
    pub fahrenheit: f64,
}

/// Everything the scoring stages need to know about current weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAnalysis {
    /// Analyzed temperature
    pub temperature: TemperatureAnalysis,
    /// Snapshot condition
    pub condition: WeatherCondition,
    /// Season at the injected timestamp
    pub season: Season,
    /// Mood union keyed by condition and band, insertion-ordered,
    /// deduplicated
    pub mood_categories: Vec<MoodCategory>,
    /// Motivation assessment
    pub cooking_motivation: CookingMotivation,
    /// Comfort-food assessment
    pub comfort_food_need: ComfortFoodNeed,
    /// Human-readable weather summary carried through to explanations
    pub weather_description: String,
    /// True when this record was produced by the degraded fallback path
    #[serde(default)]
    pub fallback_mode: bool,
}

impl WeatherAnalysis {
    /// Degraded analysis record for the fallback path
    ///
    /// Carries the snapshot's raw readings verbatim with empty mood and
    /// reason lists. A non-finite celsius value buckets as cold rather
    /// than inventing a reading.
    pub(crate) fn degraded(snapshot: &WeatherSnapshot, at: DateTime<Utc>) -> Self {
        Self {
            temperature: TemperatureAnalysis {
                value: snapshot.temperature.celsius,
                band: TemperatureBand::from_celsius(snapshot.temperature.celsius),
                fahrenheit: snapshot.temperature.fahrenheit,
            },
            condition: snapshot.condition,
            season: Season::from_month(at.month()),
            mood_categories: Vec::new(),
            cooking_motivation: CookingMotivation {
                level: Intensity::Moderate,
                reasons: Vec::new(),
            },
            comfort_food_need: ComfortFoodNeed {
                level: Intensity::Low,
                factors: Vec::new(),
            },
            weather_description: snapshot.description.clone(),
            fallback_mode: true,
        }
    }
}

/// Analyze a snapshot at the given timestamp
///
/// # Errors
///
/// Returns [`AnalysisError`] when the temperature or humidity reading is
/// not a finite number. The engine converts this into its fallback result;
/// no error reaches the engine's callers.
pub fn analyze_weather(
    snapshot: &WeatherSnapshot,
    at: DateTime<Utc>,
) -> Result<WeatherAnalysis, AnalysisError> {
    let celsius = snapshot.temperature.celsius;
    if !celsius.is_finite() {
        return Err(AnalysisError::NonFiniteTemperature { value: celsius });
    }
    if let Some(humidity) = snapshot.humidity {
        if !humidity.is_finite() {
            return Err(AnalysisError::NonFiniteHumidity { value: humidity });
        }
    }

    let band = TemperatureBand::from_celsius(celsius);
    let season = Season::from_month(at.month());
    let mood_categories = mood_union(snapshot.condition, band);
    let cooking_motivation = assess_cooking_motivation(band, snapshot.condition);
    let comfort_food_need = assess_comfort_food_need(celsius, snapshot.condition, snapshot.humidity);

    debug!(
        location = %snapshot.location,
        band = %band,
        season = %season,
        moods = mood_categories.len(),
        "weather analysis complete"
    );

    Ok(WeatherAnalysis {
        temperature: TemperatureAnalysis {
            value: celsius,
            band,
            fahrenheit: snapshot.temperature.fahrenheit,
        },
        condition: snapshot.condition,
        season,
        mood_categories,
        cooking_motivation,
        comfort_food_need,
        weather_description: snapshot.description.clone(),
        fallback_mode: false,
    })
}

/// Moods keyed by the snapshot condition
const fn condition_moods(condition: WeatherCondition) -> &'static [MoodCategory] {
    match condition {
        WeatherCondition::Clear => &[MoodCategory::Light, MoodCategory::Refreshing],
        WeatherCondition::Sunny => &[
            MoodCategory::Light,
            MoodCategory::Refreshing,
            MoodCategory::Cooling,
        ],
        WeatherCondition::PartlyCloudy => &[MoodCategory::Light, MoodCategory::Balanced],
        WeatherCondition::Cloudy
        | WeatherCondition::Overcast
        | WeatherCondition::Rainy
        | WeatherCondition::Drizzle
        | WeatherCondition::Snow
        | WeatherCondition::Fog => &[MoodCategory::Comfort, MoodCategory::Warming],
    }
}

/// Moods keyed by the temperature band
const fn band_moods(band: TemperatureBand) -> &'static [MoodCategory] {
    match band {
        TemperatureBand::Hot => &[MoodCategory::Cooling, MoodCategory::Refreshing],
        TemperatureBand::Warm => &[MoodCategory::Light, MoodCategory::Balanced],
        TemperatureBand::Cool | TemperatureBand::Cold => {
            &[MoodCategory::Warming, MoodCategory::Comfort]
        }
    }
}

/// Union of condition moods and band moods, condition first, deduplicated
fn mood_union(condition: WeatherCondition, band: TemperatureBand) -> Vec<MoodCategory> {
    let mut moods = Vec::new();
    for mood in condition_moods(condition)
        .iter()
        .chain(band_moods(band).iter())
    {
        if !moods.contains(mood) {
            moods.push(*mood);
        }
    }
    moods
}

fn assess_cooking_motivation(
    band: TemperatureBand,
    condition: WeatherCondition,
) -> CookingMotivation {
    let mut level = Intensity::Moderate;
    let mut reasons = Vec::new();

    if band == TemperatureBand::Cold {
        level = Intensity::High;
        reasons.push("Cold weather makes warm, cooked meals more appealing".to_owned());
    }
    if band == TemperatureBand::Hot {
        level = Intensity::Low;
        reasons.push("Hot weather makes people prefer minimal cooking".to_owned());
    }

    if matches!(
        condition,
        WeatherCondition::Rainy
            | WeatherCondition::Drizzle
            | WeatherCondition::Overcast
            | WeatherCondition::Cloudy
    ) {
        level = if level == Intensity::Low {
            Intensity::Moderate
        } else {
            Intensity::High
        };
        reasons.push("Gloomy weather increases desire for comfort cooking".to_owned());
    }

    if matches!(condition, WeatherCondition::Clear | WeatherCondition::Sunny) {
        reasons.push("Nice weather encourages fresh, light meal preparation".to_owned());
    }

    CookingMotivation { level, reasons }
}

fn assess_comfort_food_need(
    celsius: f64,
    condition: WeatherCondition,
    humidity: Option<f64>,
) -> ComfortFoodNeed {
    let mut level = Intensity::Low;
    let mut factors = Vec::new();

    if celsius < comfort_thresholds::HIGH_NEED_MAX_CELSIUS {
        level = Intensity::High;
        factors.push("Very cold temperature increases comfort food craving".to_owned());
    } else if celsius < comfort_thresholds::MODERATE_NEED_MAX_CELSIUS {
        level = Intensity::Moderate;
        factors.push("Cool temperature moderately increases comfort food appeal".to_owned());
    }

    if matches!(
        condition,
        WeatherCondition::Rainy
            | WeatherCondition::Drizzle
            | WeatherCondition::Snow
            | WeatherCondition::Fog
    ) {
        level = if level == Intensity::Low {
            Intensity::Moderate
        } else {
            Intensity::High
        };
        factors.push("Dreary weather conditions increase comfort food desire".to_owned());
    }

    if let Some(humidity) = humidity {
        if humidity > comfort_thresholds::HIGH_HUMIDITY_PERCENT {
            factors.push("High humidity may affect food preferences".to_owned());
        }
    }

    ComfortFoodNeed { level, factors }
}
