// ABOUTME: Forkcast CLI - demo front end for the recommendation engine
// ABOUTME: Builds a weather snapshot from flags and prints ranked recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! Command-line demo for the recommendation engine.
//!
//! Usage:
//! ```bash
//! # Rainy winter evening in Oslo
//! forkcast-cli --city Oslo --condition rainy --celsius 2 --humidity 85
//!
//! # Hot sunny day, easy recipes only, JSON output
//! forkcast-cli --city Seville --condition sunny --celsius 32 \
//!     --difficulty easy --json
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use forkcast::{
    builtin_catalog, Difficulty, RecommendationEngine, RecommendationResult, UserPreferences,
    WeatherCondition, WeatherSnapshot,
};

#[derive(Parser)]
#[command(
    name = "forkcast-cli",
    about = "Weather-aware recipe recommendations",
    long_about = "Scores the built-in recipe catalog against a weather snapshot \
                  and prints the top picks with their reasoning."
)]
struct Cli {
    /// City the snapshot is for
    #[arg(long)]
    city: String,

    /// Weather condition tag (clear, sunny, partly-cloudy, cloudy,
    /// overcast, rainy, drizzle, snow, fog)
    #[arg(long)]
    condition: String,

    /// Temperature in degrees Celsius
    #[arg(long)]
    celsius: f64,

    /// Relative humidity percentage
    #[arg(long)]
    humidity: Option<f64>,

    /// Only recommend recipes cookable within this many minutes
    #[arg(long)]
    max_cooking_time: Option<u32>,

    /// Only recommend recipes of this difficulty (easy, medium, hard)
    #[arg(long)]
    difficulty: Option<String>,

    /// Print the full result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let condition: WeatherCondition = cli
        .condition
        .parse()
        .with_context(|| format!("invalid --condition value: {}", cli.condition))?;

    let difficulty: Option<Difficulty> = match cli.difficulty.as_deref() {
        Some(raw) => Some(
            raw.parse()
                .with_context(|| format!("invalid --difficulty value: {raw}"))?,
        ),
        None => None,
    };

    let mut snapshot = WeatherSnapshot::new(cli.city, condition, cli.celsius);
    if let Some(humidity) = cli.humidity {
        snapshot = snapshot.with_humidity(humidity);
    }

    let preferences = UserPreferences {
        max_cooking_time_minutes: cli.max_cooking_time,
        difficulty,
    };

    let catalog = builtin_catalog();
    debug!(recipes = catalog.len(), "catalog loaded");

    let engine = RecommendationEngine::new();
    let result = engine.recommend(&snapshot, &preferences, &catalog);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_text(&result);
    }

    Ok(())
}

fn print_text(result: &RecommendationResult) {
    let analysis = &result.weather_analysis;
    println!(
        "Weather: {} ({}°C / {}°F, {})",
        analysis.weather_description,
        analysis.temperature.value,
        analysis.temperature.fahrenheit,
        analysis.season
    );
    if analysis.fallback_mode {
        println!("(degraded mode: serving generic recommendations)");
    }
    println!(
        "Considered {} recipes, {} matched the weather.\n",
        result.total_recipes_considered, result.weather_matched_count
    );

    if result.recommendations.is_empty() {
        println!("No recipes satisfy the given preferences.");
        return;
    }

    for pick in &result.recommendations {
        let rec = &pick.recommendation;
        println!(
            "#{} {} — score {} ({})",
            rec.rank,
            pick.recipe.name,
            pick.relevance_score,
            rec.confidence_level.as_tag()
        );
        println!(
            "   {} | {} min | {}",
            pick.recipe.category, pick.recipe.cooking_time_minutes, pick.recipe.difficulty
        );
        println!("   {}", rec.reasoning);
        println!();
    }
}
