// ABOUTME: Built-in recipe catalog used by the demo CLI and tests
// ABOUTME: Six records; callers inject this (or any other) dataset into the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkcast

//! The built-in recipe dataset.
//!
//! The engine never reaches for a global catalog: callers pass a slice of
//! recipes explicitly, which keeps the dataset substitutable in tests. This
//! module provides the stock six-recipe catalog the demo ships with.

use crate::models::{Difficulty, Recipe, TemperatureBand};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Build the stock catalog
///
/// Loaded once at startup by callers and shared by reference from then on.
#[must_use]
pub fn builtin_catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Hearty Beef Stew".to_owned(),
            category: "comfort".to_owned(),
            weather_types: strings(&["cold", "rainy", "snowy"]),
            temperature: TemperatureBand::Cold,
            cooking_time_minutes: 120,
            difficulty: Difficulty::Medium,
            ingredients: strings(&[
                "2 lbs beef chuck roast, cubed",
                "4 large carrots, chopped",
                "3 potatoes, diced",
                "1 large onion, diced",
                "3 cloves garlic, minced",
                "4 cups beef broth",
                "2 tbsp tomato paste",
                "1 tsp thyme",
                "2 bay leaves",
                "Salt and pepper to taste",
            ]),
            instructions: strings(&[
                "Brown beef cubes in a large pot with oil",
                "Add onions and garlic, cook until fragrant",
                "Stir in tomato paste and cook for 1 minute",
                "Add broth, herbs, and seasonings",
                "Bring to boil, then simmer covered for 1 hour",
                "Add vegetables and cook for another 45 minutes",
                "Remove bay leaves and serve hot",
            ]),
            description: "Perfect for cold, dreary days when you need something warm and filling"
                .to_owned(),
            nutrition_highlights: strings(&["High protein", "Rich in vitamins", "Comfort food"]),
        },
        Recipe {
            id: 2,
            name: "Fresh Gazpacho".to_owned(),
            category: "refreshing".to_owned(),
            weather_types: strings(&["hot", "sunny", "clear"]),
            temperature: TemperatureBand::Hot,
            cooking_time_minutes: 15,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "6 large ripe tomatoes",
                "1 cucumber, peeled and seeded",
                "1 red bell pepper",
                "1/2 red onion",
                "3 cloves garlic",
                "1/4 cup olive oil",
                "2 tbsp red wine vinegar",
                "1 tsp salt",
                "Fresh basil leaves",
                "Crushed ice",
            ]),
            instructions: strings(&[
                "Roughly chop all vegetables",
                "Combine in blender with olive oil and vinegar",
                "Blend until smooth but still slightly chunky",
                "Season with salt and pepper",
                "Chill for at least 2 hours",
                "Serve cold with ice cubes and fresh basil",
            ]),
            description: "A cooling, refreshing soup perfect for hot summer days".to_owned(),
            nutrition_highlights: strings(&["Low calorie", "High in vitamins", "Hydrating"]),
        },
        Recipe {
            id: 3,
            name: "Grilled Chicken Salad".to_owned(),
            category: "light".to_owned(),
            weather_types: strings(&["warm", "sunny", "partly-cloudy"]),
            temperature: TemperatureBand::Warm,
            cooking_time_minutes: 25,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "2 chicken breasts",
                "Mixed greens (arugula, spinach, lettuce)",
                "1 avocado, sliced",
                "Cherry tomatoes, halved",
                "1/2 red onion, thinly sliced",
                "1/4 cup feta cheese, crumbled",
                "1/4 cup olive oil",
                "2 tbsp lemon juice",
                "1 tsp honey",
                "1 tsp Dijon mustard",
                "Salt and pepper",
            ]),
            instructions: strings(&[
                "Season chicken with salt, pepper, and herbs",
                "Grill chicken for 6-7 minutes per side",
                "Let chicken rest, then slice",
                "Whisk together oil, lemon juice, honey, and mustard",
                "Arrange greens, vegetables, and cheese in bowl",
                "Top with sliced chicken",
                "Drizzle with dressing and serve",
            ]),
            description: "Light and satisfying meal perfect for pleasant weather".to_owned(),
            nutrition_highlights: strings(&["High protein", "Fresh vegetables", "Balanced meal"]),
        },
        Recipe {
            id: 4,
            name: "Spicy Thai Curry".to_owned(),
            category: "warming".to_owned(),
            weather_types: strings(&["cool", "rainy", "overcast"]),
            temperature: TemperatureBand::Cool,
            cooking_time_minutes: 35,
            difficulty: Difficulty::Medium,
            ingredients: strings(&[
                "1 lb chicken thighs, cubed",
                "1 can coconut milk",
                "2 tbsp red curry paste",
                "1 bell pepper, sliced",
                "1 onion, sliced",
                "1 zucchini, sliced",
                "2 tbsp fish sauce",
                "1 tbsp brown sugar",
                "Fresh basil leaves",
                "Jasmine rice for serving",
                "Lime wedges",
            ]),
            instructions: strings(&[
                "Cook rice according to package directions",
                "Heat oil in large pan, cook chicken until browned",
                "Add curry paste and cook for 1 minute",
                "Pour in coconut milk, bring to simmer",
                "Add vegetables, fish sauce, and sugar",
                "Simmer for 15-20 minutes until vegetables are tender",
                "Stir in fresh basil",
                "Serve over rice with lime wedges",
            ]),
            description: "Warming and aromatic curry to brighten up gloomy days".to_owned(),
            nutrition_highlights: strings(&["Spicy and warming", "Rich flavors", "Comfort food"]),
        },
        Recipe {
            id: 5,
            name: "Iced Fruit Smoothie Bowl".to_owned(),
            category: "cooling".to_owned(),
            weather_types: strings(&["hot", "sunny", "humid"]),
            temperature: TemperatureBand::Hot,
            cooking_time_minutes: 10,
            difficulty: Difficulty::Easy,
            ingredients: strings(&[
                "1 frozen banana",
                "1/2 cup frozen mango chunks",
                "1/2 cup frozen berries",
                "1/2 cup coconut milk",
                "1 tbsp honey",
                "Granola for topping",
                "Fresh berries for topping",
                "Coconut flakes",
                "Chia seeds",
                "Mint leaves",
            ]),
            instructions: strings(&[
                "Blend frozen fruits with coconut milk and honey",
                "Blend until thick and creamy",
                "Pour into chilled bowl",
                "Arrange toppings in colorful patterns",
                "Add granola, fresh berries, and coconut",
                "Sprinkle with chia seeds",
                "Garnish with mint and serve immediately",
            ]),
            description: "Refreshing and nutritious bowl perfect for beating the heat".to_owned(),
            nutrition_highlights: strings(&["Antioxidant rich", "Natural sugars", "Cooling effect"]),
        },
        Recipe {
            id: 6,
            name: "Mushroom Risotto".to_owned(),
            category: "comfort".to_owned(),
            weather_types: strings(&["cold", "rainy", "foggy"]),
            temperature: TemperatureBand::Cold,
            cooking_time_minutes: 45,
            difficulty: Difficulty::Hard,
            ingredients: strings(&[
                "1 1/2 cups Arborio rice",
                "6 cups warm vegetable broth",
                "1 lb mixed mushrooms, sliced",
                "1 large onion, finely diced",
                "3 cloves garlic, minced",
                "1/2 cup white wine",
                "1/2 cup Parmesan cheese, grated",
                "3 tbsp butter",
                "2 tbsp olive oil",
                "Fresh thyme",
                "Salt and pepper",
            ]),
            instructions: strings(&[
                "Keep broth warm in separate pot",
                "Saute mushrooms until golden, set aside",
                "In same pan, cook onion until translucent",
                "Add garlic and rice, stir for 2 minutes",
                "Pour in wine, stir until absorbed",
                "Add broth one ladle at a time, stirring constantly",
                "Continue until rice is creamy and tender (20-25 minutes)",
                "Stir in mushrooms, butter, and Parmesan",
                "Season and serve immediately",
            ]),
            description: "Creamy, luxurious dish perfect for cozy indoor dining".to_owned(),
            nutrition_highlights: strings(&["Creamy comfort", "Umami rich", "Satisfying"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_recipes_with_unique_ids() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 6);
        let ids: HashSet<u32> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_recipe_is_fully_specified() {
        for recipe in builtin_catalog() {
            assert!(!recipe.name.is_empty());
            assert!(!recipe.category.is_empty());
            assert!(!recipe.weather_types.is_empty());
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
            assert!(!recipe.nutrition_highlights.is_empty());
            assert!(recipe.cooking_time_minutes > 0);
        }
    }

    #[test]
    fn test_known_records_survive_construction() {
        let catalog = builtin_catalog();
        let stew = &catalog[0];
        assert_eq!(stew.name, "Hearty Beef Stew");
        assert_eq!(stew.temperature, TemperatureBand::Cold);
        assert!(stew.weather_types.iter().any(|t| t == "rainy"));

        let gazpacho = &catalog[1];
        assert_eq!(gazpacho.difficulty, Difficulty::Easy);
        assert_eq!(gazpacho.temperature, TemperatureBand::Hot);
    }
}
