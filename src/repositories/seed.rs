// src/repositories/seed.rs
//
// Fixed initial data set loaded at startup

use crate::domain::{Difficulty, InventoryItem, Recipe};
use crate::repositories::raw_input::DEFAULT_USER_ID;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            recipe_id: "R-00001".to_string(),
            title: "Classic Spaghetti Carbonara".to_string(),
            chef: "Mario Rossi".to_string(),
            ingredients: lines(&[
                "400g spaghetti",
                "200g pancetta",
                "4 large eggs",
                "100g pecorino romano",
                "Black pepper",
            ]),
            instructions: lines(&[
                "Boil the spaghetti in salted water",
                "Fry the pancetta until crisp",
                "Whisk the eggs with the grated cheese",
                "Toss the pasta with the pancetta off the heat and stir in the egg mixture",
                "Season with black pepper and serve",
            ]),
            meal_type: "Dinner".to_string(),
            cuisine_type: "Italian".to_string(),
            prep_time: 25.0,
            difficulty: Difficulty::Medium,
            servings: 4.0,
            created_date: "2025-07-20".to_string(),
        },
        Recipe {
            recipe_id: "R-00002".to_string(),
            title: "Avocado Toast".to_string(),
            chef: "Sarah Johnson".to_string(),
            ingredients: lines(&[
                "2 slices sourdough bread",
                "1 ripe avocado",
                "1 tbsp lemon juice",
                "Salt",
                "Chili flakes",
            ]),
            instructions: lines(&[
                "Toast the bread",
                "Mash the avocado with lemon juice and salt",
                "Spread on the toast and top with chili flakes",
            ]),
            meal_type: "Breakfast".to_string(),
            cuisine_type: "American".to_string(),
            prep_time: 10.0,
            difficulty: Difficulty::Easy,
            servings: 2.0,
            created_date: "2025-07-21".to_string(),
        },
    ]
}

pub fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            inventory_id: "I-00001".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            ingredient_name: "Eggs".to_string(),
            quantity: 12.0,
            unit: "pieces".to_string(),
            category: "Dairy".to_string(),
            location: "Fridge".to_string(),
            cost: 0.5,
            purchase_date: Some("2025-07-18".to_string()),
            expiration_date: Some("2025-08-01".to_string()),
            created_date: "2025-07-18".to_string(),
        },
        InventoryItem {
            inventory_id: "I-00002".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            ingredient_name: "Chicken Breast".to_string(),
            quantity: 8.0,
            unit: "pieces".to_string(),
            category: "Meat".to_string(),
            location: "Freezer".to_string(),
            cost: 6.4,
            purchase_date: Some("2025-07-19".to_string()),
            expiration_date: Some("2025-10-19".to_string()),
            created_date: "2025-07-19".to_string(),
        },
    ]
}
