// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::{Ingredient, Recipe, Registry, RequiredItem};

/// Register an ingredient, panicking on failure.
pub fn add_ingredient(registry: &Registry, name: &str, cook_time: u64) {
    registry
        .insert(Ingredient::new(name, cook_time).into())
        .unwrap();
}

/// Register a recipe from (name, quantity) pairs, panicking on failure.
pub fn add_recipe(registry: &Registry, name: &str, items: &[(&str, u64)]) {
    let items = items
        .iter()
        .map(|(item, quantity)| RequiredItem::new(*item, *quantity))
        .collect();
    registry.insert(Recipe::new(name, items).into()).unwrap();
}

/// A small kitchen with two levels of nesting and a shared sub-recipe.
///
/// - Egg (2), Flour (1), Milk (1), Butter (0)
/// - Batter: 2 Egg, 3 Flour, 1 Milk
/// - Pancake: 1 Batter, 1 Butter
/// - Breakfast: 3 Pancake, 1 Egg
pub fn setup_kitchen() -> Registry {
    let registry = Registry::new();
    add_ingredient(&registry, "Egg", 2);
    add_ingredient(&registry, "Flour", 1);
    add_ingredient(&registry, "Milk", 1);
    add_ingredient(&registry, "Butter", 0);
    add_recipe(&registry, "Batter", &[("Egg", 2), ("Flour", 3), ("Milk", 1)]);
    add_recipe(&registry, "Pancake", &[("Batter", 1), ("Butter", 1)]);
    add_recipe(&registry, "Breakfast", &[("Pancake", 3), ("Egg", 1)]);
    registry
}
