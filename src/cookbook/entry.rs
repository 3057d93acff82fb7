// src/cookbook/entry.rs

//! Entry model: the two kinds of things the registry knows about
//!
//! An [`Entry`] is either a base [`Ingredient`] with a fixed cook time or a
//! [`Recipe`] built from other entries. The set is closed; everything that
//! walks entries matches on both variants.

use serde::{Deserialize, Serialize};

/// A named registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Recipe(Recipe),
    Ingredient(Ingredient),
}

impl Entry {
    /// Name the entry is registered under
    pub fn name(&self) -> &str {
        match self {
            Entry::Recipe(recipe) => &recipe.name,
            Entry::Ingredient(ingredient) => &ingredient.name,
        }
    }

    /// Wire tag for this variant ("recipe" or "ingredient")
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Recipe(_) => "recipe",
            Entry::Ingredient(_) => "ingredient",
        }
    }

    pub fn is_recipe(&self) -> bool {
        matches!(self, Entry::Recipe(_))
    }
}

impl From<Recipe> for Entry {
    fn from(recipe: Recipe) -> Self {
        Entry::Recipe(recipe)
    }
}

impl From<Ingredient> for Entry {
    fn from(ingredient: Ingredient) -> Self {
        Entry::Ingredient(ingredient)
    }
}

/// A recipe composed of other entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Sub-items in declaration order; names are unique within the list
    #[serde(rename = "requiredItems")]
    pub required_items: Vec<RequiredItem>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self {
            name: name.into(),
            required_items,
        }
    }
}

/// A base ingredient that cannot be broken down further
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Cook time for one unit
    #[serde(rename = "cookTime")]
    pub cook_time: u64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, cook_time: u64) -> Self {
        Self {
            name: name.into(),
            cook_time,
        }
    }
}

/// A reference from a recipe to another entry by name
///
/// The referenced entry does not have to exist when the recipe is created;
/// it is looked up when the recipe is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}
