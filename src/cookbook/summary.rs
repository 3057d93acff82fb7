// src/cookbook/summary.rs
//! Recipe summaries: the answer to "what does one unit of this recipe take?"

use crate::cookbook::entry::Entry;
use crate::cookbook::error::SummaryError;
use crate::cookbook::resolve::resolve;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fully expanded ingredient list and cook time for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: u64,
    /// Base ingredients ordered by name
    pub ingredients: Vec<IngredientQuantity>,
}

/// One base ingredient and how much of it a summary needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

impl Summary {
    /// Quantity of a base ingredient, or 0 if the recipe does not use it
    pub fn quantity_of(&self, ingredient: &str) -> u64 {
        self.ingredients
            .iter()
            .find(|i| i.name == ingredient)
            .map_or(0, |i| i.quantity)
    }
}

/// Build the summary for `name`
///
/// Only recipes can be summarized; an ingredient name yields
/// [`SummaryError::NotARecipe`].
pub fn summarize(entries: &HashMap<String, Entry>, name: &str) -> Result<Summary, SummaryError> {
    match entries.get(name) {
        None => Err(SummaryError::NotFound(name.to_string())),
        Some(Entry::Ingredient(_)) => Err(SummaryError::NotARecipe(name.to_string())),
        Some(Entry::Recipe(recipe)) => {
            let resolution = resolve(entries, &recipe.name)?;
            Ok(Summary {
                name: recipe.name.clone(),
                cook_time: resolution.cook_time,
                ingredients: resolution
                    .ingredients
                    .into_iter()
                    .map(|(name, quantity)| IngredientQuantity { name, quantity })
                    .collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookbook::entry::{Ingredient, Recipe, RequiredItem};

    fn omelette_cookbook() -> HashMap<String, Entry> {
        let mut entries = HashMap::new();
        entries.insert("egg".to_string(), Ingredient::new("egg", 2).into());
        entries.insert(
            "omelette".to_string(),
            Recipe::new("omelette", vec![RequiredItem::new("egg", 3)]).into(),
        );
        entries
    }

    #[test]
    fn test_summary_of_recipe() {
        let summary = summarize(&omelette_cookbook(), "omelette").unwrap();
        assert_eq!(summary.name, "omelette");
        assert_eq!(summary.cook_time, 6);
        assert_eq!(
            summary.ingredients,
            vec![IngredientQuantity {
                name: "egg".to_string(),
                quantity: 3
            }]
        );
        assert_eq!(summary.quantity_of("egg"), 3);
        assert_eq!(summary.quantity_of("milk"), 0);
    }

    #[test]
    fn test_summary_of_ingredient_is_rejected() {
        let err = summarize(&omelette_cookbook(), "egg").unwrap_err();
        assert_eq!(err, SummaryError::NotARecipe("egg".to_string()));
    }

    #[test]
    fn test_summary_of_missing_name() {
        let err = summarize(&omelette_cookbook(), "pancake").unwrap_err();
        assert_eq!(err, SummaryError::NotFound("pancake".to_string()));

        let err = summarize(&omelette_cookbook(), "").unwrap_err();
        assert_eq!(err, SummaryError::NotFound(String::new()));
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = summarize(&omelette_cookbook(), "omelette").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "omelette",
                "cookTime": 6,
                "ingredients": [{"name": "egg", "quantity": 3}]
            })
        );
    }
}
