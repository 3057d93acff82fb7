// src/cookbook/validate.rs

//! Entry validation
//!
//! Turns an untyped creation request into a well-formed [`Entry`]. Checks run
//! in a fixed order and the first failure wins:
//!
//! 1. shape: object with `type` and a string `name`
//! 2. name not already registered
//! 3. recipe: `requiredItems` present, each item well formed, positive
//!    quantities, no repeated names
//! 4. ingredient: `cookTime` is an integer >= 0
//! 5. any other `type` is rejected

use crate::cookbook::entry::{Entry, Ingredient, Recipe, RequiredItem};
use crate::cookbook::error::ValidationError;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Validate a creation request
///
/// `is_registered` reports whether a name is already taken. The caller must
/// hold the registry write lock across this call and the following insert.
pub fn validate_entry(
    request: &Value,
    is_registered: impl Fn(&str) -> bool,
) -> Result<Entry, ValidationError> {
    let fields = request
        .as_object()
        .ok_or_else(|| malformed("request body must be a JSON object"))?;

    let entry_type = fields
        .get("type")
        .ok_or_else(|| malformed("missing 'type'"))?;
    let name = fields
        .get("name")
        .ok_or_else(|| malformed("missing 'name'"))?
        .as_str()
        .ok_or_else(|| malformed("'name' must be a string"))?;

    if is_registered(name) {
        return Err(ValidationError::DuplicateName(name.to_string()));
    }

    match entry_type.as_str() {
        Some("recipe") => validate_recipe(name, fields).map(Entry::from),
        Some("ingredient") => validate_ingredient(name, fields).map(Entry::from),
        _ => Err(ValidationError::UnknownType(entry_type.to_string())),
    }
}

fn validate_recipe(name: &str, fields: &Map<String, Value>) -> Result<Recipe, ValidationError> {
    let items = fields
        .get("requiredItems")
        .ok_or_else(|| malformed("recipe is missing 'requiredItems'"))?
        .as_array()
        .ok_or_else(|| malformed("'requiredItems' must be an array"))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut required_items = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let item = item
            .as_object()
            .ok_or_else(|| malformed(format!("requiredItems[{}] must be an object", index)))?;

        let item_name = item
            .get("name")
            .ok_or_else(|| malformed(format!("requiredItems[{}] is missing 'name'", index)))?
            .as_str()
            .ok_or_else(|| malformed(format!("requiredItems[{}].name must be a string", index)))?;
        let quantity = item
            .get("quantity")
            .ok_or_else(|| malformed(format!("requiredItems[{}] is missing 'quantity'", index)))?;

        let quantity = quantity
            .as_u64()
            .filter(|q| *q > 0)
            .ok_or_else(|| ValidationError::InvalidQuantity(item_name.to_string()))?;

        if !seen.insert(item_name) {
            return Err(ValidationError::DuplicateRequiredItem(item_name.to_string()));
        }

        required_items.push(RequiredItem::new(item_name, quantity));
    }

    Ok(Recipe::new(name, required_items))
}

fn validate_ingredient(
    name: &str,
    fields: &Map<String, Value>,
) -> Result<Ingredient, ValidationError> {
    // as_u64 is None for floats, negatives and non-numbers alike
    let cook_time = fields
        .get("cookTime")
        .and_then(Value::as_u64)
        .ok_or(ValidationError::InvalidCookTime)?;

    Ok(Ingredient::new(name, cook_time))
}

fn malformed(reason: impl Into<String>) -> ValidationError {
    ValidationError::MalformedRequest(reason.into())
}
