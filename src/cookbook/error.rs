// src/cookbook/error.rs
//! Error types for entry creation and summary queries

use thiserror::Error;

/// Reasons an entry creation request is rejected
///
/// The registry is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request is missing a required field or has the wrong shape
    #[error("Malformed entry request: {0}")]
    MalformedRequest(String),

    /// An entry with this name is already registered
    #[error("Entry names must be unique: '{0}' already exists")]
    DuplicateName(String),

    /// The same name appears twice in one recipe's required items
    #[error("Recipe requiredItems can only have one element per name: '{0}' is repeated")]
    DuplicateRequiredItem(String),

    /// Ingredient cook time is missing, not an integer, or negative
    #[error("cookTime must be an integer greater than or equal to 0")]
    InvalidCookTime,

    /// Required item quantity is not a positive integer
    #[error("Quantity of required item '{0}' must be an integer greater than 0")]
    InvalidQuantity(String),

    /// Entry type is neither "recipe" nor "ingredient"
    #[error("Entry type can only be 'recipe' or 'ingredient', got {0}")]
    UnknownType(String),
}

impl ValidationError {
    /// Stable short code for logs and metrics
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedRequest(_) => "malformed_request",
            ValidationError::DuplicateName(_) => "duplicate_name",
            ValidationError::DuplicateRequiredItem(_) => "duplicate_required_item",
            ValidationError::InvalidCookTime => "invalid_cook_time",
            ValidationError::InvalidQuantity(_) => "invalid_quantity",
            ValidationError::UnknownType(_) => "unknown_type",
        }
    }
}

/// Reasons a summary query fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// The queried name is not registered at all
    #[error("A recipe with the name '{0}' cannot be found")]
    NotFound(String),

    /// The queried name is an ingredient
    #[error("'{0}' is an ingredient, not a recipe")]
    NotARecipe(String),

    /// A required item names an entry that is not registered
    #[error("Required item '{0}' is missing from the cookbook")]
    UnknownEntry(String),

    /// Expanding the recipe revisits a name already on the expansion path
    #[error("Cyclic dependency: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),

    /// Quantities or cook times grew past what fits in a u64
    #[error("Totals for '{0}' are too large to compute")]
    QuantityOverflow(String),
}

impl SummaryError {
    /// Stable short code for logs and metrics
    pub fn code(&self) -> &'static str {
        match self {
            SummaryError::NotFound(_) => "not_found",
            SummaryError::NotARecipe(_) => "not_a_recipe",
            SummaryError::UnknownEntry(_) => "unknown_entry",
            SummaryError::CyclicDependency(_) => "cyclic_dependency",
            SummaryError::QuantityOverflow(_) => "quantity_overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_shows_path() {
        let err = SummaryError::CyclicDependency(vec![
            "A".to_string(),
            "B".to_string(),
            "A".to_string(),
        ]);
        assert_eq!(err.to_string(), "Cyclic dependency: A -> B -> A");
        assert_eq!(err.code(), "cyclic_dependency");
    }

    #[test]
    fn test_validation_messages_are_distinct() {
        let errors = [
            ValidationError::MalformedRequest("missing name".to_string()),
            ValidationError::DuplicateName("x".to_string()),
            ValidationError::DuplicateRequiredItem("x".to_string()),
            ValidationError::InvalidCookTime,
            ValidationError::InvalidQuantity("x".to_string()),
            ValidationError::UnknownType("\"x\"".to_string()),
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
