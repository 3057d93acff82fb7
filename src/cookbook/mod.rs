// src/cookbook/mod.rs

//! The cookbook: entries, validation, storage and resolution
//!
//! Clients register named entries that are either base ingredients with a
//! cook time or recipes made of other entries, then ask for a recipe's
//! summary: every base ingredient it needs and the total cook time.
//!
//! # Layout
//!
//! - [`entry`]: the closed `Ingredient | Recipe` model
//! - [`validate`]: turns raw JSON requests into entries
//! - [`registry`]: the locked name -> entry map
//! - [`resolve`]: recursive expansion with cycle detection
//! - [`summary`]: recipe summaries built on resolution
//! - [`seed`]: optional start-up loading from a JSON file
//!
//! # Example
//!
//! ```
//! use cookbook::cookbook::Registry;
//! use serde_json::json;
//!
//! let registry = Registry::new();
//! registry.create(&json!({"type": "ingredient", "name": "egg", "cookTime": 2})).unwrap();
//! registry
//!     .create(&json!({
//!         "type": "recipe",
//!         "name": "omelette",
//!         "requiredItems": [{"name": "egg", "quantity": 3}]
//!     }))
//!     .unwrap();
//!
//! let summary = registry.summary("omelette").unwrap();
//! assert_eq!(summary.cook_time, 6);
//! assert_eq!(summary.quantity_of("egg"), 3);
//! ```

pub mod entry;
mod error;
pub mod registry;
pub mod resolve;
pub mod seed;
pub mod summary;
pub mod validate;

pub use entry::{Entry, Ingredient, Recipe, RequiredItem};
pub use error::{SummaryError, ValidationError};
pub use registry::Registry;
pub use resolve::{resolve, Resolution};
pub use seed::{load_seed, load_seed_str};
pub use summary::{summarize, IngredientQuantity, Summary};
pub use validate::validate_entry;
