// src/lib.rs

//! Cookbook recipe registry
//!
//! Registers named ingredients and recipes and answers, for any recipe, which
//! base ingredients one unit of it needs and how long it takes to cook.
//!
//! # Architecture
//!
//! - In-memory only: the registry lives for the lifetime of the process
//! - One lock around the whole registry; creation is validate-then-insert
//!   under the write lock
//! - Resolution is recursive with an explicit path stack, so cyclic recipes
//!   fail instead of recursing forever
//! - The HTTP layer (feature `server`) is a thin axum wrapper around the
//!   registry

pub mod cookbook;
mod error;
pub mod name;

#[cfg(feature = "server")]
pub mod server;

pub use cookbook::{
    Entry, Ingredient, IngredientQuantity, Recipe, Registry, RequiredItem, Resolution, Summary,
    SummaryError, ValidationError,
};
pub use error::{Error, Result};
pub use name::{normalize_name, NameError};
