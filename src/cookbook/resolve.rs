// src/cookbook/resolve.rs

//! Recipe resolution
//!
//! Expands an entry into the base ingredients it is made of and the total
//! cook time for one unit of it. Quantities multiply along every path from
//! the queried entry down to an ingredient, and totals from different paths
//! are summed per ingredient.
//!
//! # Cycles
//!
//! Recipes may reference names that do not exist yet, so nothing stops a
//! chain of recipes from referring back to itself. The resolver keeps the
//! recipes currently being expanded on a path stack; meeting one of them
//! again fails with [`SummaryError::CyclicDependency`].
//!
//! Expansion runs on an explicit work stack rather than the call stack, so
//! arbitrarily deep chains of recipes resolve without exhausting a thread.
//!
//! # Shared sub-recipes
//!
//! A recipe reached through several paths (a diamond) is expanded once per
//! resolution: the per-unit result is memoized and scaled by the quantity on
//! each incoming edge.

use crate::cookbook::entry::{Entry, Recipe};
use crate::cookbook::error::SummaryError;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Flattened ingredient totals and cook time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Base ingredient name -> total quantity, ordered by name
    pub ingredients: BTreeMap<String, u64>,
    /// Sum of quantity * cook time over all base ingredients
    pub cook_time: u64,
}

impl Resolution {
    fn ingredient(name: &str, cook_time: u64) -> Self {
        let mut ingredients = BTreeMap::new();
        ingredients.insert(name.to_string(), 1);
        Self {
            ingredients,
            cook_time,
        }
    }

    /// Add `factor` units of `other` into this resolution
    ///
    /// Returns `None` on arithmetic overflow.
    fn merge_scaled(&mut self, other: &Resolution, factor: u64) -> Option<()> {
        self.cook_time = self
            .cook_time
            .checked_add(other.cook_time.checked_mul(factor)?)?;

        for (name, quantity) in &other.ingredients {
            let added = quantity.checked_mul(factor)?;
            let total = self.ingredients.entry(name.clone()).or_insert(0);
            *total = total.checked_add(added)?;
        }

        Some(())
    }
}

/// Resolve one unit of `name` against a snapshot of the registry
pub fn resolve(entries: &HashMap<String, Entry>, name: &str) -> Result<Resolution, SummaryError> {
    let mut resolver = Resolver {
        entries,
        root: name,
        path: Vec::new(),
        resolved: HashMap::new(),
    };

    resolver.run(name)?;

    // run always records the root on success
    Ok(resolver.resolved.remove(name).unwrap_or_default())
}

/// A recipe part-way through expansion
struct Frame<'a> {
    recipe: &'a Recipe,
    /// Index of the next required item to merge
    next: usize,
    total: Resolution,
}

struct Resolver<'a> {
    entries: &'a HashMap<String, Entry>,
    root: &'a str,
    /// Recipes currently being expanded, outermost first
    path: Vec<&'a str>,
    /// Per-unit results for entries already expanded in this resolution
    resolved: HashMap<&'a str, Resolution>,
}

impl<'a> Resolver<'a> {
    /// Post-order walk from `name`: a recipe is finished once every required
    /// item has a per-unit result to merge.
    fn run(&mut self, name: &str) -> Result<(), SummaryError> {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        self.enter(name, &mut stack)?;

        while let Some(frame) = stack.last_mut() {
            let recipe = frame.recipe;
            match recipe.required_items.get(frame.next) {
                Some(item) => match self.resolved.get(item.name.as_str()) {
                    Some(child) => {
                        frame
                            .total
                            .merge_scaled(child, item.quantity)
                            .ok_or_else(|| SummaryError::QuantityOverflow(self.root.to_string()))?;
                        frame.next += 1;
                    }
                    None => self.enter(&item.name, &mut stack)?,
                },
                None => {
                    self.path.pop();
                    if let Some(Frame { recipe, total, .. }) = stack.pop() {
                        self.resolved.insert(recipe.name.as_str(), total);
                    }
                }
            }
        }

        Ok(())
    }

    /// Start expanding `name`, which has no result yet
    ///
    /// Ingredients resolve immediately; recipes are pushed onto `stack`.
    fn enter(&mut self, name: &str, stack: &mut Vec<Frame<'a>>) -> Result<(), SummaryError> {
        let entries = self.entries;
        let entry = entries
            .get(name)
            .ok_or_else(|| SummaryError::UnknownEntry(name.to_string()))?;

        match entry {
            Entry::Ingredient(ingredient) => {
                self.resolved.insert(
                    ingredient.name.as_str(),
                    Resolution::ingredient(&ingredient.name, ingredient.cook_time),
                );
            }
            Entry::Recipe(recipe) => {
                if let Some(start) = self.path.iter().position(|n| *n == recipe.name) {
                    let mut cycle: Vec<String> =
                        self.path[start..].iter().map(|n| n.to_string()).collect();
                    cycle.push(recipe.name.clone());
                    return Err(SummaryError::CyclicDependency(cycle));
                }

                self.path.push(&recipe.name);
                trace!("Expanding recipe '{}' (depth {})", recipe.name, self.path.len());

                stack.push(Frame {
                    recipe,
                    next: 0,
                    total: Resolution::default(),
                });
            }
        }

        Ok(())
    }
}
