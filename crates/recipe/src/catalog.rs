use crate::model::{Recipe, RecipeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("recipe title is required")]
    MissingTitle,

    #[error("recipe id already in catalog: {0}")]
    DuplicateId(RecipeId),

    #[error("recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    #[error("invalid catalog document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// The recipe catalog, single source of truth for all derived views.
///
/// Serializes transparently as a JSON array of recipes, which is also the
/// whole-catalog interchange format used by import and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Append a recipe, enforcing the required title and id uniqueness.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), CatalogError> {
        if recipe.title.trim().is_empty() {
            return Err(CatalogError::MissingTitle);
        }
        if self.get(&recipe.id).is_some() {
            return Err(CatalogError::DuplicateId(recipe.id));
        }
        self.recipes.push(recipe);
        Ok(())
    }

    /// Replace an existing recipe in place, matched by id.
    pub fn update(&mut self, recipe: Recipe) -> Result<(), CatalogError> {
        if recipe.title.trim().is_empty() {
            return Err(CatalogError::MissingTitle);
        }
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => {
                *slot = recipe;
                Ok(())
            }
            None => Err(CatalogError::RecipeNotFound(recipe.id)),
        }
    }

    pub fn remove(&mut self, id: &RecipeId) -> Result<Recipe, CatalogError> {
        match self.recipes.iter().position(|r| &r.id == id) {
            Some(index) => Ok(self.recipes.remove(index)),
            None => Err(CatalogError::RecipeNotFound(id.clone())),
        }
    }

    /// Bulk import: append every record as-is, no deduplication. Matches the
    /// interchange contract where re-importing an export doubles the catalog.
    pub fn merge(&mut self, imported: Vec<Recipe>) {
        self.recipes.extend(imported);
    }

    /// Whole-catalog dump in the interchange format.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.recipes)?)
    }

    /// Parse a whole-catalog interchange document. Fails atomically: either
    /// the full document parses or nothing is returned.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(document)?;
        Ok(Catalog { recipes })
    }
}
