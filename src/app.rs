use crate::config::Settings;
use anyhow::{Context, Result};
use mealplan::{WeeklyPlan, generate_weekly_plan};
use recipe::{Catalog, CatalogError, Cuisine, MealDay, MealTime, PrepTime, Recipe, RecipeId};
use shopping::{ShoppingList, ShoppingListAggregator};
use std::fs;
use std::path::Path;
use store::Store;

/// Application state: the recipe catalog as single source of truth, the
/// derived weekly plan, and the store both persist to.
///
/// The plan is regenerated wholesale when the catalog's size changes or on
/// an explicit reshuffle. Content-only edits deliberately leave the current
/// plan alone, embedded recipe copies included, until the next
/// regeneration.
pub struct App {
    store: Store,
    catalog: Catalog,
    plan: WeeklyPlan,
}

/// Field-by-field edit of an existing recipe. `None` keeps the current
/// value; the id never changes.
#[derive(Debug, Clone, Default)]
pub struct RecipeEdit {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub image: Option<String>,
    pub meal_day: Option<MealDay>,
    pub meal_time: Option<MealTime>,
    pub cuisine: Option<Cuisine>,
    pub prep_time: Option<PrepTime>,
}

impl App {
    /// Load state from the store, generating a first plan if none was saved.
    pub fn open(settings: &Settings) -> Result<Self> {
        let store = Store::open(&settings.data_dir)?;
        let catalog = store.load_catalog()?;
        let plan = match store.load_plan()? {
            Some(plan) => plan,
            None => {
                let plan = generate_weekly_plan(catalog.recipes());
                store.save_plan(&plan)?;
                plan
            }
        };
        tracing::debug!(recipes = catalog.len(), "application state loaded");
        Ok(App { store, catalog, plan })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        self.mutate_catalog(|catalog| Ok(catalog.add(recipe)?))
    }

    pub fn update_recipe(&mut self, recipe: Recipe) -> Result<()> {
        self.mutate_catalog(|catalog| Ok(catalog.update(recipe)?))
    }

    /// Edit a recipe in place, overriding only the fields set in `edit`.
    pub fn edit_recipe(&mut self, id: &RecipeId, edit: RecipeEdit) -> Result<()> {
        let mut updated = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::RecipeNotFound(id.clone()))?;
        if let Some(title) = edit.title {
            updated.title = title;
        }
        if let Some(ingredients) = edit.ingredients {
            updated.ingredients = ingredients;
        }
        if let Some(instructions) = edit.instructions {
            updated.instructions = instructions;
        }
        if let Some(image) = edit.image {
            updated.image = Some(image);
        }
        if let Some(meal_day) = edit.meal_day {
            updated.tags.meal_day = meal_day;
        }
        if let Some(meal_time) = edit.meal_time {
            updated.tags.meal_time = meal_time;
        }
        if let Some(cuisine) = edit.cuisine {
            updated.tags.cuisine = cuisine;
        }
        if let Some(prep_time) = edit.prep_time {
            updated.tags.prep_time = prep_time;
        }
        self.update_recipe(updated)
    }

    pub fn remove_recipe(&mut self, id: &RecipeId) -> Result<()> {
        self.mutate_catalog(|catalog| {
            catalog.remove(id)?;
            Ok(())
        })
    }

    /// Regenerate the whole week and persist it.
    pub fn reshuffle(&mut self) -> Result<()> {
        self.plan = generate_weekly_plan(self.catalog.recipes());
        self.store.save_plan(&self.plan)?;
        tracing::info!(assigned = self.plan.assigned_count(), "weekly plan reshuffled");
        Ok(())
    }

    /// Derived view, recomputed on every call.
    pub fn shopping_list(&self) -> ShoppingList {
        ShoppingListAggregator::new().aggregate(&self.plan)
    }

    /// Bulk import: parse the whole document first, then append. A parse
    /// failure leaves the catalog untouched. Returns the number of recipes
    /// appended.
    pub fn import_from(&mut self, path: &Path) -> Result<usize> {
        let document = fs::read_to_string(path)
            .with_context(|| format!("reading import file {}", path.display()))?;
        let imported = Catalog::from_json(&document)
            .with_context(|| format!("parsing import file {}", path.display()))?;
        let count = imported.len();
        self.mutate_catalog(|catalog| {
            catalog.merge(imported.recipes().to_vec());
            Ok(())
        })?;
        tracing::info!(count, "recipes imported");
        Ok(count)
    }

    /// Whole-catalog dump. Returns the number of recipes written.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let document = self.catalog.to_json()?;
        fs::write(path, document)
            .with_context(|| format!("writing export file {}", path.display()))?;
        Ok(self.catalog.len())
    }

    /// Apply a catalog mutation, then persist. Content-only edits keep the
    /// current plan; only a size change reshuffles.
    fn mutate_catalog<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Catalog) -> Result<()>,
    {
        let before = self.catalog.len();
        mutate(&mut self.catalog)?;
        self.store.save_catalog(&self.catalog)?;
        if self.catalog.len() != before {
            self.reshuffle()?;
        }
        Ok(())
    }
}
