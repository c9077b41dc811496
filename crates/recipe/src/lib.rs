pub mod catalog;
pub mod model;
pub mod tags;

pub use catalog::{Catalog, CatalogError};
pub use model::{Recipe, RecipeId};
pub use tags::{Cuisine, MealDay, MealTime, PrepTime, RecipeTags};
