pub mod aggregation;
pub mod categorization;
pub mod normalize;

pub use aggregation::{ShoppingList, ShoppingListAggregator};
pub use categorization::{CategoryRule, CategoryRules, ShoppingCategory};
pub use normalize::{normalize_phrase, split_phrases};
