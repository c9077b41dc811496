use crate::categorization::{CategoryRules, ShoppingCategory};
use crate::normalize::{normalize_phrase, split_phrases};
use mealplan::WeeklyPlan;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::VariantArray;

/// Categorized, deduplicated, alphabetized shopping list.
///
/// Derived wholesale from a weekly plan on every request, never persisted.
/// All seven categories are always present, empty ones included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingList {
    pub meat: Vec<String>,
    pub fruits: Vec<String>,
    pub veggies: Vec<String>,
    pub grain: Vec<String>,
    pub dairy: Vec<String>,
    pub sauce: Vec<String>,
    pub other: Vec<String>,
}

impl ShoppingList {
    pub fn items(&self, category: ShoppingCategory) -> &[String] {
        match category {
            ShoppingCategory::Meat => &self.meat,
            ShoppingCategory::Fruits => &self.fruits,
            ShoppingCategory::Veggies => &self.veggies,
            ShoppingCategory::Grain => &self.grain,
            ShoppingCategory::Dairy => &self.dairy,
            ShoppingCategory::Sauce => &self.sauce,
            ShoppingCategory::Other => &self.other,
        }
    }

    fn items_mut(&mut self, category: ShoppingCategory) -> &mut Vec<String> {
        match category {
            ShoppingCategory::Meat => &mut self.meat,
            ShoppingCategory::Fruits => &mut self.fruits,
            ShoppingCategory::Veggies => &mut self.veggies,
            ShoppingCategory::Grain => &mut self.grain,
            ShoppingCategory::Dairy => &mut self.dairy,
            ShoppingCategory::Sauce => &mut self.sauce,
            ShoppingCategory::Other => &mut self.other,
        }
    }

    /// Categories in display order with their items.
    pub fn categories(&self) -> impl Iterator<Item = (ShoppingCategory, &[String])> {
        ShoppingCategory::VARIANTS
            .iter()
            .map(|&category| (category, self.items(category)))
    }

    pub fn total_items(&self) -> usize {
        self.categories().map(|(_, items)| items.len()).sum()
    }
}

/// Shopping list aggregator.
///
/// Pure transformation over a weekly plan: flatten assigned recipes'
/// ingredient text, dedup by normalized form (first original phrase wins),
/// classify through the keyword rules, and sort each category by
/// normalized form. No state survives a call, so repeated aggregation of
/// the same plan is byte-identical.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListAggregator {
    rules: CategoryRules,
}

impl ShoppingListAggregator {
    pub fn new() -> Self {
        ShoppingListAggregator::default()
    }

    pub fn with_rules(rules: CategoryRules) -> Self {
        ShoppingListAggregator { rules }
    }

    pub fn aggregate(&self, plan: &WeeklyPlan) -> ShoppingList {
        // Flatten in day-then-meal order and dedup; the first original
        // spelling seen for each normalized form is the one displayed.
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept: Vec<(String, String)> = Vec::new();
        for recipe in plan.assigned() {
            for phrase in split_phrases(&recipe.ingredients) {
                let normalized = normalize_phrase(phrase);
                if seen.insert(normalized.clone()) {
                    kept.push((normalized, phrase.to_string()));
                }
            }
        }

        let mut buckets: Vec<Vec<(String, String)>> =
            vec![Vec::new(); ShoppingCategory::VARIANTS.len()];
        for (normalized, original) in kept {
            let category = self.rules.classify(&normalized);
            let index = ShoppingCategory::VARIANTS
                .iter()
                .position(|&c| c == category)
                .expect("category is a variant");
            buckets[index].push((normalized, original));
        }

        let mut list = ShoppingList::default();
        for (&category, mut bucket) in ShoppingCategory::VARIANTS.iter().zip(buckets) {
            bucket.sort_by(|a, b| a.0.cmp(&b.0));
            *list.items_mut(category) = bucket.into_iter().map(|(_, original)| original).collect();
        }
        list
    }
}
