use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// Shopping list category. Variant order is the list's display order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShoppingCategory {
    Meat,
    Fruits,
    Veggies,
    Grain,
    Dairy,
    Sauce,
    Other,
}

/// One classification rule: a category plus the lowercase keywords that
/// route a normalized phrase into it via substring match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: ShoppingCategory,
    pub keywords: Vec<String>,
}

/// Ordered keyword rule set for ingredient classification.
///
/// Rules are data, not logic: the default set mirrors the stock vocabulary
/// below, and callers may supply their own (e.g. deserialized from a config
/// file) to extend the vocabulary without touching the aggregator. Rule
/// order is precedence order; the first rule with a matching keyword wins,
/// so a phrase containing both "sauce" and "chicken" lands in sauce.
/// Anything no rule matches falls through to `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        CategoryRules { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Classify a normalized phrase. Matching is substring containment
    /// against lowercase keywords; the phrase is expected to be normalized
    /// (and therefore lowercase) already.
    pub fn classify(&self, normalized: &str) -> ShoppingCategory {
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| normalized.contains(k.as_str())) {
                return rule.category;
            }
        }
        ShoppingCategory::Other
    }
}

fn rule(category: ShoppingCategory, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        CategoryRules::new(vec![
            rule(
                ShoppingCategory::Sauce,
                &[
                    "sauce", "dressing", "oil", "vinegar", "paste", "mayo", "kimchi", "miso",
                    "extract",
                ],
            ),
            rule(
                ShoppingCategory::Meat,
                &[
                    "chicken", "beef", "pork", "fish", "turkey", "lamb", "salmon", "tuna", "crab",
                    "shrimp", "sausage",
                ],
            ),
            rule(
                ShoppingCategory::Fruits,
                &["apple", "banana", "orange", "berry", "fruit", "avocado", "lemon", "fig"],
            ),
            rule(
                ShoppingCategory::Veggies,
                &[
                    "lettuce", "tomato", "carrot", "onion", "pepper", "vegetable", "spinach",
                    "broccoli", "cauliflower", "garlic", "eggplant", "sprout", "corn", "kale",
                    "potato", "cilantro", "daikon", "dill", "cabbage", "zucchini",
                ],
            ),
            rule(
                ShoppingCategory::Grain,
                &[
                    "rice", "pasta", "bread", "cereal", "oat", "quinoa", "seed", "spaghetti",
                    "chickpea", "walnut", "sesame", "peanut",
                ],
            ),
            rule(
                ShoppingCategory::Dairy,
                &["milk", "cheese", "yogurt", "cream", "egg"],
            ),
        ])
    }
}
