use crate::tags::RecipeTags;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Recipe identity, stable across edits.
///
/// Catalogs imported from older exports carry numeric ids (millisecond
/// timestamps); recipes created here get UUID strings. The untagged
/// representation keeps both shapes intact through export/import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Int(i64),
    Str(String),
}

impl RecipeId {
    pub fn generate() -> Self {
        RecipeId::Str(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Int(n) => write!(f, "{}", n),
            RecipeId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecipeId {
    fn from(value: i64) -> Self {
        RecipeId::Int(value)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        RecipeId::Str(value.to_string())
    }
}

/// A single catalog entry.
///
/// Only `title` is required; everything else defaults to empty.
/// `ingredients` is a free-text, comma-delimited list of ingredient phrases;
/// parsing happens downstream in the shopping list aggregator.
/// `image` is an opaque stored-path reference, never inspected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: RecipeTags,
}

impl Recipe {
    /// New recipe with a fresh id and everything but the title left empty.
    pub fn new(title: impl Into<String>) -> Self {
        Recipe {
            id: RecipeId::generate(),
            title: title.into(),
            ingredients: String::new(),
            instructions: String::new(),
            image: None,
            tags: RecipeTags::default(),
        }
    }
}
