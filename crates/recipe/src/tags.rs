use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Which part of the week a recipe is meant for.
///
/// Also doubles as the derived day type of a weekday during plan generation:
/// a recipe is eligible for a slot when its `meal_day` tag equals the day's
/// type. `Unset` never matches, so untagged recipes are never scheduled.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum MealDay {
    Weekday,
    Weekend,
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Unset,
}

/// Meal-time tag. The three named variants are also the plan's slot names.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Unset,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Cuisine {
    Chinese,
    Japanese,
    Thai,
    Italian,
    Mexican,
    American,
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Unset,
}

/// Rough preparation-time bucket. Serialized with the interchange labels
/// ("5 min", "15 min", "30 min", ">30 min") so catalogs round-trip exactly.
#[derive(
    EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum PrepTime {
    #[serde(rename = "5 min")]
    #[strum(serialize = "5 min")]
    Min5,
    #[serde(rename = "15 min")]
    #[strum(serialize = "15 min")]
    Min15,
    #[serde(rename = "30 min")]
    #[strum(serialize = "30 min")]
    Min30,
    #[serde(rename = ">30 min")]
    #[strum(serialize = ">30 min")]
    Over30,
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Unset,
}

/// Tag block attached to every recipe. All tags are optional; an unset tag
/// serializes as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeTags {
    pub meal_day: MealDay,
    pub meal_time: MealTime,
    pub cuisine: Cuisine,
    pub prep_time: PrepTime,
}
