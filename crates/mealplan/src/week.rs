use recipe::{MealDay, MealTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// The three slots of a day, in plan iteration order.
pub const MEAL_SLOTS: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

/// Fixed weekday names, iterated Monday through Sunday.
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
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Saturday and Sunday are `Weekend`, everything else `Weekday`.
    pub fn day_type(self) -> MealDay {
        match self {
            Weekday::Saturday | Weekday::Sunday => MealDay::Weekend,
            _ => MealDay::Weekday,
        }
    }
}
