use crate::week::{MEAL_SLOTS, Weekday};
use recipe::{MealTime, Recipe};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

/// One day's three slots. `None` means no matching recipe was available.
///
/// Slots hold owned copies of the assigned recipes so the plan persists
/// verbatim and survives later catalog edits unchanged until the next
/// regeneration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DayPlan {
    pub breakfast: Option<Recipe>,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
}

impl DayPlan {
    pub fn slot(&self, meal: MealTime) -> Option<&Recipe> {
        match meal {
            MealTime::Breakfast => self.breakfast.as_ref(),
            MealTime::Lunch => self.lunch.as_ref(),
            MealTime::Dinner => self.dinner.as_ref(),
            MealTime::Unset => None,
        }
    }
}

/// The 7-day × 3-meal assignment grid.
///
/// Always complete: every slot exists, possibly unassigned. Regenerated
/// wholesale on catalog size change or explicit reshuffle, never patched
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WeeklyPlan {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
    pub saturday: DayPlan,
    pub sunday: DayPlan,
}

impl WeeklyPlan {
    /// A plan with all 21 slots unassigned.
    pub fn empty() -> Self {
        WeeklyPlan::default()
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    pub fn slot(&self, day: Weekday, meal: MealTime) -> Option<&Recipe> {
        self.day(day).slot(meal)
    }

    /// Days in Monday..Sunday order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        Weekday::VARIANTS.iter().map(|&day| (day, self.day(day)))
    }

    /// Assigned recipes in iteration order over days, then meal times.
    pub fn assigned(&self) -> impl Iterator<Item = &Recipe> {
        self.days()
            .flat_map(|(_, day)| MEAL_SLOTS.into_iter().filter_map(move |meal| day.slot(meal)))
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned().count()
    }
}
