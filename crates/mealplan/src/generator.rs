use crate::plan::WeeklyPlan;
use crate::week::Weekday;
use rand::Rng;
use rand::seq::IndexedRandom;
use recipe::{MealDay, MealTime, Recipe, RecipeId};
use std::collections::HashSet;
use strum::VariantArray;

/// Weekly plan generator.
///
/// Selection is driven by a caller-supplied random source so plans are
/// reproducible under test; production callers go through
/// [`generate_weekly_plan`], which draws from thread-local entropy.
pub struct PlanGenerator;

impl PlanGenerator {
    /// Fill all 21 slots in one pass over Monday..Sunday.
    ///
    /// Breakfast and dinner pick uniformly from the recipes tagged for the
    /// slot and the day's type, independently per slot (repeats allowed).
    /// Lunch keeps a used-id set across the whole pass so no lunch repeats
    /// until every candidate has been served once; once the pool is
    /// exhausted the pick falls back to the full pool and the set restarts
    /// with that pick. Empty pools leave the slot unassigned, so an empty
    /// catalog yields an all-empty plan rather than an error.
    pub fn generate<R: Rng + ?Sized>(catalog: &[Recipe], rng: &mut R) -> WeeklyPlan {
        let mut plan = WeeklyPlan::empty();
        let mut used_lunch_ids: HashSet<RecipeId> = HashSet::new();

        for &day in Weekday::VARIANTS {
            let day_type = day.day_type();
            let slots = plan.day_mut(day);
            slots.breakfast = pick(catalog, MealTime::Breakfast, day_type, rng).cloned();
            slots.lunch = pick_lunch(catalog, day_type, &mut used_lunch_ids, rng).cloned();
            slots.dinner = pick(catalog, MealTime::Dinner, day_type, rng).cloned();
        }

        plan
    }
}

/// Production entry point: ambient entropy, no seed control exposed.
pub fn generate_weekly_plan(catalog: &[Recipe]) -> WeeklyPlan {
    PlanGenerator::generate(catalog, &mut rand::rng())
}

fn matching<'a>(catalog: &'a [Recipe], meal: MealTime, day_type: MealDay) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|r| r.tags.meal_time == meal && r.tags.meal_day == day_type)
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(
    catalog: &'a [Recipe],
    meal: MealTime,
    day_type: MealDay,
    rng: &mut R,
) -> Option<&'a Recipe> {
    matching(catalog, meal, day_type).choose(rng).copied()
}

fn pick_lunch<'a, R: Rng + ?Sized>(
    catalog: &'a [Recipe],
    day_type: MealDay,
    used: &mut HashSet<RecipeId>,
    rng: &mut R,
) -> Option<&'a Recipe> {
    let pool = matching(catalog, MealTime::Lunch, day_type);
    let unused: Vec<&Recipe> = pool
        .iter()
        .filter(|r| !used.contains(&r.id))
        .copied()
        .collect();

    if let Some(&choice) = unused.choose(rng) {
        used.insert(choice.id.clone());
        return Some(choice);
    }

    // Variety exhausted for this day type: reuse rather than leave the slot
    // empty, and restart the cycle at the reused pick.
    let choice = pool.choose(rng).copied()?;
    used.clear();
    used.insert(choice.id.clone());
    Some(choice)
}
