use mealplan::{MEAL_SLOTS, PlanGenerator, Weekday, WeeklyPlan};
use rand::SeedableRng;
use rand::rngs::StdRng;
use recipe::{MealDay, MealTime, Recipe};
use strum::VariantArray;

fn tagged(title: &str, meal_time: MealTime, meal_day: MealDay) -> Recipe {
    let mut recipe = Recipe::new(title);
    recipe.tags.meal_time = meal_time;
    recipe.tags.meal_day = meal_day;
    recipe
}

fn weekday_lunches(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| tagged(&format!("Lunch {}", i), MealTime::Lunch, MealDay::Weekday))
        .collect()
}

/// Same catalog, same seed: identical plan, run after run.
#[test]
fn generation_is_deterministic_under_a_seeded_rng() {
    let mut catalog = weekday_lunches(4);
    catalog.push(tagged("Omelette", MealTime::Breakfast, MealDay::Weekday));
    catalog.push(tagged("Stew", MealTime::Dinner, MealDay::Weekend));

    let first = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(7));
    let second = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
}

/// Every assigned slot holds a recipe tagged for that slot and day type.
#[test]
fn assigned_slots_match_meal_time_and_day_type() {
    let mut catalog = Vec::new();
    for meal in [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner] {
        for day_type in [MealDay::Weekday, MealDay::Weekend] {
            catalog.push(tagged(&format!("{meal} {day_type}"), meal, day_type));
            catalog.push(tagged(&format!("{meal} {day_type} alt"), meal, day_type));
        }
    }

    let plan = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(11));
    for (day, slots) in plan.days() {
        for &meal in &MEAL_SLOTS {
            let recipe = slots.slot(meal).expect("catalog covers every slot");
            assert_eq!(recipe.tags.meal_time, meal);
            assert_eq!(recipe.tags.meal_day, day.day_type());
        }
    }
}

/// With five weekday lunches, Monday..Friday serve five distinct recipes.
#[test]
fn lunches_do_not_repeat_until_the_pool_is_exhausted() {
    let catalog = weekday_lunches(5);

    for seed in 0..20 {
        let plan = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(seed));
        let mut served = Vec::new();
        for day in [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ] {
            let lunch = plan.slot(day, MealTime::Lunch).expect("lunch assigned");
            assert!(
                !served.contains(&lunch.id),
                "seed {seed}: {} repeated before exhaustion",
                lunch.title
            );
            served.push(lunch.id.clone());
        }
    }
}

/// A pool smaller than the week wraps: three lunches cover five weekdays
/// with no empty slot, and the restarted cycle stays repeat-free.
#[test]
fn exhausted_lunch_pool_wraps_into_a_fresh_cycle() {
    let catalog = weekday_lunches(3);

    for seed in 0..20 {
        let plan = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(seed));
        let served: Vec<_> = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
        .iter()
        .map(|&day| plan.slot(day, MealTime::Lunch).expect("lunch assigned").id.clone())
        .collect();

        // First cycle: all three distinct.
        assert_ne!(served[0], served[1]);
        assert_ne!(served[0], served[2]);
        assert_ne!(served[1], served[2]);
        // Second cycle starts at Thursday and must not repeat within itself.
        assert_ne!(served[3], served[4]);
    }
}

/// A single lunch recipe is served every matching day; the no-repeat rule
/// never leaves a slot empty.
#[test]
fn single_lunch_recipe_fills_every_weekday() {
    let catalog = weekday_lunches(1);
    let plan = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(3));

    for day in Weekday::VARIANTS {
        let lunch = plan.slot(*day, MealTime::Lunch);
        match day.day_type() {
            MealDay::Weekday => assert_eq!(lunch.unwrap().title, "Lunch 0"),
            _ => assert!(lunch.is_none(), "no weekend lunches exist"),
        }
    }
}

/// Empty catalog: a complete plan of 21 unassigned slots, not an error.
#[test]
fn empty_catalog_yields_an_all_empty_plan() {
    let plan = PlanGenerator::generate(&[], &mut StdRng::seed_from_u64(1));
    assert_eq!(plan, WeeklyPlan::empty());
    assert_eq!(plan.assigned_count(), 0);
}

/// Slots with no matching day type stay unassigned while others fill.
#[test]
fn unmatched_day_types_leave_slots_unassigned() {
    let catalog = vec![tagged("Pancakes", MealTime::Breakfast, MealDay::Weekend)];
    let plan = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(5));

    assert!(plan.slot(Weekday::Monday, MealTime::Breakfast).is_none());
    assert_eq!(
        plan.slot(Weekday::Saturday, MealTime::Breakfast).unwrap().title,
        "Pancakes"
    );
    assert!(plan.slot(Weekday::Saturday, MealTime::Dinner).is_none());
}

/// Plans persist verbatim: serialization round-trips the full grid,
/// including embedded recipe copies and unassigned slots.
#[test]
fn weekly_plan_round_trips_through_json() {
    let mut catalog = weekday_lunches(2);
    catalog.push(tagged("Granola", MealTime::Breakfast, MealDay::Weekend));

    let plan = PlanGenerator::generate(&catalog, &mut StdRng::seed_from_u64(9));
    let json = serde_json::to_string(&plan).unwrap();
    let restored: WeeklyPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, plan);
}
